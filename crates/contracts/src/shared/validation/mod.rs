//! Declarative form validation
//!
//! Every create/edit screen of the dashboard validates its state through
//! this module before submitting: a static rule set per form, a fresh
//! check on every submit attempt, and a structured result the screen
//! renders as inline errors. The engine is pure and infallible — no I/O,
//! no panics, no `Err` path; misconfiguration surfaces through an
//! injectable [`Diagnostics`] sink.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::validation::{validate_submission, FieldRule, FieldValue};
//!
//! let check = validate_submission(&data, &rules);
//! if !check.all_valid {
//!     render_inline(&check.errors);
//! }
//! ```

mod diagnostics;
mod field;
mod form;
mod record;
mod rules;
mod value;

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use field::{validate_field, validate_field_with, FieldCheck};
pub use form::FormState;
pub use record::{
    validate_submission, validate_submission_with, FieldErrors, FormData, RuleSet,
    SubmissionCheck,
};
pub use rules::{FieldKind, FieldRule, RuleSpec};
pub use value::FieldValue;
