//! Record-level validator
//!
//! Walks a whole submission and collects one error per failing field.
//! Iteration is driven by the data's keys: fields without a rule are
//! skipped, and a ruled field that is missing from the data is never
//! visited — even a required one. Screens keep that sound by always
//! building their form state from `initial_form_data()`, which carries
//! every field with an empty default. The asymmetry is inherited from the
//! legacy dashboard and preserved for compatibility.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::diagnostics::{Diagnostics, LogDiagnostics};
use super::field::validate_field_with;
use super::rules::FieldRule;
use super::value::FieldValue;

/// Current values of a form, field name → value.
pub type FormData = BTreeMap<String, FieldValue>;

/// Static rule set of a form, field name → rule.
pub type RuleSet = BTreeMap<String, FieldRule>;

/// Per-field error messages of one submit attempt.
pub type FieldErrors = BTreeMap<String, String>;

/// Result of validating a whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCheck {
    pub all_valid: bool,
    pub errors: FieldErrors,
}

/// Validate every ruled field of a submission. Never panics; the result
/// struct is the only output.
pub fn validate_submission(data: &FormData, rules: &RuleSet) -> SubmissionCheck {
    validate_submission_with(data, rules, &LogDiagnostics)
}

/// [`validate_submission`] with an explicit diagnostic sink.
pub fn validate_submission_with(
    data: &FormData,
    rules: &RuleSet,
    diagnostics: &dyn Diagnostics,
) -> SubmissionCheck {
    let mut all_valid = true;
    let mut errors = FieldErrors::new();

    // Fields are independent: one failure does not stop the walk
    for (name, value) in data {
        if let Some(rule) = rules.get(name) {
            let check = validate_field_with(value, name, rule, diagnostics);
            if !check.is_valid {
                errors.insert(name.clone(), check.error);
                all_valid = false;
            }
        }
    }

    SubmissionCheck { all_valid, errors }
}
