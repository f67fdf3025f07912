//! Diagnostic sink for validator misconfiguration warnings
//!
//! A regex attached to a number or array rule is a developer mistake, not a
//! user input error: the validator skips the check and reports it here
//! instead of failing the field. The sink is injected so hosts decide where
//! warnings go (browser console, server log, test capture).

/// Receiver for non-fatal validator diagnostics.
pub trait Diagnostics {
    fn warn(&self, message: &str);
}

/// Default sink: forwards to the `log` facade.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}
