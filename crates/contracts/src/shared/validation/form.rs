//! Form state container
//!
//! Holds a screen's current field values, its static rule set and the
//! errors of the last submit attempt. Mirrors what every screen keeps in
//! component state: `{ data, validations, errors }`.

use super::record::{validate_submission, FieldErrors, FormData, RuleSet};
use super::value::FieldValue;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub data: FormData,
    pub rules: RuleSet,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn new(data: FormData, rules: RuleSet) -> Self {
        Self {
            data,
            rules,
            errors: FieldErrors::new(),
        }
    }

    /// Overwrite one field's value, as an input change handler does.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.data.insert(name.to_string(), value.into());
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.data.get(name)
    }

    /// Inline error for one field from the last validation, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Validate the current data and store the per-field errors. Returns
    /// whether submission may proceed. A passing run clears stale errors.
    pub fn validate(&mut self) -> bool {
        let check = validate_submission(&self.data, &self.rules);
        self.errors = check.errors;
        check.all_valid
    }
}
