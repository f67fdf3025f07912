//! Field-level validator
//!
//! Runs one field's value against its rule and returns a pass/fail result
//! with a human-readable message. Checks run in a fixed order and the first
//! failure wins: required → empty pass-through → type → min → max → regex.
//! Nothing here panics or returns `Err`; every outcome is a [`FieldCheck`].

use serde::{Deserialize, Serialize};

use super::diagnostics::{Diagnostics, LogDiagnostics};
use super::rules::{FieldKind, FieldRule};
use super::value::FieldValue;
use crate::shared::patterns;

/// Result of validating a single field. `error` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub error: String,
}

impl FieldCheck {
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            error: String::new(),
        }
    }

    pub fn fail(error: String) -> Self {
        Self {
            is_valid: false,
            error,
        }
    }
}

/// Validate one field, sending misconfiguration warnings to the `log` facade.
pub fn validate_field(value: &FieldValue, field_name: &str, rule: &FieldRule) -> FieldCheck {
    validate_field_with(value, field_name, rule, &LogDiagnostics)
}

/// Validate one field with an explicit diagnostic sink.
pub fn validate_field_with(
    value: &FieldValue,
    field_name: &str,
    rule: &FieldRule,
    diagnostics: &dyn Diagnostics,
) -> FieldCheck {
    let name = display_name(field_name, rule);

    // 1. Required check
    if rule.required && value.is_empty() {
        return FieldCheck::fail(format!("{} is required", name));
    }

    // Empty and not required: skip everything else
    if value.is_empty() {
        return FieldCheck::pass();
    }

    // 2. Type check
    match rule.kind {
        FieldKind::Items => {
            if !matches!(value, FieldValue::Items(_)) {
                return FieldCheck::fail(format!("{} should be an array", name));
            }
        }
        FieldKind::Number => {
            if !patterns::NUMERIC.is_match(&value.as_text()) {
                return FieldCheck::fail(format!("{} should be a number", name));
            }
        }
        FieldKind::Text => {
            if !matches!(value, FieldValue::Text(_)) {
                return FieldCheck::fail(format!("{} should be a string", name));
            }
        }
    }

    // 3. Min check
    if let Some(min) = rule.min {
        match rule.kind {
            FieldKind::Items => {
                if let FieldValue::Items(items) = value {
                    if (items.len() as f64) < min {
                        return FieldCheck::fail(format!(
                            "Minimum {} item{} required",
                            min,
                            count_suffix(min)
                        ));
                    }
                }
            }
            FieldKind::Number => {
                if let Some(number) = numeric_value(value) {
                    if number < min {
                        return FieldCheck::fail(format!("Minimum value required is {}", min));
                    }
                }
            }
            FieldKind::Text => {
                if (trimmed_len(value) as f64) < min {
                    return FieldCheck::fail(format!(
                        "Minimum {} character{} required",
                        min,
                        count_suffix(min)
                    ));
                }
            }
        }
    }

    // 4. Max check
    if let Some(max) = rule.max {
        match rule.kind {
            FieldKind::Items => {
                if let FieldValue::Items(items) = value {
                    if (items.len() as f64) > max {
                        return FieldCheck::fail(format!(
                            "Maximum {} item{} allowed",
                            max,
                            count_suffix(max)
                        ));
                    }
                }
            }
            FieldKind::Number => {
                if let Some(number) = numeric_value(value) {
                    if number > max {
                        return FieldCheck::fail(format!("Maximum value allowed is {}", max));
                    }
                }
            }
            FieldKind::Text => {
                if (trimmed_len(value) as f64) > max {
                    return FieldCheck::fail(format!(
                        "Maximum {} character{} allowed",
                        max,
                        count_suffix(max)
                    ));
                }
            }
        }
    }

    // 5. Regex check, text fields only
    if let Some(pattern) = rule.pattern {
        match rule.kind {
            FieldKind::Items => {
                diagnostics.warn("Regex validation is not applicable for arrays");
            }
            FieldKind::Number => {
                diagnostics.warn("Regex validation is not applicable for numbers");
            }
            FieldKind::Text => {
                if !pattern.is_match(&value.as_text()) {
                    return FieldCheck::fail(format!("{} is not valid", name));
                }
            }
        }
    }

    FieldCheck::pass()
}

/// Display name used in error messages: the rule's label verbatim, or the
/// field name with its first character uppercased and underscores replaced
/// by spaces. No camelCase splitting — `postalZone` stays `PostalZone`
/// unless a label is supplied.
fn display_name(field_name: &str, rule: &FieldRule) -> String {
    if let Some(label) = rule.label.as_deref() {
        return label.to_string();
    }
    let mut chars = field_name.chars();
    match chars.next() {
        None => "Field".to_string(),
        Some(first) => {
            let mut name: String = first.to_uppercase().collect();
            name.push_str(chars.as_str());
            name.replace('_', " ")
        }
    }
}

/// `s are` when the count is above one, ` is` otherwise.
fn count_suffix(count: f64) -> &'static str {
    if count > 1.0 {
        "s are"
    } else {
        " is"
    }
}

fn numeric_value(value: &FieldValue) -> Option<f64> {
    value.as_text().parse::<f64>().ok()
}

fn trimmed_len(value: &FieldValue) -> usize {
    match value {
        FieldValue::Text(text) => text.trim().chars().count(),
        other => other.as_text().trim().chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::diagnostics::capture::CaptureDiagnostics;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    fn items(values: &[f64]) -> FieldValue {
        FieldValue::Items(values.iter().map(|v| FieldValue::Number(*v)).collect())
    }

    #[test]
    fn test_required_empty_variants() {
        let rule = FieldRule::required();
        for value in [FieldValue::Null, text(""), text("   ")] {
            let check = validate_field(&value, "name", &rule);
            assert!(!check.is_valid);
            assert_eq!(check.error, "Name is required");
        }

        let rule = FieldRule::required().kind(FieldKind::Items);
        let check = validate_field(&FieldValue::Items(vec![]), "roles", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Roles is required");
    }

    #[test]
    fn test_zero_and_false_are_not_empty() {
        let rule = FieldRule::required().kind(FieldKind::Number);
        let check = validate_field(&FieldValue::Number(0.0), "amount", &rule);
        assert!(check.is_valid);

        // false survives the required gate but is not a string
        let check = validate_field(&FieldValue::Flag(false), "flag", &FieldRule::required());
        assert!(!check.is_valid);
        assert_eq!(check.error, "Flag should be a string");
    }

    #[test]
    fn test_empty_optional_skips_all_checks() {
        let rule = FieldRule::none()
            .kind(FieldKind::Number)
            .min(10.0)
            .max(20.0);
        for value in [FieldValue::Null, text(""), text("  ")] {
            let check = validate_field(&value, "amount", &rule);
            assert!(check.is_valid);
            assert_eq!(check.error, "");
        }
    }

    #[test]
    fn test_number_type_check() {
        let rule = FieldRule::none().kind(FieldKind::Number);
        for value in [
            text("123"),
            text("12.5"),
            FieldValue::Number(123.0),
            FieldValue::Number(12.5),
        ] {
            assert!(validate_field(&value, "amount", &rule).is_valid);
        }
        for value in [text("-5"), text("12.5.3"), text("abc"), text(".5")] {
            let check = validate_field(&value, "amount", &rule);
            assert!(!check.is_valid);
            assert_eq!(check.error, "Amount should be a number");
        }
    }

    #[test]
    fn test_string_type_check() {
        let rule = FieldRule::none();
        let check = validate_field(&FieldValue::Number(5.0), "code", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Code should be a string");
    }

    #[test]
    fn test_array_type_check() {
        let rule = FieldRule::none().kind(FieldKind::Items);
        let check = validate_field(&text("oops"), "roles", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Roles should be an array");
    }

    #[test]
    fn test_string_min_max() {
        let rule = FieldRule::none().min(3.0);
        let check = validate_field(&text("ab"), "code", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Minimum 3 characters are required");
        assert!(validate_field(&text("abc"), "code", &rule).is_valid);

        // Trimmed length is what counts
        let check = validate_field(&text("  ab  "), "code", &rule);
        assert!(!check.is_valid);

        let rule = FieldRule::none().max(5.0);
        let check = validate_field(&text("abcdef"), "code", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Maximum 5 characters are allowed");
        assert!(validate_field(&text("abcde"), "code", &rule).is_valid);
    }

    #[test]
    fn test_singular_messages() {
        let rule = FieldRule::none().max(1.0);
        let check = validate_field(&text("ab"), "code", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Maximum 1 character is allowed");

        let rule = FieldRule::none().kind(FieldKind::Items).max(1.0);
        let check = validate_field(&items(&[1.0, 2.0]), "roles", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Maximum 1 item is allowed");

        let rule = FieldRule::none().kind(FieldKind::Items).min(2.0);
        let check = validate_field(&items(&[1.0]), "roles", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Minimum 2 items are required");
    }

    #[test]
    fn test_array_min_max() {
        let rule = FieldRule::none().kind(FieldKind::Items).min(3.0);
        let check = validate_field(&items(&[1.0, 2.0]), "roles", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Minimum 3 items are required");

        let rule = FieldRule::none().kind(FieldKind::Items).max(3.0);
        let check = validate_field(&items(&[1.0, 2.0, 3.0, 4.0]), "roles", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Maximum 3 items are allowed");
        assert!(validate_field(&items(&[1.0, 2.0, 3.0]), "roles", &rule).is_valid);
    }

    #[test]
    fn test_number_min_max() {
        let rule = FieldRule::none().kind(FieldKind::Number).min(10.0);
        let check = validate_field(&FieldValue::Number(5.0), "amount", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Minimum value required is 10");

        let rule = FieldRule::none().kind(FieldKind::Number).max(50.0);
        let check = validate_field(&text("100"), "amount", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Maximum value allowed is 50");
        assert!(validate_field(&text("50"), "amount", &rule).is_valid);
    }

    #[test]
    fn test_regex_on_text() {
        let rule = FieldRule::required()
            .label("Email")
            .pattern(&patterns::EMAIL);
        assert!(validate_field(&text("a@b.com"), "email", &rule).is_valid);

        let check = validate_field(&text("not-an-email"), "email", &rule);
        assert!(!check.is_valid);
        assert_eq!(check.error, "Email is not valid");
    }

    #[test]
    fn test_regex_on_non_text_warns_and_passes() {
        let sink = CaptureDiagnostics::default();

        let rule = FieldRule::none()
            .kind(FieldKind::Number)
            .pattern(&patterns::EMAIL);
        let check = validate_field_with(&FieldValue::Number(5.0), "amount", &rule, &sink);
        assert!(check.is_valid);

        let rule = FieldRule::none()
            .kind(FieldKind::Items)
            .pattern(&patterns::EMAIL);
        let check = validate_field_with(&items(&[1.0]), "roles", &rule, &sink);
        assert!(check.is_valid);

        let warnings = sink.warnings.borrow();
        assert_eq!(
            warnings.as_slice(),
            [
                "Regex validation is not applicable for numbers",
                "Regex validation is not applicable for arrays",
            ]
        );
    }

    #[test]
    fn test_display_name_derivation() {
        let rule = FieldRule::required();
        let check = validate_field(&text(""), "first_name", &rule);
        assert_eq!(check.error, "First name is required");

        // No camelCase splitting
        let check = validate_field(&text(""), "postalZone", &rule);
        assert_eq!(check.error, "PostalZone is required");

        // Label wins over derivation
        let rule = FieldRule::required().label("Postal Zone");
        let check = validate_field(&text(""), "postalZone", &rule);
        assert_eq!(check.error, "Postal Zone is required");

        // Empty field name falls back
        let check = validate_field(&text(""), "", &FieldRule::required());
        assert_eq!(check.error, "Field is required");
    }

    #[test]
    fn test_first_failure_wins() {
        // min would also fail, but type check fires first
        let rule = FieldRule::none().min(10.0);
        let check = validate_field(&FieldValue::Number(1.0), "code", &rule);
        assert_eq!(check.error, "Code should be a string");

        // min fires before max and regex
        let rule = FieldRule::none()
            .min(5.0)
            .max(2.0)
            .pattern(&patterns::EMAIL);
        let check = validate_field(&text("abc"), "code", &rule);
        assert_eq!(check.error, "Minimum 5 characters are required");
    }

    #[test]
    fn test_idempotence() {
        let rule = FieldRule::required().min(3.0).label("Code");
        let value = text("ab");
        let first = validate_field(&value, "code", &rule);
        let second = validate_field(&value, "code", &rule);
        assert_eq!(first, second);
    }
}
