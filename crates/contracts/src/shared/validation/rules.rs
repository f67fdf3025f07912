//! Declarative validation rules for form fields

use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Expected shape of a field's value.
///
/// `Text` is the default; number and array are explicit alternates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Items,
}

impl FieldKind {
    /// Resolve the legacy `isNumber`/`isArray` flag pair into a kind.
    ///
    /// When both flags are set, array wins over number. The old validator
    /// ran its type checks as an if/else-if chain (array first, then
    /// number, then string) and rule sets in the wild depend on that
    /// precedence.
    pub const fn from_flags(is_number: bool, is_array: bool) -> Self {
        if is_array {
            Self::Items
        } else if is_number {
            Self::Number
        } else {
            Self::Text
        }
    }
}

/// Validation rule for a single field.
///
/// `min`/`max` are interpreted by kind: character count for text, item
/// count for arrays, numeric bounds for numbers. `pattern` only applies to
/// text fields. `label` overrides the display name derived from the field
/// name in error messages.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<&'static Regex>,
    pub label: Option<Cow<'static, str>>,
}

impl FieldRule {
    /// Rule with no constraints.
    pub const fn none() -> Self {
        Self {
            required: false,
            kind: FieldKind::Text,
            min: None,
            max: None,
            pattern: None,
            label: None,
        }
    }

    /// Rule for a required field.
    pub const fn required() -> Self {
        Self {
            required: true,
            kind: FieldKind::Text,
            min: None,
            max: None,
            pattern: None,
            label: None,
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: &'static Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(Cow::Borrowed(label));
        self
    }
}

/// Legacy JSON shape of a rule, as the dashboard screens declared them:
/// `{ isRequired, isNumber, isArray, min, max, label }`.
///
/// Lowers into a [`FieldRule`] via [`FieldKind::from_flags`]. Regex
/// patterns cannot travel as JSON and stay per-screen Rust constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleSpec {
    pub is_required: bool,
    pub is_number: bool,
    pub is_array: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub label: Option<String>,
}

impl From<RuleSpec> for FieldRule {
    fn from(spec: RuleSpec) -> Self {
        Self {
            required: spec.is_required,
            kind: FieldKind::from_flags(spec.is_number, spec.is_array),
            min: spec.min,
            max: spec.max,
            pattern: None,
            label: spec.label.map(Cow::Owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_precedence() {
        assert_eq!(FieldKind::from_flags(false, false), FieldKind::Text);
        assert_eq!(FieldKind::from_flags(true, false), FieldKind::Number);
        assert_eq!(FieldKind::from_flags(false, true), FieldKind::Items);
        // Both flags set: array beats number
        assert_eq!(FieldKind::from_flags(true, true), FieldKind::Items);
    }

    #[test]
    fn test_constructors() {
        let rule = FieldRule::none();
        assert!(!rule.is_required());
        assert_eq!(rule.kind, FieldKind::Text);

        let rule = FieldRule::required().min(5.0).label("Postal Zone");
        assert!(rule.is_required());
        assert_eq!(rule.min, Some(5.0));
        assert_eq!(rule.label.as_deref(), Some("Postal Zone"));
    }

    #[test]
    fn test_rule_spec_lowering() {
        let spec: RuleSpec =
            serde_json::from_str(r#"{"isRequired":true,"isArray":true,"label":"Roles"}"#).unwrap();
        let rule: FieldRule = spec.into();
        assert!(rule.required);
        assert_eq!(rule.kind, FieldKind::Items);
        assert_eq!(rule.label.as_deref(), Some("Roles"));

        // Ambiguous spec: array flag wins
        let spec: RuleSpec =
            serde_json::from_str(r#"{"isNumber":true,"isArray":true}"#).unwrap();
        let rule: FieldRule = spec.into();
        assert_eq!(rule.kind, FieldKind::Items);
    }
}
