//! Shared regex patterns used by form rule sets

use once_cell::sync::Lazy;
use regex::Regex;

/// Numeric gate used by the validator's number type check: digits, one
/// optional decimal point, optional trailing digits. Deliberately rejects
/// negative numbers and leading decimal points like `.5` — inherited from
/// the legacy dashboard and kept for compatibility.
pub static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.?\d*$").expect("valid regex"));

/// Email pattern shared by every screen that validates an email field.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric() {
        assert!(NUMERIC.is_match("123"));
        assert!(NUMERIC.is_match("12.5"));
        assert!(NUMERIC.is_match("12."));
        assert!(!NUMERIC.is_match("-5"));
        assert!(!NUMERIC.is_match(".5"));
        assert!(!NUMERIC.is_match("12.5.3"));
        assert!(!NUMERIC.is_match("abc"));
        assert!(!NUMERIC.is_match(""));
    }

    #[test]
    fn test_email() {
        assert!(EMAIL.is_match("a@b.com"));
        assert!(EMAIL.is_match("first.last+tag@sub.domain.sa"));
        assert!(!EMAIL.is_match("not-an-email"));
        assert!(!EMAIL.is_match("a@b"));
        assert!(!EMAIL.is_match("@b.com"));
    }
}
