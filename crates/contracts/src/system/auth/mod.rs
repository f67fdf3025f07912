//! Authentication DTOs and the login form

use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldRule, FieldValue, FormData, FormState, RuleSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: String,
}

pub fn initial_form_data() -> FormData {
    ["username", "password"]
        .into_iter()
        .map(|name| (name.to_string(), FieldValue::Text(String::new())))
        .collect()
}

pub fn validations() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "username".to_string(),
        FieldRule::required().label("User name"),
    );
    rules.insert(
        "password".to_string(),
        FieldRule::required().label("Password"),
    );
    rules
}

pub fn form_state() -> FormState {
    FormState::new(initial_form_data(), validations())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_login_fails() {
        let mut form = form_state();
        assert!(!form.validate());
        assert_eq!(form.error("username"), Some("User name is required"));
        assert_eq!(form.error("password"), Some("Password is required"));
    }

    #[test]
    fn test_filled_login_passes() {
        let mut form = form_state();
        form.set("username", "admin");
        form.set("password", "secret");
        assert!(form.validate());
    }
}
