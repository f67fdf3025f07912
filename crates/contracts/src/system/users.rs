//! User management: DTOs and the user create form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patterns;
use crate::shared::validation::{FieldKind, FieldRule, FieldValue, FormData, FormState, RuleSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub assigned_roles: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub assigned_roles: Vec<String>,
    pub is_active: bool,
}

/// Empty defaults of the user-management form. Roles start as an empty
/// array and the active toggle defaults to on.
pub fn initial_form_data() -> FormData {
    let mut data: FormData = [
        "firstName",
        "lastName",
        "email",
        "password",
        "confirmPassword",
    ]
    .into_iter()
    .map(|name| (name.to_string(), FieldValue::Text(String::new())))
    .collect();
    data.insert("assignedRoles".to_string(), FieldValue::Items(vec![]));
    data.insert("isActive".to_string(), FieldValue::Flag(true));
    data
}

pub fn validations() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "firstName".to_string(),
        FieldRule::required().label("First Name"),
    );
    rules.insert(
        "lastName".to_string(),
        FieldRule::required().label("Last Name"),
    );
    rules.insert(
        "password".to_string(),
        FieldRule::required().label("Password"),
    );
    rules.insert(
        "confirmPassword".to_string(),
        FieldRule::required().label("Password"),
    );
    rules.insert(
        "assignedRoles".to_string(),
        FieldRule::required().kind(FieldKind::Items).label("Roles"),
    );
    // No label: the derived display name "Email" is already right
    rules.insert(
        "email".to_string(),
        FieldRule::required().pattern(&patterns::EMAIL),
    );
    rules
}

pub fn form_state() -> FormState {
    FormState::new(initial_form_data(), validations())
}
