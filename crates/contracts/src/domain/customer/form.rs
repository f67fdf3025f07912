//! Customer create/edit form: empty defaults and rule set

use crate::shared::patterns;
use crate::shared::validation::{FieldRule, FieldValue, FormData, FormState, RuleSet};

pub fn initial_form_data() -> FormData {
    [
        "registrationName",
        "registrationNameAr",
        "email",
        "phone",
        "customerVAT",
        "address",
        "addressAr",
        "streetName",
        "streetNameAr",
        "buildingNumber",
        "citySubDivisionName",
        "citySubDivisionNameAr",
        "cityName",
        "cityNameAr",
        "postalZone",
        "countryCode",
    ]
    .into_iter()
    .map(|name| (name.to_string(), FieldValue::Text(String::new())))
    .collect()
}

pub fn validations() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "streetName".to_string(),
        FieldRule::required().label("Street Name"),
    );
    rules.insert(
        "streetNameAr".to_string(),
        FieldRule::required().label("Street Name (Arabic)"),
    );
    rules.insert(
        "address".to_string(),
        FieldRule::required().label("Full Address"),
    );
    rules.insert(
        "addressAr".to_string(),
        FieldRule::required().label("Full Address (Arabic)"),
    );
    rules.insert(
        "buildingNumber".to_string(),
        FieldRule::required().label("Building Number"),
    );
    rules.insert(
        "cityName".to_string(),
        FieldRule::required().label("City Name"),
    );
    rules.insert(
        "cityNameAr".to_string(),
        FieldRule::required().label("City Name (Arabic)"),
    );
    rules.insert(
        "postalZone".to_string(),
        FieldRule::required().min(5.0).label("Postal Zone"),
    );
    rules.insert(
        "countryCode".to_string(),
        FieldRule::required().label("Country Code"),
    );
    rules.insert(
        "customerVAT".to_string(),
        FieldRule::required().label("Customer VAT"),
    );
    rules.insert(
        "registrationName".to_string(),
        FieldRule::required().label("Registered Name"),
    );
    rules.insert(
        "registrationNameAr".to_string(),
        FieldRule::required().label("Registered Name (Arabic)"),
    );
    rules.insert(
        "email".to_string(),
        FieldRule::required().pattern(&patterns::EMAIL).label("Email"),
    );
    rules
}

pub fn form_state() -> FormState {
    FormState::new(initial_form_data(), validations())
}
