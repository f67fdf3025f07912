//! Company profile create/edit form: empty defaults and rule set

use crate::shared::patterns;
use crate::shared::validation::{FieldRule, FieldValue, FormData, FormState, RuleSet};

/// Every form field with its empty default. Having every key present is
/// what lets the data-driven record validator see required fields.
pub fn initial_form_data() -> FormData {
    [
        "profileName",
        "companyName",
        "companyArabicName",
        "email",
        "phone",
        "vatNumber",
        "notes",
        "invoiceType",
        "crnNumber",
        "branchName",
        "branchIndustry",
        "paymentTerms",
        "bankDetailsSar",
        "bankDetailsUsd",
        "fullAddress",
        "fullAddressArabic",
        "street",
        "additionalStreetAddress",
        "buildingNumber",
        "plotIdentification",
        "citySubDivisionName",
        "city",
        "postCode",
        "countrySubEntity",
        "country",
        "countryCode",
    ]
    .into_iter()
    .map(|name| (name.to_string(), FieldValue::Text(String::new())))
    .collect()
}

pub fn validations() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "profileName".to_string(),
        FieldRule::required().label("Profile Name"),
    );
    rules.insert(
        "companyName".to_string(),
        FieldRule::required().label("Company Name"),
    );
    rules.insert(
        "email".to_string(),
        FieldRule::required().label("Email").pattern(&patterns::EMAIL),
    );
    rules.insert(
        "vatNumber".to_string(),
        FieldRule::required().label("VAT Number"),
    );
    rules.insert(
        "invoiceType".to_string(),
        FieldRule::required().label("Invoice Type"),
    );
    rules.insert(
        "crnNumber".to_string(),
        FieldRule::required().label("CRN Number"),
    );
    rules.insert(
        "bankDetailsSar".to_string(),
        FieldRule::required().label("Bank Details"),
    );
    rules.insert(
        "bankDetailsUsd".to_string(),
        FieldRule::required().label("Bank Details USD"),
    );
    rules.insert("city".to_string(), FieldRule::required().label("City"));
    rules.insert("country".to_string(), FieldRule::required().label("Country"));
    rules.insert(
        "countryCode".to_string(),
        FieldRule::required().label("Country Code"),
    );
    rules
}

pub fn form_state() -> FormState {
    FormState::new(initial_form_data(), validations())
}
