//! Invoice create form: empty defaults and rule set

use crate::shared::patterns;
use crate::shared::validation::{FieldRule, FieldValue, FormData, FormState, RuleSet};

pub fn initial_form_data() -> FormData {
    [
        "invoiceNumber",
        "invoiceType",
        "referenceNumber",
        "paymentType",
        "paymentTerms",
        "companyProfile",
        "dueDate",
        "createdDate",
        "supplyDate",
        "registeredName",
        "customerEmail",
        "customerPhone",
        "customerVat",
        "customerAddress",
        "customerCode",
    ]
    .into_iter()
    .map(|name| (name.to_string(), FieldValue::Text(String::new())))
    .collect()
}

pub fn validations() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "invoiceNumber".to_string(),
        FieldRule::required().label("Invoice Number"),
    );
    rules.insert(
        "invoiceType".to_string(),
        FieldRule::required().label("Invoice Type"),
    );
    rules.insert(
        "paymentType".to_string(),
        FieldRule::required().label("Payment Type"),
    );
    rules.insert(
        "paymentTerms".to_string(),
        FieldRule::required().label("Payment Terms"),
    );
    rules.insert(
        "companyProfile".to_string(),
        FieldRule::required().label("Company Profile"),
    );
    rules.insert(
        "dueDate".to_string(),
        FieldRule::required().label("Due Date"),
    );
    rules.insert(
        "registeredName".to_string(),
        FieldRule::required().label("Registered Name"),
    );
    rules.insert(
        "customerEmail".to_string(),
        FieldRule::required()
            .label("Customer Email")
            .pattern(&patterns::EMAIL),
    );
    rules
}

pub fn form_state() -> FormState {
    FormState::new(initial_form_data(), validations())
}
