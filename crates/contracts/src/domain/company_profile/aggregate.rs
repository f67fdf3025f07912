use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seller profile used as the issuing party on invoices. Field names
/// follow the dashboard API payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: Uuid,
    pub profile_name: String,
    pub company_name: String,
    pub company_arabic_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: String,
    pub notes: String,
    pub invoice_type: String,
    pub crn_number: String,
    pub branch_name: String,
    pub branch_industry: String,
    pub payment_terms: String,
    pub bank_details_sar: String,
    pub bank_details_usd: String,
    pub full_address: String,
    pub full_address_arabic: String,
    pub street: String,
    pub additional_street_address: String,
    pub building_number: String,
    pub plot_identification: String,
    pub city_sub_division_name: String,
    pub city: String,
    pub post_code: String,
    pub country_sub_entity: String,
    pub country: String,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
