use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice header as the dashboard exchanges it with the API. Line items
/// and the ZATCA clearance payload live server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub invoice_type: String,
    pub reference_number: String,
    pub payment_type: String,
    pub payment_terms: String,
    pub company_profile: String,
    pub due_date: NaiveDate,
    pub created_date: Option<NaiveDate>,
    pub supply_date: Option<NaiveDate>,
    pub registered_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_vat: String,
    pub customer_address: String,
    pub customer_code: String,
    pub created_at: DateTime<Utc>,
}
