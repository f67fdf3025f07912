use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Buyer party referenced by invoices. ZATCA Phase 2 requires the address
/// block in both English and Arabic, hence the paired fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub registration_name: String,
    pub registration_name_ar: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "customerVAT")]
    pub customer_vat: String,
    pub address: String,
    pub address_ar: String,
    pub street_name: String,
    pub street_name_ar: String,
    pub building_number: String,
    pub city_sub_division_name: String,
    pub city_sub_division_name_ar: String,
    pub city_name: String,
    pub city_name_ar: String,
    pub postal_zone: String,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
