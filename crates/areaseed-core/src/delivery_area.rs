use serde::{Deserialize, Serialize};

use crate::catalog::DeliveryAreaEntry;

/// The delivery company and store every record of a run is created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub delivery_company: String,
    pub store: String,
}

/// Request body for `POST /api/delivery-areas`.
///
/// Field names follow the remote API's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAreaPayload {
    pub wilaya: String,
    pub delivery_company: String,
    pub store: String,
    pub price_home: u32,
    pub price_desk: u32,
    pub is_active: bool,
}

impl DeliveryAreaPayload {
    /// Builds the payload for one catalog entry. Prices are copied as-is and
    /// `is_active` is always `true`.
    #[must_use]
    pub fn new(entry: &DeliveryAreaEntry, tenant: &Tenant) -> Self {
        Self {
            wilaya: entry.wilaya.clone(),
            delivery_company: tenant.delivery_company.clone(),
            store: tenant.store.clone(),
            price_home: entry.price_home,
            price_desk: entry.price_desk,
            is_active: true,
        }
    }
}
