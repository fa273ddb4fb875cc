//! Wire types for the Medusa REST API.
//!
//! Mirrors only the fields the adapter consumes; everything else in the
//! payload is ignored. Medusa wraps every resource in an envelope object
//! (`{ "products": [...] }`, `{ "order": {...} }`).

use chrono::{DateTime, Utc};
use serde::Deserialize;

// =============================================================================
// Envelopes
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub products: Vec<MedusaProduct>,
}

#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub product: MedusaProduct,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub product_categories: Vec<MedusaCategory>,
}

#[derive(Debug, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<MedusaOrder>,
}

#[derive(Debug, Deserialize)]
pub struct OrderEnvelope {
    pub order: MedusaOrder,
}

#[derive(Debug, Deserialize)]
pub struct CustomersEnvelope {
    #[serde(default)]
    pub customers: Vec<MedusaCustomer>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerEnvelope {
    pub customer: MedusaCustomer,
}

// =============================================================================
// Resources
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct MedusaProduct {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<MedusaImage>,
    #[serde(default)]
    pub variants: Vec<MedusaVariant>,
    pub price: Option<MedusaPrice>,
}

#[derive(Debug, Deserialize)]
pub struct MedusaImage {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct MedusaVariant {
    pub sku: Option<String>,
}

/// Calculated-price envelope on storefront products.
#[derive(Debug, Deserialize)]
pub struct MedusaPrice {
    pub calculated_price: Option<f64>,
    pub currency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MedusaCategory {
    pub id: String,
    pub name: String,
    pub handle: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MedusaOrder {
    pub id: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub total: Option<MedusaTotal>,
    #[serde(default)]
    pub items: Vec<MedusaLineItem>,
    pub shipping_address: Option<MedusaAddress>,
}

/// Order totals arrive either as a bare number or as a calculated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MedusaTotal {
    Amount(f64),
    Calculated { calculated_total: Option<f64> },
}

#[derive(Debug, Deserialize)]
pub struct MedusaLineItem {
    pub title: String,
    pub quantity: i64,
    pub total: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MedusaAddress {
    pub city: Option<String>,
    pub province: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MedusaCustomer {
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
