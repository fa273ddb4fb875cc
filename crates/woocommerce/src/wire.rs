//! Wire types for the WooCommerce REST API (`wc/v3`).
//!
//! Mirrors only the fields the adapter consumes. Unlike Medusa, list
//! endpoints return bare JSON arrays and ids are numeric. Timestamps come as
//! naive local/GMT datetimes (`2025-03-09T16:28:02`, no offset); the
//! conversion layer pins the `_gmt` variants to UTC.

use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WooProduct {
    pub id: i64,
    pub name: String,
    pub short_description: Option<String>,
    /// Empty string when the product has no price yet.
    pub price: Option<String>,
    pub currency_symbol: Option<String>,
    pub sku: Option<String>,
    pub stock_status: Option<String>,
    #[serde(default)]
    pub images: Vec<WooImage>,
    pub permalink: Option<String>,
    #[serde(default)]
    pub variations: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct WooImage {
    pub src: String,
}

#[derive(Debug, Deserialize)]
pub struct WooCategory {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WooOrder {
    pub id: i64,
    pub status: String,
    pub date_created_gmt: Option<NaiveDateTime>,
    pub total: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub line_items: Vec<WooLineItem>,
    /// The API names this `shipping`; older payloads in the wild carry
    /// `shipping_address`.
    #[serde(alias = "shipping_address")]
    pub shipping: Option<WooAddress>,
    pub payment_method_title: Option<String>,
    #[serde(default)]
    pub shipping_lines: Vec<WooShippingLine>,
}

#[derive(Debug, Deserialize)]
pub struct WooLineItem {
    pub name: String,
    pub quantity: i64,
    pub total: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WooAddress {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WooShippingLine {
    pub method_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WooCustomer {
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billing: Option<WooBilling>,
}

#[derive(Debug, Deserialize)]
pub struct WooBilling {
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WooCoupon {
    pub code: String,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub amount: Option<String>,
    pub currency_symbol: Option<String>,
    pub minimum_amount: Option<String>,
    pub usage_limit: Option<i64>,
    pub usage_count: Option<i64>,
    pub date_expires_gmt: Option<NaiveDateTime>,
}
