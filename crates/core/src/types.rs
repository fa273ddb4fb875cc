//! Normalized commerce entities shared by all backend adapters.
//!
//! These shapes provide a clean, ergonomic surface separate from the raw
//! per-platform wire types. Adapters normalize field-name differences
//! (`price` vs `calculated_price`, `title` vs `name`, numeric vs string ids)
//! at their conversion boundary so consumers never see platform details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Money
// =============================================================================

/// Monetary amount with an optional currency label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves upstream precision).
    pub amount: String,
    /// Currency symbol or ISO code, rendered as-is when present.
    pub currency: Option<String>,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: String, currency: Option<String>) -> Self {
        Self { amount, currency }
    }
}

// =============================================================================
// Products
// =============================================================================

/// Stock availability as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    OutOfStock,
    OnBackorder,
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Platform product id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-text description, HTML already stripped.
    pub description: Option<String>,
    /// Current price, when the platform exposes one.
    pub price: Option<Money>,
    /// Primary image URL.
    pub thumbnail: Option<String>,
    /// All image URLs.
    pub images: Vec<String>,
    /// Number of purchasable variants.
    pub variant_count: usize,
    /// Stock-keeping unit.
    pub sku: Option<String>,
    /// Stock availability.
    pub stock_status: Option<StockStatus>,
    /// Public product page URL.
    pub permalink: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Platform category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL handle / slug.
    pub handle: Option<String>,
}

/// Filter for product listings. All fields optional; `Default` lists
/// whatever the platform returns first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Free-text search term.
    pub search: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// 1-based page.
    pub page: Option<u32>,
}

// =============================================================================
// Orders
// =============================================================================

/// One purchased line on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Units purchased.
    pub quantity: i64,
    /// Product title at purchase time.
    pub title: String,
    /// Line total as reported by the platform.
    pub total: Option<String>,
}

/// Shipping destination. Every field is optional; formatting renders empty
/// strings for missing components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Platform order id (numeric ids are stringified).
    pub id: String,
    /// Raw platform status code; display mapping is per-platform.
    pub status: String,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Order total.
    pub total: Option<Money>,
    /// Purchased lines.
    pub items: Vec<LineItem>,
    /// Shipping destination.
    pub shipping_address: Option<Address>,
    /// Payment method label (e.g. "Tarjeta de crédito").
    pub payment_method: Option<String>,
    /// Shipping method label (e.g. "Envío estándar").
    pub shipping_method: Option<String>,
}

// =============================================================================
// Customers
// =============================================================================

/// A customer record; contact fields double as search keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Platform customer id.
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// =============================================================================
// Coupons
// =============================================================================

/// How a coupon discounts the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Percentage off the order total.
    Percent,
    /// Fixed amount off (cart- or product-scoped upstream; same display).
    Fixed,
}

/// A discount coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Customer-facing code.
    pub code: String,
    pub description: Option<String>,
    pub kind: DiscountKind,
    /// Discount value: percent points or fixed amount, per `kind`.
    pub amount: String,
    /// Currency label for fixed discounts.
    pub currency: Option<String>,
    /// Minimum order amount required to apply.
    pub minimum_amount: Option<String>,
    /// Maximum number of redemptions.
    pub usage_limit: Option<i64>,
    /// Redemptions so far.
    pub usage_count: Option<i64>,
    /// Expiry timestamp.
    pub expires_at: Option<DateTime<Utc>>,
}
