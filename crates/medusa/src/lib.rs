//! Medusa headless-commerce adapter.
//!
//! # Architecture
//!
//! - Catalog lookups go through the public storefront API (`store/...`)
//! - Order and customer lookups require an admin bearer token and go through
//!   the admin API (`admin/...`)
//! - Transport handles are built lazily on first use, guarded by
//!   `tokio::sync::OnceCell` so concurrent first calls construct exactly one
//!   handle pair
//!
//! The two handles are capability-scoped: `store` always exists, `admin`
//! only when `MEDUSA_ADMIN_TOKEN` is configured. Privileged operations
//! resolve the admin handle before dispatch and fail with
//! [`CommerceError::Authorization`] when it is absent — no network call is
//! attempted.
//!
//! # Example
//!
//! ```rust,ignore
//! use ventabot_core::CommerceAdapter;
//! use ventabot_medusa::{MedusaAdapter, MedusaConfig};
//!
//! let adapter = MedusaAdapter::new(MedusaConfig::from_env());
//! let products = adapter.search_products("camiseta", 5).await?;
//! for product in &products {
//!     println!("{}", adapter.format_product_for_whatsapp(product));
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod config;
mod conversions;
mod format;
mod wire;

pub use config::{DEFAULT_BACKEND_URL, MedusaConfig};

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use ventabot_core::transport::{HttpTransport, Transport};
use ventabot_core::{
    Category, CommerceAdapter, CommerceError, Customer, Order, Product, ProductFilter,
};

use conversions::{convert_category, convert_customer, convert_order, convert_product};
use wire::{
    CategoriesEnvelope, CustomerEnvelope, CustomersEnvelope, OrderEnvelope, OrdersEnvelope,
    ProductEnvelope, ProductsEnvelope,
};

/// Results per page when a listing has a page but no explicit limit.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Medusa adapter. Construct once at startup and share by reference.
pub struct MedusaAdapter {
    config: MedusaConfig,
    handles: OnceCell<Handles>,
}

/// Capability-scoped transport handles.
struct Handles {
    store: Arc<dyn Transport>,
    admin: Option<Arc<dyn Transport>>,
}

impl Handles {
    /// Resolve the admin handle for a privileged `operation`, or reject
    /// before any network traffic happens.
    fn admin(&self, operation: &'static str) -> Result<&dyn Transport, CommerceError> {
        self.admin
            .as_deref()
            .ok_or(CommerceError::Authorization(operation))
    }
}

impl MedusaAdapter {
    /// Create an adapter from configuration. No connection is made until the
    /// first operation runs.
    #[must_use]
    pub const fn new(config: MedusaConfig) -> Self {
        Self {
            config,
            handles: OnceCell::const_new(),
        }
    }

    #[cfg(test)]
    fn with_transports(store: Arc<dyn Transport>, admin: Option<Arc<dyn Transport>>) -> Self {
        Self {
            config: MedusaConfig::default(),
            handles: OnceCell::new_with(Some(Handles { store, admin })),
        }
    }

    async fn handles(&self) -> Result<&Handles, CommerceError> {
        self.handles
            .get_or_try_init(|| async {
                let store: Arc<dyn Transport> = Arc::new(HttpTransport::new(
                    &self.config.backend_url,
                    HeaderMap::new(),
                    Vec::new(),
                )?);

                let admin = match &self.config.admin_token {
                    Some(token) => {
                        let mut headers = HeaderMap::new();
                        let mut value =
                            HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                                .map_err(|e| {
                                    CommerceError::Configuration(format!(
                                        "invalid admin token: {e}"
                                    ))
                                })?;
                        value.set_sensitive(true);
                        headers.insert(AUTHORIZATION, value);

                        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(
                            &self.config.backend_url,
                            headers,
                            Vec::new(),
                        )?);
                        Some(transport)
                    }
                    None => None,
                };

                info!(
                    backend_url = %self.config.backend_url,
                    admin = admin.is_some(),
                    "Medusa adapter initialized"
                );
                Ok(Handles { store, admin })
            })
            .await
    }
}

#[async_trait]
impl CommerceAdapter for MedusaAdapter {
    async fn ensure_ready(&self) -> Result<(), CommerceError> {
        self.handles().await.map(|_| ())
    }

    #[instrument(skip(self))]
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CommerceError> {
        let handles = self.handles().await?;

        let mut query = Vec::new();
        if let Some(search) = &filter.search {
            query.push(("q", search.clone()));
        }
        if let Some(limit) = filter.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(page) = filter.page {
            let offset = page
                .saturating_sub(1)
                .saturating_mul(filter.limit.unwrap_or(DEFAULT_PAGE_SIZE));
            query.push(("offset", offset.to_string()));
        }

        let value = handles.store.get("store/products", &query).await?;
        let envelope: ProductsEnvelope = serde_json::from_value(value)?;
        Ok(envelope.products.into_iter().map(convert_product).collect())
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>, CommerceError> {
        let handles = self.handles().await?;

        match handles
            .store
            .get(&format!("store/products/{product_id}"), &[])
            .await
        {
            Ok(value) => {
                let envelope: ProductEnvelope = serde_json::from_value(value)?;
                Ok(Some(convert_product(envelope.product)))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self))]
    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<Product>, CommerceError> {
        let handles = self.handles().await?;

        let query = [("q", term.to_string()), ("limit", limit.to_string())];
        let value = handles.store.get("store/products", &query).await?;
        let envelope: ProductsEnvelope = serde_json::from_value(value)?;
        Ok(envelope.products.into_iter().map(convert_product).collect())
    }

    #[instrument(skip(self))]
    async fn products_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Product>, CommerceError> {
        let handles = self.handles().await?;

        let query = [("category_id[]", category_id.to_string())];
        let value = handles.store.get("store/products", &query).await?;
        let envelope: ProductsEnvelope = serde_json::from_value(value)?;
        Ok(envelope.products.into_iter().map(convert_product).collect())
    }

    #[instrument(skip(self))]
    async fn product_categories(&self) -> Result<Vec<Category>, CommerceError> {
        let handles = self.handles().await?;

        let value = handles.store.get("store/product-categories", &[]).await?;
        let envelope: CategoriesEnvelope = serde_json::from_value(value)?;
        Ok(envelope
            .product_categories
            .into_iter()
            .map(convert_category)
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, CommerceError> {
        let handles = self.handles().await?;
        let admin = handles.admin("get_order")?;

        match admin.get(&format!("admin/orders/{order_id}"), &[]).await {
            Ok(value) => {
                let envelope: OrderEnvelope = serde_json::from_value(value)?;
                Ok(Some(convert_order(envelope.order)))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self))]
    async fn search_orders_by_phone(&self, phone: &str) -> Result<Vec<Order>, CommerceError> {
        let handles = self.handles().await?;
        let admin = handles.admin("search_orders_by_phone")?;

        let query = [("q", phone.to_string())];
        let value = admin.get("admin/orders", &query).await?;
        let envelope: OrdersEnvelope = serde_json::from_value(value)?;
        Ok(envelope.orders.into_iter().map(convert_order).collect())
    }

    #[instrument(skip(self))]
    async fn search_orders_by_email(&self, email: &str) -> Result<Vec<Order>, CommerceError> {
        let handles = self.handles().await?;
        let admin = handles.admin("search_orders_by_email")?;

        let query = [("q", email.to_string())];
        let value = admin.get("admin/orders", &query).await?;
        let envelope: OrdersEnvelope = serde_json::from_value(value)?;
        Ok(envelope.orders.into_iter().map(convert_order).collect())
    }

    #[instrument(skip(self))]
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, CommerceError> {
        let handles = self.handles().await?;
        let admin = handles.admin("get_customer")?;

        match admin
            .get(&format!("admin/customers/{customer_id}"), &[])
            .await
        {
            Ok(value) => {
                let envelope: CustomerEnvelope = serde_json::from_value(value)?;
                Ok(Some(convert_customer(envelope.customer)))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self))]
    async fn search_customers_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<Customer>, CommerceError> {
        let handles = self.handles().await?;
        let admin = handles.admin("search_customers_by_phone")?;

        let query = [("q", phone.to_string())];
        let value = admin.get("admin/customers", &query).await?;
        let envelope: CustomersEnvelope = serde_json::from_value(value)?;
        Ok(envelope
            .customers
            .into_iter()
            .next()
            .map(convert_customer))
    }

    fn format_product_for_whatsapp(&self, product: &Product) -> String {
        format::product_for_whatsapp(product)
    }

    fn format_order_for_whatsapp(&self, order: &Order) -> String {
        format::order_for_whatsapp(order)
    }

    fn format_order_status(&self, status: &str) -> String {
        format::order_status(status)
    }
}
