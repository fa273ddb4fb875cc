//! WooCommerce REST adapter.
//!
//! # Architecture
//!
//! - One API surface (`{store}/wp-json/wc/v3/`) authenticated with a
//!   consumer key/secret pair sent as query parameters (HTTPS query-string
//!   auth, the REST API's server-to-server mode)
//! - List endpoints return bare JSON arrays; page caps per endpoint match
//!   what the chat flows display
//! - The transport handle is built lazily on first use, guarded by
//!   `tokio::sync::OnceCell` so concurrent first calls construct exactly one
//!   client
//!
//! Beyond the [`CommerceAdapter`] contract this platform also serves
//! coupons, email-keyed customer search, per-customer order history, and
//! bulk listings (newest-first product pages, recent-order windows).
//!
//! # Example
//!
//! ```rust,ignore
//! use ventabot_woocommerce::{WooAdapter, WooConfig};
//!
//! let adapter = WooAdapter::new(WooConfig::from_env()?);
//! if let Some(coupon) = adapter.get_coupon("SAVE10").await? {
//!     println!("{}", adapter.format_coupon_for_whatsapp(&coupon));
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod config;
mod conversions;
mod format;
mod wire;

pub use config::{DEFAULT_STORE_URL, WooConfig};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::header::HeaderMap;
use secrecy::ExposeSecret;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use ventabot_core::transport::{HttpTransport, Transport};
use ventabot_core::{
    Category, CommerceAdapter, CommerceError, Coupon, Customer, Order, Product, ProductFilter,
};

use conversions::{
    convert_category, convert_coupon, convert_customer, convert_order, convert_product,
};
use wire::{WooCategory, WooCoupon, WooCustomer, WooOrder, WooProduct};

/// REST API version path segment.
const API_VERSION: &str = "wc/v3";

/// Page caps per chat flow; each matches what the bot is willing to render.
const CATEGORY_PRODUCTS_PAGE_SIZE: u32 = 20;
const CATEGORIES_PAGE_SIZE: u32 = 50;
const ORDER_SEARCH_PAGE_SIZE: u32 = 10;
const CUSTOMER_ORDERS_PAGE_SIZE: u32 = 20;
const COUPONS_PAGE_SIZE: u32 = 50;
const RECENT_ORDERS_PAGE_SIZE: u32 = 50;

/// Default page size for bulk product listing.
pub const ALL_PRODUCTS_PAGE_SIZE: u32 = 100;

/// Default lookback window for [`WooAdapter::get_recent_orders`].
pub const DEFAULT_RECENT_ORDER_DAYS: i64 = 7;

/// WooCommerce adapter. Construct once at startup and share by reference.
pub struct WooAdapter {
    config: WooConfig,
    handle: OnceCell<Arc<dyn Transport>>,
}

impl WooAdapter {
    /// Create an adapter from configuration. No connection is made until the
    /// first operation runs.
    #[must_use]
    pub const fn new(config: WooConfig) -> Self {
        Self {
            config,
            handle: OnceCell::const_new(),
        }
    }

    #[cfg(test)]
    fn with_transport(transport: Arc<dyn Transport>) -> Self {
        use secrecy::SecretString;

        Self {
            config: WooConfig {
                store_url: DEFAULT_STORE_URL.to_string(),
                consumer_key: "ck_test".to_string(),
                consumer_secret: SecretString::from("cs_test"),
            },
            handle: OnceCell::new_with(Some(transport)),
        }
    }

    async fn transport(&self) -> Result<&Arc<dyn Transport>, CommerceError> {
        self.handle
            .get_or_try_init(|| async {
                let api_root = format!(
                    "{}/wp-json/{API_VERSION}/",
                    self.config.store_url.trim_end_matches('/')
                );
                let base_query = vec![
                    ("consumer_key".to_string(), self.config.consumer_key.clone()),
                    (
                        "consumer_secret".to_string(),
                        self.config.consumer_secret.expose_secret().to_string(),
                    ),
                ];

                let transport: Arc<dyn Transport> =
                    Arc::new(HttpTransport::new(&api_root, HeaderMap::new(), base_query)?);

                info!(store_url = %self.config.store_url, "WooCommerce adapter initialized");
                Ok(transport)
            })
            .await
    }

    async fn get_orders(&self, query: &[(&str, String)]) -> Result<Vec<Order>, CommerceError> {
        let value = self.transport().await?.get("orders", query).await?;
        let orders: Vec<WooOrder> = serde_json::from_value(value)?;
        Ok(orders.into_iter().map(convert_order).collect())
    }

    async fn get_products(&self, query: &[(&str, String)]) -> Result<Vec<Product>, CommerceError> {
        let value = self.transport().await?.get("products", query).await?;
        let products: Vec<WooProduct> = serde_json::from_value(value)?;
        Ok(products.into_iter().map(convert_product).collect())
    }

    /// First customer registered under `email`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_customers_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, CommerceError> {
        let query = [("email", email.to_string())];
        let value = self.transport().await?.get("customers", &query).await?;
        let customers: Vec<WooCustomer> = serde_json::from_value(value)?;
        Ok(customers.into_iter().next().map(convert_customer))
    }

    /// Order history for one customer, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_customer_orders(
        &self,
        customer_id: &str,
    ) -> Result<Vec<Order>, CommerceError> {
        self.get_orders(&[
            ("customer", customer_id.to_string()),
            ("per_page", CUSTOMER_ORDERS_PAGE_SIZE.to_string()),
        ])
        .await
    }

    /// Look up a coupon by code. Case-insensitive: codes are stored
    /// lowercased, so the query lowercases before dispatch.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_coupon(&self, code: &str) -> Result<Option<Coupon>, CommerceError> {
        let query = [("code", code.to_lowercase())];
        let value = self.transport().await?.get("coupons", &query).await?;
        let coupons: Vec<WooCoupon> = serde_json::from_value(value)?;
        Ok(coupons.into_iter().next().map(convert_coupon))
    }

    /// List active coupons (capped at 50).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_coupons(&self) -> Result<Vec<Coupon>, CommerceError> {
        let query = [("per_page", COUPONS_PAGE_SIZE.to_string())];
        let value = self.transport().await?.get("coupons", &query).await?;
        let coupons: Vec<WooCoupon> = serde_json::from_value(value)?;
        Ok(coupons.into_iter().map(convert_coupon).collect())
    }

    /// One page of the full catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_all_products(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Product>, CommerceError> {
        self.get_products(&[
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
            ("orderby", "date".to_string()),
            ("order", "desc".to_string()),
        ])
        .await
    }

    /// Orders created within the last `days` days, newest first, capped
    /// at 50.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_recent_orders(&self, days: i64) -> Result<Vec<Order>, CommerceError> {
        let after = Utc::now() - Duration::days(days);
        self.get_orders(&[
            ("after", after.to_rfc3339()),
            ("per_page", RECENT_ORDERS_PAGE_SIZE.to_string()),
            ("orderby", "date".to_string()),
            ("order", "desc".to_string()),
        ])
        .await
    }

    /// Render a coupon as a WhatsApp message. Pure; never fails on missing
    /// optional fields.
    #[must_use]
    pub fn format_coupon_for_whatsapp(&self, coupon: &Coupon) -> String {
        format::coupon_for_whatsapp(coupon)
    }
}

#[async_trait]
impl CommerceAdapter for WooAdapter {
    async fn ensure_ready(&self) -> Result<(), CommerceError> {
        self.transport().await.map(|_| ())
    }

    #[instrument(skip(self))]
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CommerceError> {
        let mut query = Vec::new();
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        if let Some(limit) = filter.limit {
            query.push(("per_page", limit.to_string()));
        }
        if let Some(page) = filter.page {
            query.push(("page", page.to_string()));
        }
        self.get_products(&query).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>, CommerceError> {
        let transport = self.transport().await?;

        match transport.get(&format!("products/{product_id}"), &[]).await {
            Ok(value) => {
                let product: WooProduct = serde_json::from_value(value)?;
                Ok(Some(convert_product(product)))
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
        self.get_products(&[
            ("search", term.to_string()),
            ("per_page", limit.to_string()),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn products_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Product>, CommerceError> {
        self.get_products(&[
            ("category", category_id.to_string()),
            ("per_page", CATEGORY_PRODUCTS_PAGE_SIZE.to_string()),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn product_categories(&self) -> Result<Vec<Category>, CommerceError> {
        let query = [("per_page", CATEGORIES_PAGE_SIZE.to_string())];
        let value = self
            .transport()
            .await?
            .get("products/categories", &query)
            .await?;
        let categories: Vec<WooCategory> = serde_json::from_value(value)?;
        Ok(categories.into_iter().map(convert_category).collect())
    }

    #[instrument(skip(self))]
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, CommerceError> {
        let transport = self.transport().await?;

        match transport.get(&format!("orders/{order_id}"), &[]).await {
            Ok(value) => {
                let order: WooOrder = serde_json::from_value(value)?;
                Ok(Some(convert_order(order)))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self))]
    async fn search_orders_by_phone(&self, phone: &str) -> Result<Vec<Order>, CommerceError> {
        self.get_orders(&[
            ("billing_phone", phone.to_string()),
            ("per_page", ORDER_SEARCH_PAGE_SIZE.to_string()),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn search_orders_by_email(&self, email: &str) -> Result<Vec<Order>, CommerceError> {
        self.get_orders(&[
            ("email", email.to_string()),
            ("per_page", ORDER_SEARCH_PAGE_SIZE.to_string()),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, CommerceError> {
        let transport = self.transport().await?;

        match transport
            .get(&format!("customers/{customer_id}"), &[])
            .await
        {
            Ok(value) => {
                let customer: WooCustomer = serde_json::from_value(value)?;
                Ok(Some(convert_customer(customer)))
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
        let query = [("billing_phone", phone.to_string())];
        let value = self.transport().await?.get("customers", &query).await?;
        let customers: Vec<WooCustomer> = serde_json::from_value(value)?;
        Ok(customers.into_iter().next().map(convert_customer))
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use chrono::DateTime;
    use serde_json::{Value, json};

    type RecordedCall = (String, Vec<(String, String)>);

    /// Recording transport: replies with a fixed payload and keeps every
    /// call for assertions.
    struct MockTransport {
        calls: Mutex<Vec<RecordedCall>>,
        reply: Value,
    }

    impl MockTransport {
        fn replying(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply,
            })
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(
            &self,
            path: &str,
            query: &[(&str, String)],
        ) -> Result<Value, CommerceError> {
            self.calls.lock().unwrap().push((
                path.to_string(),
                query
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), value.clone()))
                    .collect(),
            ));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_search_products_sends_term_and_limit_once() {
        let transport = MockTransport::replying(json!([]));
        let adapter = WooAdapter::with_transport(transport.clone());

        let products = adapter.search_products("shoes", 5).await.unwrap();
        assert!(products.is_empty());

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let (path, query) = calls.into_iter().next().unwrap();
        assert_eq!(path, "products");
        assert_eq!(
            query,
            vec![
                ("search".to_string(), "shoes".to_string()),
                ("per_page".to_string(), "5".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_coupon_lowercases_code() {
        let transport = MockTransport::replying(json!([{
            "code": "save10",
            "discount_type": "percent",
            "amount": "10.00"
        }]));
        let adapter = WooAdapter::with_transport(transport.clone());

        let coupon = adapter.get_coupon("SAVE10").await.unwrap();
        assert_eq!(coupon.map(|c| c.code).as_deref(), Some("save10"));

        let coupon = adapter.get_coupon("save10").await.unwrap();
        assert!(coupon.is_some());

        // Both spellings query the same resource.
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        for (path, query) in calls {
            assert_eq!(path, "coupons");
            assert_eq!(query, vec![("code".to_string(), "save10".to_string())]);
        }
    }

    #[tokio::test]
    async fn test_get_coupon_no_match_is_none() {
        let transport = MockTransport::replying(json!([]));
        let adapter = WooAdapter::with_transport(transport);

        assert!(adapter.get_coupon("nadie").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_order_searches_use_contact_params() {
        let transport = MockTransport::replying(json!([]));
        let adapter = WooAdapter::with_transport(transport.clone());

        adapter.search_orders_by_email("ana@example.com").await.unwrap();
        adapter.search_orders_by_phone("+34600111222").await.unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls,
            vec![
                (
                    "orders".to_string(),
                    vec![
                        ("email".to_string(), "ana@example.com".to_string()),
                        ("per_page".to_string(), "10".to_string()),
                    ]
                ),
                (
                    "orders".to_string(),
                    vec![
                        ("billing_phone".to_string(), "+34600111222".to_string()),
                        ("per_page".to_string(), "10".to_string()),
                    ]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_recent_orders_window_and_ordering() {
        let transport = MockTransport::replying(json!([]));
        let adapter = WooAdapter::with_transport(transport.clone());

        adapter.get_recent_orders(7).await.unwrap();

        let calls = transport.calls();
        let (path, query) = calls.into_iter().next().unwrap();
        assert_eq!(path, "orders");

        let after = query
            .iter()
            .find(|(key, _)| key == "after")
            .map(|(_, value)| value.clone())
            .expect("after bound should be present");
        let after = DateTime::parse_from_rfc3339(&after).expect("after should be RFC 3339");
        let age = Utc::now().signed_duration_since(after.with_timezone(&Utc));
        assert!(age >= Duration::days(7));
        assert!(age < Duration::days(8));

        assert!(query.contains(&("per_page".to_string(), "50".to_string())));
        assert!(query.contains(&("orderby".to_string(), "date".to_string())));
        assert!(query.contains(&("order".to_string(), "desc".to_string())));
    }

    #[tokio::test]
    async fn test_list_products_passes_filter_through() {
        let transport = MockTransport::replying(json!([]));
        let adapter = WooAdapter::with_transport(transport.clone());

        let filter = ProductFilter {
            search: Some("camiseta".to_string()),
            limit: Some(12),
            page: Some(2),
        };
        adapter.list_products(&filter).await.unwrap();

        let calls = transport.calls();
        let (_, query) = calls.into_iter().next().unwrap();
        assert_eq!(
            query,
            vec![
                ("search".to_string(), "camiseta".to_string()),
                ("per_page".to_string(), "12".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_endpoints_parse_bare_arrays() {
        let transport = MockTransport::replying(json!([
            {"id": 881, "name": "Zapatillas", "price": "59.90"},
            {"id": 882, "name": "Gorra", "price": ""}
        ]));
        let adapter = WooAdapter::with_transport(transport);

        let products = adapter.list_products(&ProductFilter::default()).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products.first().map(|p| p.id.as_str()), Some("881"));
    }

    #[tokio::test]
    async fn test_ensure_ready_concurrent_first_calls_build_one_handle() {
        use secrecy::SecretString;

        let adapter = Arc::new(WooAdapter::new(WooConfig {
            store_url: "https://shop.example.com".to_string(),
            consumer_key: "ck_test".to_string(),
            consumer_secret: SecretString::from("cs_test"),
        }));

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let adapter = Arc::clone(&adapter);
            tasks.push(tokio::spawn(async move { adapter.ensure_ready().await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let first = Arc::as_ptr(adapter.handle.get().unwrap()).cast::<()>() as usize;
        adapter.ensure_ready().await.unwrap();
        let second = Arc::as_ptr(adapter.handle.get().unwrap()).cast::<()>() as usize;
        assert_eq!(first, second);
    }
}
