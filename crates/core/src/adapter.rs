//! The uniform operation set every commerce backend implements.

use async_trait::async_trait;

use crate::error::CommerceError;
use crate::types::{Category, Customer, Order, Product, ProductFilter};

/// Default result cap for free-text product search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Uniform lookup-and-format surface over one commerce backend.
///
/// Implementations are constructed once at process startup from
/// configuration and passed by reference to consumers; the chat layer holds
/// an `Arc<dyn CommerceAdapter>` selected by deployment configuration.
///
/// Every lookup is a single request/response round trip. "Not found" on a
/// single-entity lookup is a normal `None` result, not an error. Privileged
/// operations (orders, customers on platforms that gate them behind admin
/// auth) fail with [`CommerceError::Authorization`] before any network call
/// when admin credentials are absent.
#[async_trait]
pub trait CommerceAdapter: Send + Sync {
    /// Build the underlying transport handle(s) if not yet built.
    ///
    /// Idempotent and safe to call concurrently: first-call races construct
    /// exactly one handle set. Operations call this internally, so callers
    /// only need it to front-load initialization cost.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Configuration`] when the configured base URL
    /// or credentials are malformed. Missing optional credentials are not an
    /// initialization error.
    async fn ensure_ready(&self) -> Result<(), CommerceError>;

    /// List products matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CommerceError>;

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails; an upstream 404 is `None`.
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>, CommerceError>;

    /// Free-text product search, ranked by platform relevance.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<Product>, CommerceError>;

    /// List products in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    async fn products_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Product>, CommerceError>;

    /// List product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    async fn product_categories(&self) -> Result<Vec<Category>, CommerceError>;

    /// Fetch a single order by id. Privileged on platforms that gate orders
    /// behind admin auth.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or admin credentials are
    /// required but absent; an upstream 404 is `None`.
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, CommerceError>;

    /// Orders whose shipping/billing phone matches. Privileged like
    /// [`get_order`](Self::get_order).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or admin credentials are
    /// required but absent.
    async fn search_orders_by_phone(&self, phone: &str) -> Result<Vec<Order>, CommerceError>;

    /// Orders whose billing/contact email matches. Privileged like
    /// [`get_order`](Self::get_order).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or admin credentials are
    /// required but absent.
    async fn search_orders_by_email(&self, email: &str) -> Result<Vec<Order>, CommerceError>;

    /// Fetch a single customer by id. Privileged like
    /// [`get_order`](Self::get_order).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or admin credentials are
    /// required but absent; an upstream 404 is `None`.
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, CommerceError>;

    /// First customer whose phone matches, if any. Privileged like
    /// [`get_order`](Self::get_order).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or admin credentials are
    /// required but absent.
    async fn search_customers_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<Customer>, CommerceError>;

    /// Render a product as a WhatsApp message. Pure; never fails on missing
    /// optional fields.
    fn format_product_for_whatsapp(&self, product: &Product) -> String;

    /// Render an order as a WhatsApp message. Pure; never fails on missing
    /// optional fields.
    fn format_order_for_whatsapp(&self, order: &Order) -> String;

    /// Map a raw status code to its display label. Unmapped codes pass
    /// through unchanged.
    fn format_order_status(&self, status: &str) -> String;
}
