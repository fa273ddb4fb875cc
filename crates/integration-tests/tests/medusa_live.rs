//! Integration tests against a live Medusa backend.
//!
//! These tests require:
//! - A running Medusa backend (`MEDUSA_BACKEND_URL`, default
//!   `http://localhost:9000`)
//! - `MEDUSA_ADMIN_TOKEN` for the order and customer tests
//!
//! Run with: `cargo test -p ventabot-integration-tests -- --ignored`

use ventabot_core::{CommerceAdapter, ProductFilter};
use ventabot_medusa::{MedusaAdapter, MedusaConfig};

fn adapter() -> MedusaAdapter {
    let _ = dotenvy::dotenv();
    MedusaAdapter::new(MedusaConfig::from_env())
}

#[tokio::test]
#[ignore = "Requires a running Medusa backend"]
async fn test_list_products_and_format() {
    let adapter = adapter();

    let filter = ProductFilter {
        limit: Some(5),
        ..ProductFilter::default()
    };
    let products = adapter
        .list_products(&filter)
        .await
        .expect("listing should succeed against a live backend");
    assert!(products.len() <= 5);

    for product in &products {
        let text = adapter.format_product_for_whatsapp(product);
        assert!(text.starts_with('*'));
        assert!(text.contains("💰 Precio:"));
    }
}

#[tokio::test]
#[ignore = "Requires a running Medusa backend"]
async fn test_product_categories_listing() {
    let categories = adapter()
        .product_categories()
        .await
        .expect("category listing should succeed");

    for category in categories {
        assert!(!category.id.is_empty());
        assert!(!category.name.is_empty());
    }
}

#[tokio::test]
#[ignore = "Requires a running Medusa backend"]
async fn test_missing_product_is_none() {
    let product = adapter()
        .get_product("prod_does_not_exist")
        .await
        .expect("lookup should succeed");
    assert!(product.is_none());
}

#[tokio::test]
#[ignore = "Requires MEDUSA_ADMIN_TOKEN and a running Medusa backend"]
async fn test_order_search_by_email() {
    let adapter = adapter();

    let orders = adapter
        .search_orders_by_email("nadie@example.com")
        .await
        .expect("admin search should succeed with a token configured");

    for order in &orders {
        let text = adapter.format_order_for_whatsapp(order);
        assert!(text.contains("📍 Estado:"));
    }
}
