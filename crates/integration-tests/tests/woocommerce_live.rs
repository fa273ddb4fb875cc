//! Integration tests against a live WooCommerce store.
//!
//! These tests require:
//! - A reachable store (`WOOCOMMERCE_URL`)
//! - `WOOCOMMERCE_CONSUMER_KEY` / `WOOCOMMERCE_CONSUMER_SECRET`
//!
//! Run with: `cargo test -p ventabot-integration-tests -- --ignored`

use ventabot_core::{CommerceAdapter, ProductFilter};
use ventabot_woocommerce::{WooAdapter, WooConfig};

fn adapter() -> WooAdapter {
    let _ = dotenvy::dotenv();
    let config = WooConfig::from_env().expect("WooCommerce credentials must be configured");
    WooAdapter::new(config)
}

#[tokio::test]
#[ignore = "Requires a reachable WooCommerce store"]
async fn test_list_products_and_format() {
    let adapter = adapter();

    let filter = ProductFilter {
        limit: Some(5),
        ..ProductFilter::default()
    };
    let products = adapter
        .list_products(&filter)
        .await
        .expect("listing should succeed against a live store");
    assert!(products.len() <= 5);

    for product in &products {
        let text = adapter.format_product_for_whatsapp(product);
        assert!(text.starts_with('*'));
    }
}

#[tokio::test]
#[ignore = "Requires a reachable WooCommerce store"]
async fn test_recent_orders_window() {
    let adapter = adapter();

    let orders = adapter
        .get_recent_orders(7)
        .await
        .expect("recent-order listing should succeed");
    assert!(orders.len() <= 50);

    // Newest first.
    for pair in orders.windows(2) {
        if let [newer, older] = pair
            && let (Some(newer_at), Some(older_at)) = (newer.created_at, older.created_at)
        {
            assert!(newer_at >= older_at);
        }
    }
}

#[tokio::test]
#[ignore = "Requires a reachable WooCommerce store"]
async fn test_coupon_lookup_is_case_insensitive() {
    let adapter = adapter();

    let upper = adapter
        .get_coupon("SAVE10")
        .await
        .expect("coupon lookup should succeed");
    let lower = adapter
        .get_coupon("save10")
        .await
        .expect("coupon lookup should succeed");

    assert_eq!(
        upper.map(|coupon| coupon.code),
        lower.map(|coupon| coupon.code)
    );
}

#[tokio::test]
#[ignore = "Requires a reachable WooCommerce store"]
async fn test_missing_customer_is_none() {
    let customer = adapter()
        .search_customers_by_email("nadie@example.com")
        .await
        .expect("lookup should succeed");
    assert!(customer.is_none());
}
