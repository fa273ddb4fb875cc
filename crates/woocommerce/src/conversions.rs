//! Conversions from WooCommerce wire types into the shared commerce shapes.

use std::sync::LazyLock;

use regex::Regex;

use ventabot_core::{
    Address, Category, Coupon, Customer, DiscountKind, LineItem, Money, Order, Product,
    StockStatus,
};

use crate::wire::{WooCategory, WooCoupon, WooCustomer, WooLineItem, WooOrder, WooProduct};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("static pattern is valid"));

/// Drop markup from store-managed rich text before chat display.
fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Treat WooCommerce's empty-string placeholders as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

pub fn convert_product(product: WooProduct) -> Product {
    let price = non_empty(product.price)
        .map(|amount| Money::new(amount, non_empty(product.currency_symbol)));

    Product {
        id: product.id.to_string(),
        title: product.name,
        description: non_empty(product.short_description).map(|d| strip_html(&d)),
        price,
        thumbnail: product.images.first().map(|image| image.src.clone()),
        images: product.images.into_iter().map(|image| image.src).collect(),
        variant_count: product.variations.len(),
        sku: non_empty(product.sku),
        stock_status: product.stock_status.as_deref().and_then(|status| match status {
            "instock" => Some(StockStatus::InStock),
            "outofstock" => Some(StockStatus::OutOfStock),
            "onbackorder" => Some(StockStatus::OnBackorder),
            _ => None,
        }),
        permalink: product.permalink,
    }
}

pub fn convert_category(category: WooCategory) -> Category {
    Category {
        id: category.id.to_string(),
        name: category.name,
        handle: category.slug,
    }
}

pub fn convert_order(order: WooOrder) -> Order {
    Order {
        id: order.id.to_string(),
        status: order.status,
        created_at: order.date_created_gmt.map(|dt| dt.and_utc()),
        total: non_empty(order.total)
            .map(|amount| Money::new(amount, non_empty(order.currency))),
        items: order.line_items.into_iter().map(convert_line_item).collect(),
        shipping_address: order.shipping.map(|address| Address {
            city: address.city,
            state: address.state,
            country: address.country,
        }),
        payment_method: non_empty(order.payment_method_title),
        shipping_method: order
            .shipping_lines
            .into_iter()
            .next()
            .and_then(|line| non_empty(line.method_title)),
    }
}

fn convert_line_item(item: WooLineItem) -> LineItem {
    LineItem {
        quantity: item.quantity,
        title: item.name,
        total: non_empty(item.total),
    }
}

pub fn convert_customer(customer: WooCustomer) -> Customer {
    Customer {
        id: customer.id.to_string(),
        email: non_empty(customer.email),
        phone: customer
            .billing
            .and_then(|billing| non_empty(billing.phone)),
        first_name: non_empty(customer.first_name),
        last_name: non_empty(customer.last_name),
    }
}

pub fn convert_coupon(coupon: WooCoupon) -> Coupon {
    Coupon {
        code: coupon.code,
        description: non_empty(coupon.description),
        kind: match coupon.discount_type.as_deref() {
            Some("percent") => DiscountKind::Percent,
            // fixed_cart, fixed_product, and anything new display the same way
            _ => DiscountKind::Fixed,
        },
        amount: coupon.amount.unwrap_or_default(),
        currency: non_empty(coupon.currency_symbol),
        // "0.00" means no minimum; do not show it
        minimum_amount: non_empty(coupon.minimum_amount).filter(|amount| amount != "0.00"),
        usage_limit: coupon.usage_limit,
        usage_count: coupon.usage_count,
        expires_at: coupon.date_expires_gmt.map(|dt| dt.and_utc()),
    }
}
