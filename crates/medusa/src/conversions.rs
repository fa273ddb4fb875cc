//! Conversions from Medusa wire types into the shared commerce shapes.

use ventabot_core::{Address, Category, Customer, LineItem, Money, Order, Product};

use crate::wire::{
    MedusaCategory, MedusaCustomer, MedusaLineItem, MedusaOrder, MedusaProduct, MedusaTotal,
};

/// Render an upstream float amount the way the platform printed it
/// (no forced decimals: `42.5` stays `42.5`, `42.0` becomes `42`).
fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

pub fn convert_product(product: MedusaProduct) -> Product {
    let price = product.price.and_then(|price| {
        price
            .calculated_price
            .map(|amount| Money::new(format_amount(amount), price.currency_code))
    });

    Product {
        id: product.id,
        title: product.title,
        description: product.description,
        price,
        thumbnail: product.thumbnail,
        images: product.images.into_iter().map(|image| image.url).collect(),
        variant_count: product.variants.len(),
        sku: product.variants.iter().find_map(|variant| variant.sku.clone()),
        // The storefront API does not expose stock status or a public URL.
        stock_status: None,
        permalink: None,
    }
}

pub fn convert_category(category: MedusaCategory) -> Category {
    Category {
        id: category.id,
        name: category.name,
        handle: category.handle,
    }
}

pub fn convert_order(order: MedusaOrder) -> Order {
    let total = order
        .total
        .and_then(|total| match total {
            MedusaTotal::Amount(amount) => Some(amount),
            MedusaTotal::Calculated { calculated_total } => calculated_total,
        })
        .map(|amount| Money::new(format_amount(amount), None));

    Order {
        id: order.id,
        status: order.status,
        created_at: order.created_at,
        total,
        items: order.items.into_iter().map(convert_line_item).collect(),
        shipping_address: order.shipping_address.map(|address| Address {
            city: address.city,
            state: address.province,
            country: address.country_code,
        }),
        payment_method: None,
        shipping_method: None,
    }
}

fn convert_line_item(item: MedusaLineItem) -> LineItem {
    LineItem {
        quantity: item.quantity,
        title: item.title,
        total: item.total.map(format_amount),
    }
}

pub fn convert_customer(customer: MedusaCustomer) -> Customer {
    Customer {
        id: customer.id,
        email: customer.email,
        phone: customer.phone,
        first_name: customer.first_name,
        last_name: customer.last_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_conversion() {
        let wire: MedusaProduct = serde_json::from_value(serde_json::json!({
            "id": "prod_01",
            "title": "Camiseta",
            "description": "Algodón orgánico",
            "thumbnail": "https://cdn.example.com/camiseta.png",
            "images": [{"url": "https://cdn.example.com/camiseta.png"}],
            "variants": [{"sku": "CAM-S"}, {"sku": "CAM-M"}],
            "price": {"calculated_price": 19.5, "currency_code": "EUR"}
        }))
        .expect("wire product should parse");

        let product = convert_product(wire);
        assert_eq!(product.id, "prod_01");
        assert_eq!(product.variant_count, 2);
        assert_eq!(product.sku.as_deref(), Some("CAM-S"));

        let price = product.price.expect("price should convert");
        assert_eq!(price.amount, "19.5");
        assert_eq!(price.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_product_without_calculated_price_has_none() {
        let wire: MedusaProduct = serde_json::from_value(serde_json::json!({
            "id": "prod_02",
            "title": "Gorra",
            "price": {"calculated_price": null}
        }))
        .expect("wire product should parse");

        assert!(convert_product(wire).price.is_none());
    }

    #[test]
    fn test_order_total_variants() {
        let bare: MedusaOrder = serde_json::from_value(serde_json::json!({
            "id": "order_01",
            "status": "pending",
            "total": 42.5
        }))
        .expect("bare total should parse");
        assert_eq!(
            convert_order(bare).total.map(|t| t.amount).as_deref(),
            Some("42.5")
        );

        let enveloped: MedusaOrder = serde_json::from_value(serde_json::json!({
            "id": "order_02",
            "status": "pending",
            "total": {"calculated_total": 99.0}
        }))
        .expect("calculated total should parse");
        assert_eq!(
            convert_order(enveloped).total.map(|t| t.amount).as_deref(),
            Some("99")
        );
    }

    #[test]
    fn test_order_address_maps_province_to_state() {
        let wire: MedusaOrder = serde_json::from_value(serde_json::json!({
            "id": "order_03",
            "status": "shipped",
            "shipping_address": {"city": "Madrid", "province": "Madrid", "country_code": "es"}
        }))
        .expect("order should parse");

        let address = convert_order(wire)
            .shipping_address
            .expect("address should convert");
        assert_eq!(address.state.as_deref(), Some("Madrid"));
        assert_eq!(address.country.as_deref(), Some("es"));
    }
}
