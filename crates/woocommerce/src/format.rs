//! WhatsApp rendering for WooCommerce entities.
//!
//! Pure functions; missing optional fields render a safe fallback or drop
//! the line, they never fail.

use ventabot_core::text::truncated;
use ventabot_core::{Coupon, DiscountKind, Order, Product, StockStatus};

/// Currency label when the platform reported none.
const DEFAULT_CURRENCY: &str = "€";

pub fn product_for_whatsapp(product: &Product) -> String {
    let mut text = format!("*{}*\n\n", product.title);

    if let Some(description) = &product.description {
        text.push_str(&truncated(description));
        text.push_str("\n\n");
    }

    if let Some(price) = &product.price {
        text.push_str(&format!(
            "💰 Precio: {} {}\n",
            price.amount,
            price.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
        ));
    }

    if let Some(sku) = &product.sku {
        text.push_str(&format!("🏷️ SKU: {sku}\n"));
    }

    match product.stock_status {
        Some(StockStatus::InStock) => text.push_str("✅ En stock\n"),
        Some(StockStatus::OutOfStock) => text.push_str("❌ Agotado\n"),
        Some(StockStatus::OnBackorder) | None => {}
    }

    if let Some(image) = product.images.first() {
        text.push_str(&format!("\n🖼️ {image}"));
    }

    if let Some(permalink) = &product.permalink {
        text.push_str(&format!("\n🔗 {permalink}"));
    }

    text
}

pub fn order_for_whatsapp(order: &Order) -> String {
    let currency = order
        .total
        .as_ref()
        .and_then(|total| total.currency.as_deref())
        .unwrap_or(DEFAULT_CURRENCY);

    let mut text = format!("📦 *Pedido #{}*\n\n", order.id);
    text.push_str(&format!("📍 Estado: {}\n", order_status(&order.status)));

    if let Some(created_at) = order.created_at {
        text.push_str(&format!("📅 Fecha: {}\n", created_at.format("%d/%m/%Y")));
    }

    if let Some(total) = &order.total {
        text.push_str(&format!("💰 Total: {} {currency}\n", total.amount));
    }

    if !order.items.is_empty() {
        text.push_str("\n📋 Items:\n");
        for item in &order.items {
            text.push_str(&format!("• {}x {}", item.quantity, item.title));
            if let Some(item_total) = &item.total {
                text.push_str(&format!(" - {item_total} {currency}"));
            }
            text.push('\n');
        }
    }

    if let Some(address) = &order.shipping_address {
        text.push_str(&format!(
            "\n📮 Envío: {}, {}, {}",
            address.city.as_deref().unwrap_or_default(),
            address.state.as_deref().unwrap_or_default(),
            address.country.as_deref().unwrap_or_default()
        ));
    }

    if let Some(payment_method) = &order.payment_method {
        text.push_str(&format!("\n💳 Pago: {payment_method}"));
    }

    if let Some(shipping_method) = &order.shipping_method {
        text.push_str(&format!("\n🚚 Envío: {shipping_method}"));
    }

    text
}

/// Map a WooCommerce order status to its display label. Unmapped codes pass
/// through unchanged.
pub fn order_status(status: &str) -> String {
    match status {
        "pending" => "⏳ Pendiente",
        "processing" => "🔄 Procesando",
        "on_hold" => "⏸️ En espera",
        "completed" => "✅ Completado",
        "cancelled" => "❌ Cancelado",
        "refunded" => "↩️ Reembolsado",
        "failed" => "❌ Fallido",
        "checkout_draft" => "📝 Borrador",
        other => other,
    }
    .to_string()
}

pub fn coupon_for_whatsapp(coupon: &Coupon) -> String {
    let mut text = format!("🏷️ *Cupón: {}*\n\n", coupon.code);

    if let Some(description) = &coupon.description {
        text.push_str(description);
        text.push_str("\n\n");
    }

    match coupon.kind {
        DiscountKind::Percent => {
            text.push_str(&format!("💰 {}% de descuento", coupon.amount));
        }
        DiscountKind::Fixed => {
            text.push_str(&format!(
                "💰 {} {} de descuento",
                coupon.amount,
                coupon.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
            ));
        }
    }

    if let Some(minimum_amount) = &coupon.minimum_amount {
        text.push_str(&format!("\n📦 Mínimo: {minimum_amount}"));
    }

    if let Some(usage_limit) = coupon.usage_limit {
        let remaining = usage_limit - coupon.usage_count.unwrap_or(0);
        if remaining > 0 {
            text.push_str(&format!("\n📊 Restantes: {remaining}"));
        }
    }

    if let Some(expires_at) = coupon.expires_at {
        text.push_str(&format!("\n⏰ Vence: {}", expires_at.format("%d/%m/%Y")));
    }

    text
}
