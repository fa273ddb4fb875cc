//! WhatsApp rendering for Medusa entities.
//!
//! Pure functions; missing optional fields render a safe fallback or drop
//! the line, they never fail.

use ventabot_core::text::truncated;
use ventabot_core::{Order, Product};

/// Characters of the order id shown in chat.
const ORDER_ID_SUFFIX: usize = 8;

pub fn product_for_whatsapp(product: &Product) -> String {
    let mut text = format!("*{}*\n\n", product.title);

    if let Some(description) = &product.description {
        text.push_str(&truncated(description));
        text.push_str("\n\n");
    }

    let price = product
        .price
        .as_ref()
        .map_or_else(|| "Consultar".to_string(), |price| price.amount.clone());
    text.push_str(&format!("💰 Precio: {price}\n"));

    if product.variant_count > 0 {
        text.push_str(&format!("\n📦 Variantes: {}", product.variant_count));
    }

    if let Some(thumbnail) = &product.thumbnail {
        text.push_str(&format!("\n🖼️ {thumbnail}"));
    }

    text
}

pub fn order_for_whatsapp(order: &Order) -> String {
    let skip = order.id.chars().count().saturating_sub(ORDER_ID_SUFFIX);
    let short_id: String = order.id.chars().skip(skip).collect();

    let mut text = format!("📦 *Pedido #{short_id}*\n\n");
    text.push_str(&format!("📍 Estado: {}\n", order_status(&order.status)));

    if let Some(created_at) = order.created_at {
        text.push_str(&format!("📅 Fecha: {}\n", created_at.format("%d/%m/%Y")));
    }

    if let Some(total) = &order.total {
        text.push_str(&format!("💰 Total: {} €\n", total.amount));
    }

    if !order.items.is_empty() {
        text.push_str("\n📋 Items:\n");
        for item in &order.items {
            text.push_str(&format!("• {}x {}\n", item.quantity, item.title));
        }
    }

    if let Some(address) = &order.shipping_address {
        text.push_str(&format!(
            "\n📮 Envío: {}, {}",
            address.city.as_deref().unwrap_or_default(),
            address.country.as_deref().unwrap_or_default()
        ));
    }

    text
}

/// Map a Medusa order status to its display label. Unmapped codes pass
/// through unchanged.
pub fn order_status(status: &str) -> String {
    match status {
        "pending" => "⏳ Pendiente",
        "confirmed" => "✅ Confirmado",
        "shipped" => "🚚 Enviado",
        "delivered" => "📦 Entregado",
        "canceled" => "❌ Cancelado",
        "requires_action" => "⚠️ Requiere acción",
        other => other,
    }
    .to_string()
}
