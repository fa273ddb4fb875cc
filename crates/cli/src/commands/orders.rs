//! Order subcommands.

use clap::Subcommand;

use ventabot_woocommerce::DEFAULT_RECENT_ORDER_DAYS;

use crate::Backend;

use super::Output;

#[derive(Subcommand)]
pub enum OrderAction {
    /// Fetch one order by id
    Get {
        /// Order id
        id: String,
    },
    /// Orders matching a billing/contact email
    ByEmail {
        /// Email address
        email: String,
    },
    /// Orders matching a shipping/billing phone
    ByPhone {
        /// Phone number
        phone: String,
    },
    /// Orders created in the last N days, newest first (woocommerce only)
    Recent {
        /// Lookback window in days
        #[arg(long, default_value_t = DEFAULT_RECENT_ORDER_DAYS)]
        days: i64,
    },
    /// Order history for one customer (woocommerce only)
    ByCustomer {
        /// Customer id
        customer_id: String,
    },
}

pub async fn run(
    backend: &Backend,
    output: &Output,
    action: OrderAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = backend.adapter();

    let orders = match action {
        OrderAction::Get { id } => {
            match adapter.get_order(&id).await? {
                Some(order) => {
                    output.entity(&order, &adapter.format_order_for_whatsapp(&order))?;
                }
                None => output.note("Pedido no encontrado"),
            }
            return Ok(());
        }
        OrderAction::ByEmail { email } => adapter.search_orders_by_email(&email).await?,
        OrderAction::ByPhone { phone } => adapter.search_orders_by_phone(&phone).await?,
        OrderAction::Recent { days } => backend.woocommerce()?.get_recent_orders(days).await?,
        OrderAction::ByCustomer { customer_id } => {
            backend.woocommerce()?.get_customer_orders(&customer_id).await?
        }
    };

    if orders.is_empty() {
        output.note("Sin resultados");
    }
    for order in orders {
        output.entity(&order, &adapter.format_order_for_whatsapp(&order))?;
    }
    Ok(())
}
