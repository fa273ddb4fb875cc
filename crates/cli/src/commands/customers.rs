//! Customer subcommands.

use clap::Subcommand;

use ventabot_core::Customer;

use crate::Backend;

use super::Output;

#[derive(Subcommand)]
pub enum CustomerAction {
    /// Fetch one customer by id
    Get {
        /// Customer id
        id: String,
    },
    /// First customer matching a phone number
    ByPhone {
        /// Phone number
        phone: String,
    },
    /// First customer matching an email (woocommerce only)
    ByEmail {
        /// Email address
        email: String,
    },
}

fn describe(customer: &Customer) -> String {
    let name = [customer.first_name.as_deref(), customer.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "👤 {} ({})\n📧 {}\n📱 {}",
        if name.is_empty() { "—" } else { name.as_str() },
        customer.id,
        customer.email.as_deref().unwrap_or("—"),
        customer.phone.as_deref().unwrap_or("—"),
    )
}

pub async fn run(
    backend: &Backend,
    output: &Output,
    action: CustomerAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = backend.adapter();

    let customer = match action {
        CustomerAction::Get { id } => adapter.get_customer(&id).await?,
        CustomerAction::ByPhone { phone } => adapter.search_customers_by_phone(&phone).await?,
        CustomerAction::ByEmail { email } => {
            backend.woocommerce()?.search_customers_by_email(&email).await?
        }
    };

    match customer {
        Some(customer) => output.entity(&customer, &describe(&customer))?,
        None => output.note("Cliente no encontrado"),
    }
    Ok(())
}
