//! Ventabot CLI - query commerce backends and preview chat messages.
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog and preview the WhatsApp rendering
//! ventabot --backend woocommerce products search "zapatillas" --limit 5
//!
//! # Look up an order (medusa requires MEDUSA_ADMIN_TOKEN for this)
//! ventabot --backend medusa orders get order_01HZXA9Y2B3C
//!
//! # Coupons exist on the woocommerce backend only
//! ventabot --backend woocommerce coupons get SAVE10
//! ```
//!
//! # Commands
//!
//! - `products` - list / get / search / categories / by-category
//! - `orders` - get / by-email / by-phone / recent / by-customer
//! - `customers` - get / by-phone / by-email
//! - `coupons` - list / get
//!
//! The backend comes from `--backend` or the `VENTABOT_BACKEND` environment
//! variable; adapter credentials come from the environment (see each adapter
//! crate's config docs).

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand, ValueEnum};

use ventabot_core::{CommerceAdapter, CommerceError};
use ventabot_medusa::{MedusaAdapter, MedusaConfig};
use ventabot_woocommerce::{WooAdapter, WooConfig};

mod commands;

#[derive(Parser)]
#[command(name = "ventabot")]
#[command(author, version, about = "Query Ventabot commerce backends")]
struct Cli {
    /// Commerce backend (falls back to VENTABOT_BACKEND)
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Print raw JSON entities instead of formatted chat messages
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendKind {
    Medusa,
    Woocommerce,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog lookups
    Products {
        #[command(subcommand)]
        action: commands::products::ProductAction,
    },
    /// Order lookups
    Orders {
        #[command(subcommand)]
        action: commands::orders::OrderAction,
    },
    /// Customer lookups
    Customers {
        #[command(subcommand)]
        action: commands::customers::CustomerAction,
    },
    /// Coupon lookups (woocommerce only)
    Coupons {
        #[command(subcommand)]
        action: commands::coupons::CouponAction,
    },
}

/// The configured backend adapter.
enum Backend {
    Medusa(MedusaAdapter),
    WooCommerce(WooAdapter),
}

impl Backend {
    fn build(kind: BackendKind) -> Result<Self, CommerceError> {
        match kind {
            BackendKind::Medusa => Ok(Self::Medusa(MedusaAdapter::new(MedusaConfig::from_env()))),
            BackendKind::Woocommerce => {
                Ok(Self::WooCommerce(WooAdapter::new(WooConfig::from_env()?)))
            }
        }
    }

    fn adapter(&self) -> &dyn CommerceAdapter {
        match self {
            Self::Medusa(adapter) => adapter,
            Self::WooCommerce(adapter) => adapter,
        }
    }

    /// The woocommerce adapter, for operations only that platform serves.
    fn woocommerce(&self) -> Result<&WooAdapter, CommerceError> {
        match self {
            Self::WooCommerce(adapter) => Ok(adapter),
            Self::Medusa(_) => Err(CommerceError::Configuration(
                "this operation requires the woocommerce backend".to_string(),
            )),
        }
    }
}

fn backend_kind(cli_value: Option<BackendKind>) -> Result<BackendKind, CommerceError> {
    if let Some(kind) = cli_value {
        return Ok(kind);
    }

    let value = std::env::var("VENTABOT_BACKEND").map_err(|_| {
        CommerceError::Configuration(
            "select a backend with --backend or VENTABOT_BACKEND".to_string(),
        )
    })?;
    BackendKind::from_str(&value, true)
        .map_err(|_| CommerceError::Configuration(format!("unknown backend '{value}'")))
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let backend = Backend::build(backend_kind(cli.backend)?)?;
    let output = commands::Output::new(cli.json);

    match cli.command {
        Commands::Products { action } => {
            commands::products::run(&backend, &output, action).await?;
        }
        Commands::Orders { action } => commands::orders::run(&backend, &output, action).await?,
        Commands::Customers { action } => {
            commands::customers::run(&backend, &output, action).await?;
        }
        Commands::Coupons { action } => commands::coupons::run(&backend, &output, action).await?,
    }
    Ok(())
}
