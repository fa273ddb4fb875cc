//! Catalog subcommands.

use clap::Subcommand;

use ventabot_core::{DEFAULT_SEARCH_LIMIT, ProductFilter};

use crate::Backend;

use super::Output;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List products
    List {
        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,

        /// 1-based page
        #[arg(long)]
        page: Option<u32>,
    },
    /// Fetch one product by id
    Get {
        /// Product id
        id: String,
    },
    /// Free-text catalog search
    Search {
        /// Search term
        term: String,

        /// Result cap
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
    },
    /// List product categories
    Categories,
    /// List products in one category
    ByCategory {
        /// Category id
        category_id: String,
    },
    /// One page of the full catalog, newest first (woocommerce only)
    All {
        /// 1-based page
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Results per page
        #[arg(long, default_value_t = ventabot_woocommerce::ALL_PRODUCTS_PAGE_SIZE)]
        per_page: u32,
    },
}

pub async fn run(
    backend: &Backend,
    output: &Output,
    action: ProductAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = backend.adapter();

    let products = match action {
        ProductAction::List { limit, page } => {
            let filter = ProductFilter {
                search: None,
                limit,
                page,
            };
            adapter.list_products(&filter).await?
        }
        ProductAction::Get { id } => {
            match adapter.get_product(&id).await? {
                Some(product) => {
                    output.entity(&product, &adapter.format_product_for_whatsapp(&product))?;
                }
                None => output.note("Producto no encontrado"),
            }
            return Ok(());
        }
        ProductAction::Search { term, limit } => adapter.search_products(&term, limit).await?,
        ProductAction::Categories => {
            for category in adapter.product_categories().await? {
                output.entity(&category, &format!("• {} ({})", category.name, category.id))?;
            }
            return Ok(());
        }
        ProductAction::ByCategory { category_id } => {
            adapter.products_by_category(&category_id).await?
        }
        ProductAction::All { page, per_page } => {
            backend.woocommerce()?.get_all_products(page, per_page).await?
        }
    };

    if products.is_empty() {
        output.note("Sin resultados");
    }
    for product in products {
        output.entity(&product, &adapter.format_product_for_whatsapp(&product))?;
    }
    Ok(())
}
