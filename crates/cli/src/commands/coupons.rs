//! Coupon subcommands (woocommerce only).

use clap::Subcommand;

use crate::Backend;

use super::Output;

#[derive(Subcommand)]
pub enum CouponAction {
    /// List active coupons
    List,
    /// Look up a coupon by code (case-insensitive)
    Get {
        /// Coupon code
        code: String,
    },
}

pub async fn run(
    backend: &Backend,
    output: &Output,
    action: CouponAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let woocommerce = backend.woocommerce()?;

    match action {
        CouponAction::List => {
            let coupons = woocommerce.get_coupons().await?;
            if coupons.is_empty() {
                output.note("Sin cupones activos");
            }
            for coupon in coupons {
                output.entity(&coupon, &woocommerce.format_coupon_for_whatsapp(&coupon))?;
            }
        }
        CouponAction::Get { code } => match woocommerce.get_coupon(&code).await? {
            Some(coupon) => {
                output.entity(&coupon, &woocommerce.format_coupon_for_whatsapp(&coupon))?;
            }
            None => output.note("Cupón no encontrado"),
        },
    }
    Ok(())
}
