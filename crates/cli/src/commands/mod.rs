//! CLI subcommand implementations.

pub mod coupons;
pub mod customers;
pub mod orders;
pub mod products;

use serde::Serialize;

/// Output mode shared by every subcommand: formatted chat messages by
/// default, raw JSON with `--json`.
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print one entity: its JSON form or the provided chat rendering.
    pub fn entity<T: Serialize>(
        &self,
        entity: &T,
        formatted: &str,
    ) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(entity)?);
        } else {
            println!("{formatted}");
        }
        Ok(())
    }

    /// Print a plain informational line (ignored in JSON mode, where absence
    /// of output already means "no results").
    pub fn note(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }
}
