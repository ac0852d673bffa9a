//! Report output types
//!
//! A [`ReportRow`] is the external shape of one seller's results. Monetary
//! values are rounded to two decimal places here and nowhere else.

use super::catalog::Sku;
use super::seller::{SellerId, SellerStats};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Number of decimal places for monetary output
pub const MONEY_SCALE: u32 = 2;

/// Round a monetary value for output
///
/// Uses round-half-away-from-zero and always yields exactly two decimal
/// places, so `12` becomes `12.00` and `0.125` becomes `0.13`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// One entry of a seller's best-selling products
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// Per-seller report row
///
/// Rows are emitted in profit-descending rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

impl ReportRow {
    /// Project a ranked working record into its output shape
    pub fn from_stats(stats: &SellerStats, bonus: Decimal, top_products: Vec<TopProduct>) -> Self {
        ReportRow {
            seller_id: stats.id.clone(),
            name: stats.name.clone(),
            revenue: round_money(stats.revenue),
            profit: round_money(stats.profit),
            sales_count: stats.sales_count,
            top_products,
            bonus: round_money(bonus),
        }
    }
}
