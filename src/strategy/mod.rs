//! Calculation strategy module
//!
//! This module defines the Strategy pattern for the two pluggable calculations
//! of the report: revenue per purchased line item and bonus per ranked seller.
//! The aggregation code only talks to these traits, so discount, tax or bonus
//! policy can change without touching it.
//!
//! Any closure with a matching signature is a strategy too:
//!
//! ```
//! use rust_decimal::Decimal;
//! use sales_report::strategy::BonusStrategy;
//! use sales_report::types::SellerStats;
//!
//! let flat = |_index: usize, _total: usize, _seller: &SellerStats| Some(Decimal::ONE_HUNDRED);
//! let boxed: Box<dyn BonusStrategy> = Box::new(flat);
//! ```

use crate::types::{LineItem, Product, SellerStats};
use rust_decimal::Decimal;

pub mod bonus;
pub mod revenue;

pub use bonus::BonusByProfit;
pub use revenue::SimpleRevenue;

/// Revenue strategy for a single purchased line item
pub trait RevenueStrategy {
    /// Compute the revenue of `item`, sold from catalog entry `product`
    ///
    /// The result is used at full precision; implementations must not round.
    /// `None` signals that the calculation overflowed.
    fn line_revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal>,
{
    fn line_revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

/// Bonus strategy for a ranked seller
pub trait BonusStrategy {
    /// Compute the bonus of `seller`, ranked at 0-based `index` out of `total`
    ///
    /// Sellers are ranked by profit descending, so index 0 is the top performer.
    /// `None` signals that the calculation overflowed.
    fn bonus(&self, index: usize, total: usize, seller: &SellerStats) -> Option<Decimal>;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> Option<Decimal>,
{
    fn bonus(&self, index: usize, total: usize, seller: &SellerStats) -> Option<Decimal> {
        self(index, total, seller)
    }
}
