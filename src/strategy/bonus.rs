//! Default bonus strategy
//!
//! Bonus tiers by profit rank:
//!
//! | Rank                 | Bonus         |
//! |----------------------|---------------|
//! | 0 (top performer)    | 15% of profit |
//! | 1 and 2              | 10% of profit |
//! | last                 | nothing       |
//! | everyone else        | 5% of profit  |
//!
//! Tiers are checked top-down, so a lone seller (rank 0 and last at once)
//! receives the top tier.

use crate::strategy::BonusStrategy;
use crate::types::SellerStats;
use rust_decimal::Decimal;

/// Tiered bonus by profit rank
#[derive(Debug, Clone, PartialEq)]
pub struct BonusByProfit {
    /// Rate for rank 0
    pub top_rate: Decimal,
    /// Rate for ranks 1 and 2
    pub runner_up_rate: Decimal,
    /// Rate for every other rank except the last
    pub base_rate: Decimal,
}

impl Default for BonusByProfit {
    fn default() -> Self {
        Self {
            top_rate: Decimal::new(15, 2),
            runner_up_rate: Decimal::new(10, 2),
            base_rate: Decimal::new(5, 2),
        }
    }
}

impl BonusByProfit {
    /// Rate applied to the seller ranked at `index` out of `total`
    pub fn rate(&self, index: usize, total: usize) -> Decimal {
        match index {
            0 => self.top_rate,
            1 | 2 => self.runner_up_rate,
            _ if index + 1 == total => Decimal::ZERO,
            _ => self.base_rate,
        }
    }
}

impl BonusStrategy for BonusByProfit {
    fn bonus(&self, index: usize, total: usize, seller: &SellerStats) -> Option<Decimal> {
        seller.profit.checked_mul(self.rate(index, total))
    }
}
