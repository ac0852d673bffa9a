//! Seller ranking and report projection
//!
//! Sellers are ranked by profit, highest first. Each ranked seller gets a bonus
//! from the injected bonus strategy and a list of its best-selling products,
//! then is projected into a [`ReportRow`].

use crate::strategy::BonusStrategy;
use crate::types::{ReportError, ReportRow, SellerStats};

/// Default number of best-selling products per seller
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Ranks seller working records and builds report rows
pub struct Ranker<'a> {
    bonus: &'a dyn BonusStrategy,
    top_products_limit: usize,
}

impl<'a> Ranker<'a> {
    pub fn new(bonus: &'a dyn BonusStrategy, top_products_limit: usize) -> Self {
        Ranker {
            bonus,
            top_products_limit,
        }
    }

    /// Rank sellers and project them into report rows
    ///
    /// The sort is stable: sellers with equal profit keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ArithmeticOverflow`] if a bonus overflows.
    pub fn rank(&self, mut sellers: Vec<SellerStats>) -> Result<Vec<ReportRow>, ReportError> {
        sellers.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = sellers.len();
        sellers
            .iter()
            .enumerate()
            .map(|(index, seller)| -> Result<ReportRow, ReportError> {
                let bonus = self
                    .bonus
                    .bonus(index, total, seller)
                    .ok_or_else(|| ReportError::arithmetic_overflow("bonus", &seller.id))?;
                let top_products = seller.products_sold.top(self.top_products_limit);
                Ok(ReportRow::from_stats(seller, bonus, top_products))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::BonusByProfit;
    use crate::types::Seller;
    use rust_decimal::Decimal;

    fn stats(id: &str, profit: i64) -> SellerStats {
        let mut stats = SellerStats::new(&Seller::new(id, "First", id));
        stats.profit = Decimal::new(profit, 0);
        stats
    }

    #[test]
    fn test_rank_sorts_by_profit_descending() {
        let bonus = BonusByProfit::default();
        let ranker = Ranker::new(&bonus, DEFAULT_TOP_PRODUCTS);

        let rows = ranker
            .rank(vec![stats("a", 10), stats("b", 300), stats("c", -5), stats("d", 40)])
            .unwrap();

        let ids: Vec<&str> = rows.iter().map(|row| row.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let bonus = BonusByProfit::default();
        let ranker = Ranker::new(&bonus, DEFAULT_TOP_PRODUCTS);

        let rows = ranker.rank(vec![stats("x", 5), stats("y", 7), stats("z", 5)]).unwrap();

        let ids: Vec<&str> = rows.iter().map(|row| row.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_rank_assigns_tiered_bonus() {
        let bonus = BonusByProfit::default();
        let ranker = Ranker::new(&bonus, DEFAULT_TOP_PRODUCTS);

        let rows = ranker
            .rank(vec![
                stats("a", 1000),
                stats("b", 900),
                stats("c", 800),
                stats("d", 700),
                stats("e", 600),
            ])
            .unwrap();

        let bonuses: Vec<String> = rows.iter().map(|row| row.bonus.to_string()).collect();
        assert_eq!(bonuses, vec!["150.00", "90.00", "80.00", "35.00", "0.00"]);
    }

    #[test]
    fn test_rank_passes_index_and_total_to_strategy() {
        let record = |index: usize, total: usize, _seller: &SellerStats| {
            Some(Decimal::from(index * 100 + total))
        };
        let ranker = Ranker::new(&record, DEFAULT_TOP_PRODUCTS);

        let rows = ranker.rank(vec![stats("a", 1), stats("b", 2), stats("c", 3)]).unwrap();

        let bonuses: Vec<String> = rows.iter().map(|row| row.bonus.to_string()).collect();
        assert_eq!(bonuses, vec!["3.00", "103.00", "203.00"]);
    }

    #[test]
    fn test_rank_limits_top_products() {
        let bonus = BonusByProfit::default();
        let ranker = Ranker::new(&bonus, DEFAULT_TOP_PRODUCTS);

        let mut seller = stats("a", 1);
        for n in 1..=12u64 {
            seller.products_sold.add(&format!("SKU_{:03}", n), n);
        }

        let rows = ranker.rank(vec![seller]).unwrap();
        let top = &rows[0].top_products;

        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sku, "SKU_012");
        assert_eq!(top[0].quantity, 12);
        assert_eq!(top[9].sku, "SKU_003");
        assert!(top.windows(2).all(|pair| pair[0].quantity >= pair[1].quantity));
    }

    #[test]
    fn test_rank_custom_top_limit() {
        let bonus = BonusByProfit::default();
        let ranker = Ranker::new(&bonus, 1);

        let mut seller = stats("a", 1);
        seller.products_sold.add("SKU_001", 1);
        seller.products_sold.add("SKU_002", 4);

        let rows = ranker.rank(vec![seller]).unwrap();
        assert_eq!(rows[0].top_products.len(), 1);
        assert_eq!(rows[0].top_products[0].sku, "SKU_002");
    }

    #[test]
    fn test_rank_reports_bonus_overflow() {
        let bonus = BonusByProfit {
            top_rate: Decimal::new(1000, 0),
            ..BonusByProfit::default()
        };
        let ranker = Ranker::new(&bonus, DEFAULT_TOP_PRODUCTS);

        let mut seller = stats("a", 0);
        seller.profit = Decimal::MAX;

        assert_eq!(
            ranker.rank(vec![seller]).unwrap_err(),
            ReportError::arithmetic_overflow("bonus", "a")
        );
    }
}
