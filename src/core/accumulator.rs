//! Receipt accumulation
//!
//! The Accumulator walks purchase receipts one at a time and folds each into
//! the working record of the seller that made the sale.
//!
//! For every receipt:
//! - `sales_count` grows by one and `revenue` by the receipt total
//! - every line item adds `line_revenue - purchase_price * quantity` to `profit`
//! - every line item adds its quantity to the seller's per-SKU tally
//!
//! Nothing is rounded here. Every reference on a receipt is resolved before the
//! seller record is touched, so a receipt that fails lookup leaves no trace.

use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::strategy::RevenueStrategy;
use crate::types::{LineItem, Product, PurchaseRecord, ReportError};
use rust_decimal::Decimal;

/// Folds purchase receipts into seller working records
pub struct Accumulator<'a> {
    sellers: SellerIndex,
    products: ProductIndex<'a>,
    revenue: &'a dyn RevenueStrategy,
}

impl<'a> Accumulator<'a> {
    pub fn new(
        sellers: SellerIndex,
        products: ProductIndex<'a>,
        revenue: &'a dyn RevenueStrategy,
    ) -> Self {
        Accumulator {
            sellers,
            products,
            revenue,
        }
    }

    /// Process a single purchase receipt
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The receipt's seller is not in the seller index
    /// - A line item's SKU is not in the catalog
    /// - Accumulating a metric would overflow
    pub fn process(&mut self, record: &PurchaseRecord) -> Result<(), ReportError> {
        let seller_id = record.seller_id.as_str();
        if !self.sellers.contains(seller_id) {
            return Err(ReportError::unknown_seller(seller_id, record.label()));
        }

        let lines = self.resolve_items(record)?;

        // Line profits are computed before borrowing the seller record
        let mut line_profits = Vec::with_capacity(lines.len());
        for (item, product) in &lines {
            line_profits.push(self.line_profit(item, product, seller_id)?);
        }

        let stats = self
            .sellers
            .get_mut(seller_id)
            .ok_or_else(|| ReportError::unknown_seller(seller_id, record.label()))?;

        stats.sales_count += 1;
        stats.revenue = stats
            .revenue
            .checked_add(record.total_amount)
            .ok_or_else(|| ReportError::arithmetic_overflow("revenue", seller_id))?;

        for ((item, _), line_profit) in lines.iter().zip(line_profits) {
            stats.profit = stats
                .profit
                .checked_add(line_profit)
                .ok_or_else(|| ReportError::arithmetic_overflow("profit", seller_id))?;
            stats
                .products_sold
                .add(&item.sku, u64::from(item.quantity))
                .ok_or_else(|| ReportError::arithmetic_overflow("quantity", seller_id))?;
        }

        Ok(())
    }

    /// Consume the accumulator, returning the updated seller index
    pub fn into_sellers(self) -> SellerIndex {
        self.sellers
    }

    fn resolve_items<'r>(
        &self,
        record: &'r PurchaseRecord,
    ) -> Result<Vec<(&'r LineItem, &'a Product)>, ReportError> {
        record
            .items
            .iter()
            .map(|item| {
                self.products
                    .get(&item.sku)
                    .map(|product| (item, product))
                    .ok_or_else(|| ReportError::unknown_product(&item.sku, record.label()))
            })
            .collect()
    }

    fn line_profit(
        &self,
        item: &LineItem,
        product: &Product,
        seller_id: &str,
    ) -> Result<Decimal, ReportError> {
        let cost = product
            .purchase_price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or_else(|| ReportError::arithmetic_overflow("cost", seller_id))?;
        let line_revenue = self
            .revenue
            .line_revenue(item, product)
            .ok_or_else(|| ReportError::arithmetic_overflow("line revenue", seller_id))?;

        line_revenue
            .checked_sub(cost)
            .ok_or_else(|| ReportError::arithmetic_overflow("profit", seller_id))
    }
}
