//! Default revenue strategy

use crate::strategy::RevenueStrategy;
use crate::types::{LineItem, Product};
use rust_decimal::Decimal;

/// Discounted sale price revenue
///
/// `sale_price * quantity * (1 - discount / 100)`, using the unit sale price
/// recorded on the receipt. The catalog entry is not consulted. Returns `None`
/// when the product overflows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn line_revenue(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        let discount = Decimal::ONE.checked_sub(item.discount / Decimal::ONE_HUNDRED)?;
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))?
            .checked_mul(discount)
    }
}
