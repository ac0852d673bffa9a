//! Seller-related types for the sales report
//!
//! This module defines the seller input record, the mutable working record
//! that accumulates a seller's metrics during report generation, and the
//! per-seller tally of quantities sold by SKU.

use super::catalog::Sku;
use super::report::TopProduct;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Seller identifier
pub type SellerId = String;

/// Seller input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller key, referenced by purchase records
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Seller {
    pub fn new(
        id: impl Into<SellerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Seller {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            start_date: None,
            position: None,
        }
    }

    /// Display name as shown in the report
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Seller working record
///
/// Accumulates one seller's metrics while purchase records are processed.
/// All monetary values are kept at full precision; rounding happens only
/// when the record is projected into a [`ReportRow`](super::ReportRow).
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub id: SellerId,
    pub name: String,

    /// Sum of receipt totals
    pub revenue: Decimal,

    /// Sum of line item revenue minus line item cost
    pub profit: Decimal,

    /// Number of receipts
    pub sales_count: u64,

    /// Quantity sold per SKU
    pub products_sold: ProductTally,
}

impl SellerStats {
    /// Create a working record with zero metrics
    pub fn new(seller: &Seller) -> Self {
        SellerStats {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductTally::new(),
        }
    }
}

/// Cumulative quantity sold per SKU
///
/// Keeps SKUs in the order they were first sold so that ranking by quantity
/// can break ties deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    entries: Vec<TopProduct>,
    positions: HashMap<Sku, usize>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units to the tally for `sku`
    ///
    /// Returns the new cumulative quantity, or `None` if it would overflow
    /// (the tally is left unchanged in that case).
    pub fn add(&mut self, sku: &str, quantity: u64) -> Option<u64> {
        match self.positions.get(sku) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.quantity = entry.quantity.checked_add(quantity)?;
                Some(entry.quantity)
            }
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push(TopProduct {
                    sku: sku.to_string(),
                    quantity,
                });
                Some(quantity)
            }
        }
    }

    /// Cumulative quantity sold for `sku`
    pub fn get(&self, sku: &str) -> Option<u64> {
        self.positions
            .get(sku)
            .map(|&position| self.entries[position].quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-sold order
    pub fn iter(&self) -> impl Iterator<Item = &TopProduct> {
        self.entries.iter()
    }

    /// The `limit` best-selling SKUs, quantity descending
    ///
    /// The sort is stable, so SKUs with equal quantities keep first-sold order.
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}
