//! Product catalog types
//!
//! Products are read-only for the whole report run. The accumulator only needs
//! the purchase price (for cost) and hands the whole entry to the revenue
//! strategy, which may use any of the remaining fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock keeping unit, the unique product key
pub type Sku = String;

/// Product catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product key
    pub sku: Sku,

    /// Purchase (cost) price of a single unit
    pub purchase_price: Decimal,

    /// Catalog sale price of a single unit
    ///
    /// Receipts carry their own sale price per line item, so this value is only
    /// consulted by revenue strategies that price from the catalog.
    #[serde(default)]
    pub sale_price: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Create a product with only the fields the report needs
    pub fn new(sku: impl Into<Sku>, purchase_price: Decimal, sale_price: Decimal) -> Self {
        Product {
            sku: sku.into(),
            purchase_price,
            sale_price,
            name: None,
            category: None,
        }
    }
}
