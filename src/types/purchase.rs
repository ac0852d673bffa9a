//! Purchase receipt types
//!
//! This module defines the receipts consumed by the accumulator and the
//! top-level input structure bundling all three collections.

use super::catalog::{Product, Sku};
use super::seller::{Seller, SellerId};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Complete report input
///
/// Holds the seller list, the product catalog and every purchase receipt.
/// All three collections must be non-empty for a report to be generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// A single purchase receipt
///
/// Belongs to exactly one seller and contains an ordered list of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Receipt identifier, used only for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Seller that made the sale
    pub seller_id: SellerId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Total amount charged on the receipt
    ///
    /// Added as-is to the seller's revenue.
    pub total_amount: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<Decimal>,

    /// Purchased products in receipt order
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    /// Create a receipt without the optional bookkeeping fields
    pub fn new(seller_id: impl Into<SellerId>, total_amount: Decimal, items: Vec<LineItem>) -> Self {
        PurchaseRecord {
            receipt_id: None,
            date: None,
            seller_id: seller_id.into(),
            customer_id: None,
            total_amount,
            total_discount: None,
            items,
        }
    }

    /// Label used in logs and error messages
    pub fn label(&self) -> &str {
        self.receipt_id.as_deref().unwrap_or("<unnamed>")
    }
}

/// One purchased product on a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,

    /// Number of units sold; whole-valued floats such as `2.0` are accepted
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,

    /// Discount in percent (0-100)
    #[serde(default)]
    pub discount: Decimal,

    /// Unit sale price at the time of purchase
    ///
    /// Zero when the receipt does not record one; datasets priced only in the
    /// catalog need a revenue strategy that reads `Product::sale_price`.
    #[serde(default)]
    pub sale_price: Decimal,
}

/// Deserialize a unit count from a JSON integer or a whole-valued float
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WholeOrFloat {
        Whole(u32),
        Float(f64),
    }

    match WholeOrFloat::deserialize(deserializer)? {
        WholeOrFloat::Whole(quantity) => Ok(quantity),
        WholeOrFloat::Float(value)
            if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) =>
        {
            Ok(value as u32)
        }
        WholeOrFloat::Float(value) => Err(de::Error::custom(format!(
            "invalid quantity {}, expected a whole number of units",
            value
        ))),
    }
}

impl LineItem {
    pub fn new(sku: impl Into<Sku>, quantity: u32, discount: Decimal, sale_price: Decimal) -> Self {
        LineItem {
            sku: sku.into(),
            quantity,
            discount,
            sale_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_deserialize_receipt() {
        let json = r#"{
            "receipt_id": "receipt_1",
            "date": "2023-12-04",
            "seller_id": "seller_1",
            "customer_id": "customer_73",
            "items": [
                {"sku": "SKU_039", "discount": 0, "quantity": 10, "sale_price": 20.5}
            ],
            "total_amount": 205,
            "total_discount": 0
        }"#;

        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.label(), "receipt_1");
        assert_eq!(record.seller_id, "seller_1");
        assert_eq!(record.total_amount, Decimal::new(205, 0));
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].quantity, 10);
        assert_eq!(record.items[0].sale_price, Decimal::new(205, 1));
    }

    #[test]
    fn test_label_without_receipt_id() {
        let record = PurchaseRecord::new("seller_1", Decimal::ZERO, vec![]);
        assert_eq!(record.label(), "<unnamed>");
    }

    #[test]
    fn test_missing_discount_defaults_to_zero() {
        let json = r#"{"sku": "SKU_001", "quantity": 1, "sale_price": 5}"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.discount, Decimal::ZERO);
    }

    #[test]
    fn test_missing_sale_price_defaults_to_zero() {
        let json = r#"{"sku": "SKU_001", "quantity": 3, "discount": 5}"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.sale_price, Decimal::ZERO);
    }

    #[rstest]
    #[case::integer("2", 2)]
    #[case::whole_float("2.0", 2)]
    #[case::zero_float("0.0", 0)]
    fn test_quantity_accepts_whole_numbers(#[case] quantity: &str, #[case] expected: u32) {
        let json = format!(r#"{{"sku": "SKU_001", "quantity": {}, "sale_price": 1}}"#, quantity);

        let item: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.quantity, expected);
    }

    #[rstest]
    #[case::fractional("2.5")]
    #[case::negative("-1")]
    #[case::too_large("4294967296")]
    #[case::text("\"two\"")]
    fn test_quantity_rejects_non_unit_counts(#[case] quantity: &str) {
        let json = format!(r#"{{"sku": "SKU_001", "quantity": {}, "sale_price": 1}}"#, quantity);

        assert!(serde_json::from_str::<LineItem>(&json).is_err());
    }
}
