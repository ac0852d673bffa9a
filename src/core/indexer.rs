//! Lookup indexes for sellers and products
//!
//! Both indexes are built once, before any receipt is processed. The seller
//! index owns the mutable working records; the product index only borrows the
//! read-only catalog.

use crate::types::{Product, Seller, SellerId, SellerStats};
use std::collections::HashMap;
use tracing::warn;

/// Seller working records keyed by seller id
///
/// Remembers the input order of sellers so that ranking ties resolve in a
/// deterministic way.
#[derive(Debug, Default)]
pub struct SellerIndex {
    order: Vec<SellerId>,
    stats: HashMap<SellerId, SellerStats>,
}

impl SellerIndex {
    /// Build zeroed working records for every seller
    ///
    /// A repeated seller id keeps its first record; later duplicates are ignored.
    pub fn build(sellers: &[Seller]) -> Self {
        let mut index = SellerIndex {
            order: Vec::with_capacity(sellers.len()),
            stats: HashMap::with_capacity(sellers.len()),
        };

        for seller in sellers {
            if index.stats.contains_key(&seller.id) {
                warn!(seller_id = %seller.id, "Duplicate seller id, keeping the first record");
                continue;
            }
            index.order.push(seller.id.clone());
            index
                .stats
                .insert(seller.id.clone(), SellerStats::new(seller));
        }

        index
    }

    pub fn contains(&self, seller_id: &str) -> bool {
        self.stats.contains_key(seller_id)
    }

    pub fn get(&self, seller_id: &str) -> Option<&SellerStats> {
        self.stats.get(seller_id)
    }

    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerStats> {
        self.stats.get_mut(seller_id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consume the index, returning working records in input order
    pub fn into_stats(mut self) -> Vec<SellerStats> {
        self.order
            .iter()
            .filter_map(|id| self.stats.remove(id))
            .collect()
    }
}

/// Read-only catalog keyed by SKU
#[derive(Debug, Default)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    /// Index the catalog; a repeated SKU resolves to its last entry
    pub fn build(products: &'a [Product]) -> Self {
        let products = products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();
        ProductIndex { products }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_seller_index_builds_zeroed_records() {
        let sellers = vec![
            Seller::new("seller_1", "Ivan", "Ivanov"),
            Seller::new("seller_2", "Olga", "Sidorova"),
        ];

        let index = SellerIndex::build(&sellers);
        assert_eq!(index.len(), 2);
        assert!(index.contains("seller_1"));
        assert!(!index.contains("seller_3"));

        let stats = index.get("seller_2").unwrap();
        assert_eq!(stats.name, "Olga Sidorova");
        assert_eq!(stats.profit, Decimal::ZERO);
    }

    #[test]
    fn test_seller_index_keeps_input_order() {
        let sellers = vec![
            Seller::new("seller_3", "C", "C"),
            Seller::new("seller_1", "A", "A"),
            Seller::new("seller_2", "B", "B"),
        ];

        let ids: Vec<String> = SellerIndex::build(&sellers)
            .into_stats()
            .into_iter()
            .map(|stats| stats.id)
            .collect();
        assert_eq!(ids, vec!["seller_3", "seller_1", "seller_2"]);
    }

    #[test]
    fn test_seller_index_ignores_duplicate_ids() {
        let sellers = vec![
            Seller::new("seller_1", "First", "Record"),
            Seller::new("seller_1", "Second", "Record"),
        ];

        let index = SellerIndex::build(&sellers);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("seller_1").unwrap().name, "First Record");
        assert_eq!(index.into_stats().len(), 1);
    }

    #[test]
    fn test_seller_index_get_mut_updates_in_place() {
        let sellers = vec![Seller::new("seller_1", "Ivan", "Ivanov")];
        let mut index = SellerIndex::build(&sellers);

        index.get_mut("seller_1").unwrap().sales_count += 1;
        assert_eq!(index.get("seller_1").unwrap().sales_count, 1);
        assert!(index.get_mut("seller_2").is_none());
    }

    #[test]
    fn test_product_index_lookup() {
        let products = vec![
            Product::new("SKU_001", Decimal::new(10, 0), Decimal::new(15, 0)),
            Product::new("SKU_002", Decimal::new(20, 0), Decimal::new(25, 0)),
        ];

        let index = ProductIndex::build(&products);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("SKU_002").unwrap().purchase_price, Decimal::new(20, 0));
        assert!(index.get("SKU_404").is_none());
    }

    #[test]
    fn test_product_index_last_duplicate_wins() {
        let products = vec![
            Product::new("SKU_001", Decimal::new(10, 0), Decimal::ZERO),
            Product::new("SKU_001", Decimal::new(12, 0), Decimal::ZERO),
        ];

        let index = ProductIndex::build(&products);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("SKU_001").unwrap().purchase_price, Decimal::new(12, 0));
    }

    #[test]
    fn test_indexes_over_empty_input() {
        let sellers = SellerIndex::build(&[]);
        let products = ProductIndex::build(&[]);

        assert!(sellers.is_empty());
        assert!(sellers.into_stats().is_empty());
        assert!(products.is_empty());

        let catalog = vec![Product::new("SKU_001", Decimal::ONE, Decimal::ONE)];
        assert!(!ProductIndex::build(&catalog).is_empty());
    }
}
