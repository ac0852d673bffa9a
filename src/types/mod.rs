//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `seller`: Seller input records and per-seller working records
//! - `catalog`: Product catalog entries
//! - `purchase`: Purchase receipts and their line items
//! - `report`: Report rows produced for each seller
//! - `error`: Error types for report generation

pub mod catalog;
pub mod error;
pub mod purchase;
pub mod report;
pub mod seller;

pub use catalog::{Product, Sku};
pub use error::ReportError;
pub use purchase::{LineItem, PurchaseRecord, SalesData};
pub use report::{round_money, ReportRow, TopProduct};
pub use seller::{ProductTally, Seller, SellerId, SellerStats};
