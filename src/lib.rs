//! Sales Report Library
//! # Overview
//!
//! This library computes a per-seller sales performance report from a seller
//! list, a product catalog and a set of purchase receipts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Seller, Product, PurchaseRecord, ReportRow, etc.)
//! - [`strategy`] - Pluggable revenue and bonus calculations
//! - [`core`] - Report generation stages:
//!   - [`core::indexer`] - Seller and product lookup indexes
//!   - [`core::accumulator`] - Per-seller aggregation of receipts
//!   - [`core::ranker`] - Profit ranking, bonuses and top products
//!   - [`core::analyzer`] - Orchestration and configuration
//! - [`io`] - JSON input and JSON/CSV report output
//! - [`cli`] - CLI arguments parsing
//! - [`runner`] - Complete file-to-report run
//!
//! # Report Rows
//!
//! Each seller gets one row, ordered by profit (highest first):
//! - `revenue`: Sum of the seller's receipt totals
//! - `profit`: Sum of line item revenue minus purchase cost
//! - `sales_count`: Number of receipts
//! - `top_products`: Up to 10 best-selling SKUs by quantity
//! - `bonus`: Rank-dependent share of profit
//!
//! Monetary values are accumulated exactly and rounded to two decimal places
//! (half away from zero) only in the final row.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod strategy;
pub mod types;

pub use self::core::{analyze_sales_data, ReferencePolicy, ReportConfig, SalesAnalyzer};
pub use io::{read_sales_data, write_report, OutputFormat};
pub use strategy::{BonusByProfit, BonusStrategy, RevenueStrategy, SimpleRevenue};
pub use types::{
    LineItem, Product, PurchaseRecord, ReportError, ReportRow, SalesData, Seller, SellerStats,
    TopProduct,
};
