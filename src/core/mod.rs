//! Core business logic module
//!
//! This module contains the report generation stages:
//! - `indexer` - Seller and product lookup indexes
//! - `accumulator` - Per-seller aggregation of purchase receipts
//! - `ranker` - Profit ranking, bonuses and report projection
//! - `analyzer` - Orchestration of the three stages

pub mod accumulator;
pub mod analyzer;
pub mod indexer;
pub mod ranker;

pub use accumulator::Accumulator;
pub use analyzer::{
    analyze_sales_data, ReferencePolicy, ReportConfig, SalesAnalyzer, SalesAnalyzerBuilder,
};
pub use indexer::{ProductIndex, SellerIndex};
pub use ranker::{Ranker, DEFAULT_TOP_PRODUCTS};
