//! Sales report orchestration
//!
//! This module provides the SalesAnalyzer that runs the three report stages in
//! order: index sellers and products, accumulate every purchase receipt, then
//! rank sellers and project report rows.
//!
//! The analyzer enforces the report's preconditions before any processing:
//! - all three input collections must be non-empty
//! - both calculation strategies must be supplied

use crate::core::accumulator::Accumulator;
use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::core::ranker::{Ranker, DEFAULT_TOP_PRODUCTS};
use crate::strategy::{BonusByProfit, BonusStrategy, RevenueStrategy, SimpleRevenue};
use crate::types::{ReportError, ReportRow, SalesData};
use clap::ValueEnum;
use tracing::{debug, info, warn};

/// What to do with a receipt that references an unknown seller or SKU
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReferencePolicy {
    /// Fail the whole report
    #[default]
    Abort,
    /// Drop the offending receipt and keep going
    Skip,
}

/// Report generation settings
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Maximum number of best-selling products listed per seller
    pub top_products_limit: usize,
    pub reference_policy: ReferencePolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS,
            reference_policy: ReferencePolicy::Abort,
        }
    }
}

impl ReportConfig {
    /// Create a ReportConfig with custom values
    ///
    /// A zero top-products limit falls back to the default.
    pub fn new(top_products_limit: usize, reference_policy: ReferencePolicy) -> Self {
        let default = Self::default();

        let top_products_limit = if top_products_limit == 0 {
            warn!(
                "Invalid top products limit ({}), using default ({})",
                top_products_limit, default.top_products_limit
            );
            default.top_products_limit
        } else {
            top_products_limit
        };

        Self {
            top_products_limit,
            reference_policy,
        }
    }
}

/// Sales report generator
///
/// Holds the two calculation strategies and the report configuration.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_report::core::SalesAnalyzer;
/// use sales_report::types::{LineItem, Product, PurchaseRecord, SalesData, Seller};
///
/// let data = SalesData {
///     sellers: vec![Seller::new("seller_1", "Ivan", "Ivanov")],
///     products: vec![Product::new("SKU_001", Decimal::new(50, 0), Decimal::new(100, 0))],
///     purchase_records: vec![PurchaseRecord::new(
///         "seller_1",
///         Decimal::new(180, 0),
///         vec![LineItem::new("SKU_001", 2, Decimal::new(10, 0), Decimal::new(100, 0))],
///     )],
/// };
///
/// let report = SalesAnalyzer::new().analyze(&data).unwrap();
/// assert_eq!(report[0].profit.to_string(), "80.00");
/// assert_eq!(report[0].bonus.to_string(), "12.00");
/// ```
pub struct SalesAnalyzer {
    revenue: Box<dyn RevenueStrategy>,
    bonus: Box<dyn BonusStrategy>,
    config: ReportConfig,
}

impl SalesAnalyzer {
    /// Create an analyzer with the default strategies and configuration
    pub fn new() -> Self {
        SalesAnalyzer {
            revenue: Box::new(SimpleRevenue),
            bonus: Box::new(BonusByProfit::default()),
            config: ReportConfig::default(),
        }
    }

    /// Start building an analyzer with no strategies set
    pub fn builder() -> SalesAnalyzerBuilder {
        SalesAnalyzerBuilder::default()
    }

    /// Generate the ranked report
    ///
    /// # Returns
    ///
    /// One row per distinct seller, in profit-descending order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any input collection is empty
    /// - A receipt references an unknown seller or SKU (unless skipping)
    /// - Accumulating a metric or computing a bonus would overflow
    pub fn analyze(&self, data: &SalesData) -> Result<Vec<ReportRow>, ReportError> {
        validate_input(data)?;

        let sellers = SellerIndex::build(&data.sellers);
        let products = ProductIndex::build(&data.products);
        debug!(
            sellers = sellers.len(),
            products = products.len(),
            "Built lookup indexes"
        );

        let mut accumulator = Accumulator::new(sellers, products, self.revenue.as_ref());
        let mut skipped = 0usize;
        for record in &data.purchase_records {
            match accumulator.process(record) {
                Ok(()) => {}
                Err(e) if e.is_lookup_failure()
                    && self.config.reference_policy == ReferencePolicy::Skip =>
                {
                    warn!(receipt = record.label(), "Skipping receipt: {}", e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            receipts = data.purchase_records.len(),
            skipped, "Accumulated purchase records"
        );

        let ranker = Ranker::new(self.bonus.as_ref(), self.config.top_products_limit);
        let rows = ranker.rank(accumulator.into_sellers().into_stats())?;

        info!(
            sellers = rows.len(),
            receipts = data.purchase_records.len() - skipped,
            skipped,
            "Generated sales report"
        );

        Ok(rows)
    }
}

impl Default for SalesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`SalesAnalyzer`] with custom strategies
///
/// Both strategies are required; `build` fails with
/// [`ReportError::InvalidStrategy`] naming the first one missing.
#[derive(Default)]
pub struct SalesAnalyzerBuilder {
    revenue: Option<Box<dyn RevenueStrategy>>,
    bonus: Option<Box<dyn BonusStrategy>>,
    config: ReportConfig,
}

impl SalesAnalyzerBuilder {
    pub fn revenue_strategy(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Box::new(strategy));
        self
    }

    pub fn bonus_strategy(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Box::new(strategy));
        self
    }

    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<SalesAnalyzer, ReportError> {
        let revenue = self
            .revenue
            .ok_or_else(|| ReportError::invalid_strategy("revenue"))?;
        let bonus = self
            .bonus
            .ok_or_else(|| ReportError::invalid_strategy("bonus"))?;

        Ok(SalesAnalyzer {
            revenue,
            bonus,
            config: self.config,
        })
    }
}

/// Generate a report with the given strategies and default configuration
pub fn analyze_sales_data(
    data: &SalesData,
    revenue: impl RevenueStrategy + 'static,
    bonus: impl BonusStrategy + 'static,
) -> Result<Vec<ReportRow>, ReportError> {
    SalesAnalyzer::builder()
        .revenue_strategy(revenue)
        .bonus_strategy(bonus)
        .build()?
        .analyze(data)
}

fn validate_input(data: &SalesData) -> Result<(), ReportError> {
    if data.sellers.is_empty() {
        return Err(ReportError::invalid_input("sellers", "must not be empty"));
    }
    if data.products.is_empty() {
        return Err(ReportError::invalid_input("products", "must not be empty"));
    }
    if data.purchase_records.is_empty() {
        return Err(ReportError::invalid_input(
            "purchase_records",
            "must not be empty",
        ));
    }
    Ok(())
}
