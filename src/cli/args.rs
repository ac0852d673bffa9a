use crate::core::{ReferencePolicy, ReportConfig};
use crate::io::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Generate a per-seller sales performance report
#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(about = "Generate a per-seller sales performance report", long_about = None)]
pub struct CliArgs {
    /// Input JSON file with sellers, products and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON dataset")]
    pub input_file: PathBuf,

    /// Output format for the report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Output format: 'json' or 'csv'"
    )]
    pub format: OutputFormat,

    /// Number of best-selling products listed per seller
    #[arg(
        long = "top",
        value_name = "COUNT",
        help = "Best-selling products listed per seller (default: 10)"
    )]
    pub top_products: Option<usize>,

    /// What to do with receipts referencing unknown sellers or products
    #[arg(
        long = "on-missing",
        value_name = "POLICY",
        default_value = "abort",
        help = "Unknown seller or SKU handling: 'abort' the report or 'skip' the receipt"
    )]
    pub on_missing: ReferencePolicy,
}

impl CliArgs {
    /// Create a ReportConfig from CLI arguments
    ///
    /// Uses the CLI values if provided, falling back to defaults otherwise.
    /// Invalid values are replaced by defaults with a logged warning.
    pub fn to_report_config(&self) -> ReportConfig {
        let default = ReportConfig::default();
        ReportConfig::new(
            self.top_products.unwrap_or(default.top_products_limit),
            self.on_missing,
        )
    }
}
