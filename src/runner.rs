//! End-to-end report run
//!
//! Orchestrates a complete run by coordinating the JSON reader (input), the
//! SalesAnalyzer (business logic) and the report writer (output). Used by the
//! CLI and by the end-to-end tests.

use crate::core::{ReportConfig, SalesAnalyzer};
use crate::io::{read_sales_data, write_report, OutputFormat};
use crate::strategy::{BonusByProfit, SimpleRevenue};
use crate::types::ReportError;
use std::io::Write;
use std::path::Path;

/// Generate a report from a JSON dataset file using the default strategies
///
/// # Arguments
///
/// * `input_path` - Path to the JSON dataset
/// * `format` - Output format
/// * `config` - Report settings
/// * `output` - Writer receiving the report
///
/// # Errors
///
/// Any error is fatal and nothing is written to `output`, except for a
/// failure while writing the report itself.
///
/// # Examples
///
/// ```no_run
/// use sales_report::core::ReportConfig;
/// use sales_report::io::OutputFormat;
/// use sales_report::runner::generate_report;
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// generate_report(Path::new("data.json"), OutputFormat::Csv, ReportConfig::default(), &mut output)
///     .expect("Report failed");
/// ```
pub fn generate_report(
    input_path: &Path,
    format: OutputFormat,
    config: ReportConfig,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let data = read_sales_data(input_path)?;

    let analyzer = SalesAnalyzer::builder()
        .revenue_strategy(SimpleRevenue)
        .bonus_strategy(BonusByProfit::default())
        .config(config)
        .build()?;
    let rows = analyzer.analyze(&data)?;

    write_report(&rows, format, output)
}
