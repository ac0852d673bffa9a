//! Report output serialization
//!
//! Two output formats are supported:
//! - JSON: a pretty-printed array of report rows, monetary fields as numbers
//! - CSV: one line per seller with columns
//!   `seller_id, name, revenue, profit, sales_count, bonus, top_products`
//!
//! In CSV, money is always written with two decimal places and top products
//! are written as `SKU:quantity` pairs joined by `;`.

use crate::types::{ReportError, ReportRow, TopProduct};
use clap::ValueEnum;
use std::io::Write;

/// Supported report output formats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Write the report in the requested format
pub fn write_report(
    rows: &[ReportRow],
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Json => write_report_json(rows, output),
        OutputFormat::Csv => write_report_csv(rows, output),
    }
}

/// Write report rows as a pretty-printed JSON array
pub fn write_report_json(rows: &[ReportRow], output: &mut dyn Write) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, rows)
        .map_err(|e| ReportError::output(format!("Failed to write JSON report: {}", e)))?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Write report rows as CSV, keeping rank order
pub fn write_report_csv(rows: &[ReportRow], output: &mut dyn Write) -> Result<(), ReportError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    // Write header
    writer.write_record([
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "bonus",
        "top_products",
    ])?;

    for row in rows {
        writer.write_record(&[
            row.seller_id.clone(),
            row.name.clone(),
            format!("{:.2}", row.revenue),
            format!("{:.2}", row.profit),
            row.sales_count.to_string(),
            format!("{:.2}", row.bonus),
            format_top_products(&row.top_products),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| ReportError::output(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

fn format_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|product| format!("{}:{}", product.sku, product.quantity))
        .collect::<Vec<_>>()
        .join(";")
}
