//! I/O module
//!
//! Handles dataset loading and report output.
//!
//! # Components
//!
//! - `json_reader` - JSON dataset loading with shape validation
//! - `report_format` - Report serialization (JSON and CSV)

pub mod json_reader;
pub mod report_format;

pub use json_reader::{parse_sales_data, read_sales_data};
pub use report_format::{write_report, write_report_csv, write_report_json, OutputFormat};
