//! JSON dataset reader
//!
//! Loads the report input from a JSON document of the form
//!
//! ```json
//! {
//!   "sellers": [ ... ],
//!   "products": [ ... ],
//!   "purchase_records": [ ... ]
//! }
//! ```
//!
//! # Design
//!
//! The document is first parsed into a generic `serde_json::Value` and its
//! shape is checked: the top level must be an object and every collection must
//! be present and be an array. Shape problems surface as
//! [`ReportError::InvalidInput`] naming the offending field; only then is the
//! value deserialized into [`SalesData`]. Emptiness is left to the analyzer.
//!
//! Line items need `sku` and `quantity`. A missing `discount` or unit
//! `sale_price` loads as zero, and a whole-valued float quantity such as `2.0`
//! is accepted.

use crate::types::{ReportError, SalesData};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Collections every dataset must contain
pub const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Load a dataset from a JSON file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The file is not valid JSON
/// - A collection is missing or not a list
/// - A record does not match its expected shape
pub fn read_sales_data(path: &Path) -> Result<SalesData, ReportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ReportError::from(e),
    })?;

    let data = parse_sales_data(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "Loaded sales data"
    );
    Ok(data)
}

/// Parse a dataset from any JSON reader
pub fn parse_sales_data<R: Read>(reader: R) -> Result<SalesData, ReportError> {
    let value: Value = serde_json::from_reader(reader)?;
    validate_shape(&value)?;
    Ok(serde_json::from_value(value)?)
}

fn validate_shape(value: &Value) -> Result<(), ReportError> {
    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Err(ReportError::invalid_input("data", "is missing")),
        _ => return Err(ReportError::invalid_input("data", "must be a JSON object")),
    };

    for field in COLLECTIONS {
        match object.get(field) {
            Some(Value::Array(_)) => {}
            None | Some(Value::Null) => {
                return Err(ReportError::invalid_input(field, "is missing"));
            }
            Some(_) => return Err(ReportError::invalid_input(field, "must be a list")),
        }
    }

    Ok(())
}
