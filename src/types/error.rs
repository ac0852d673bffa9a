//! Error types for the sales report
//!
//! This module defines all error types that can occur while loading input,
//! generating a report and writing it out. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: missing, malformed or empty input collections
//! - **Strategy Errors**: a required calculation strategy was not supplied
//! - **Lookup Errors**: a receipt references an unknown seller or product
//! - **Arithmetic Errors**: overflow while accumulating seller metrics
//! - **File and Format Errors**: file not found, JSON parsing, output writing

use thiserror::Error;

/// Main error type for report generation
///
/// Every variant is fatal for the report: either the full ranked report is
/// produced or one of these errors is returned. The only exception is the
/// lookup errors, which the analyzer may be configured to skip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Input structure is missing, not a list, or empty
    #[error("Invalid input: '{field}' {reason}")]
    InvalidInput {
        /// Name of the offending collection (or `data` for the whole input)
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// A calculation strategy was not supplied
    #[error("Strategy '{name}' is not defined")]
    InvalidStrategy {
        /// Strategy name (`revenue` or `bonus`)
        name: String,
    },

    /// A receipt references a seller that is not in the seller list
    #[error("Unknown seller '{seller_id}' referenced by receipt {receipt}")]
    UnknownSeller { seller_id: String, receipt: String },

    /// A line item references a SKU that is not in the catalog
    #[error("Unknown product '{sku}' referenced by receipt {receipt}")]
    UnknownProduct { sku: String, receipt: String },

    /// Accumulating a metric would overflow
    #[error("Arithmetic overflow in {operation} for seller {seller_id}")]
    ArithmeticOverflow {
        /// Metric being accumulated
        operation: String,
        seller_id: String,
    },

    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError { message: String },

    /// JSON parsing error occurred
    #[error("JSON parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        message: String,
    },

    /// Report could not be serialized to the output
    #[error("Output error: {message}")]
    OutputError { message: String },
}

impl ReportError {
    /// Whether the error is a referential-integrity failure
    ///
    /// These are the only errors a `Skip` reference policy may recover from.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            ReportError::UnknownSeller { .. } | ReportError::UnknownProduct { .. }
        )
    }
}

// Conversion from io::Error to ReportError
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ReportError
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return ReportError::IoError {
                message: error.to_string(),
            };
        }

        // serde_json reports line 0 when the error has no source position
        let line = Some(error.line()).filter(|&l| l > 0);

        ReportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReportError
impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::OutputError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, reason: &str) -> Self {
        ReportError::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidStrategy error
    pub fn invalid_strategy(name: &str) -> Self {
        ReportError::InvalidStrategy {
            name: name.to_string(),
        }
    }

    /// Create an UnknownSeller error
    pub fn unknown_seller(seller_id: &str, receipt: &str) -> Self {
        ReportError::UnknownSeller {
            seller_id: seller_id.to_string(),
            receipt: receipt.to_string(),
        }
    }

    /// Create an UnknownProduct error
    pub fn unknown_product(sku: &str, receipt: &str) -> Self {
        ReportError::UnknownProduct {
            sku: sku.to_string(),
            receipt: receipt.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, seller_id: &str) -> Self {
        ReportError::ArithmeticOverflow {
            operation: operation.to_string(),
            seller_id: seller_id.to_string(),
        }
    }

    /// Create an OutputError
    pub fn output(message: impl Into<String>) -> Self {
        ReportError::OutputError {
            message: message.into(),
        }
    }
}
