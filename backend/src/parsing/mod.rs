//! Ingestion of distribution records.
//!
//! Records arrive either as a JSON array using the upstream column names or
//! as CSV text with a header row carrying the same names.
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse a JSON array of records
//! - [`csv_parser`]: Parse CSV text with a header row
//! - [`sources`]: Built-in sample dataset and its simulated customer copy
//! - [`standardize`]: Prompt and reply handling for free-text standardization
//!
//! # Example
//!
//! ```no_run
//! use distribution_lab::parsing::parse_records;
//!
//! let text = std::fs::read_to_string("shipments.csv").expect("Failed to read file");
//! let records = parse_records(&text).expect("Failed to parse records");
//! ```

pub mod csv_parser;
pub mod json_parser;
pub mod sources;
pub mod standardize;


pub use csv_parser::parse_records_csv_str;
pub use json_parser::parse_records_json_str;
pub use sources::{generate_fallback_records, simulate_customer_records};
pub use standardize::{parse_standardized_response, StandardizePrompt};

use crate::models::DistributionRecord;

/// Errors raised while turning raw text into records.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid JSON at '{path}': {message}")]
    Json { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("CSV header is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid quantity '{value}' on line {line}")]
    InvalidQuantity { line: usize, value: String },
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        ParseError::Csv(err.to_string())
    }
}

/// Parse pasted text, choosing the format from its first character.
///
/// Input whose trimmed form starts with `[` is parsed as JSON, anything else
/// as CSV.
pub fn parse_records(text: &str) -> Result<Vec<DistributionRecord>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if trimmed.starts_with('[') {
        parse_records_json_str(trimmed)
    } else {
        parse_records_csv_str(trimmed)
    }
}
