//! Free-text standardization handoff.
//!
//! Raw, loosely structured input is sent to an external text-generation
//! service with instructions to emit records in the upstream column schema.
//! This module builds that prompt and turns the service's reply back into
//! records. The call itself happens outside the crate.

use super::json_parser::parse_records_json_str;
use super::ParseError;
use crate::models::DistributionRecord;

/// Characters of raw input forwarded to the generator.
pub const MAX_RAW_CHARS: usize = 10_000;

const SCHEMA: &str = r#"{
  "SupplierID": string,
  "Category": string,
  "LicenseNo": string,
  "Model": string,
  "LotNO": string,
  "SerialNo": string,
  "CustomerID": string,
  "DeliverDate": string (YYYY-MM-DD),
  "Quantity": number
}"#;

/// Prompt asking the generator to rewrite raw input as record JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizePrompt {
    pub text: String,
    /// Whether the raw input was cut at [`MAX_RAW_CHARS`].
    pub truncated: bool,
}

/// First `max_chars` characters of `raw`, cut on a char boundary.
fn truncate_chars(raw: &str, max_chars: usize) -> (&str, bool) {
    match raw.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&raw[..byte_idx], true),
        None => (raw, false),
    }
}

impl StandardizePrompt {
    pub fn from_raw(raw: &str) -> Self {
        let (excerpt, truncated) = truncate_chars(raw, MAX_RAW_CHARS);
        if truncated {
            log::debug!(
                "Standardization input truncated to {} characters",
                MAX_RAW_CHARS
            );
        }

        let text = format!(
            "You are a Data Engineering Agent. Transform the following raw input data into \
             a JSON array of objects strictly following this schema:\n\
             {}\n\
             \n\
             If the input is missing fields, infer reasonable defaults or mark as \"UNKNOWN\".\n\
             If the input is unstructured, extract the relevant entities.\n\
             Return ONLY valid JSON. Do not use Markdown formatting.\n\
             \n\
             Raw Data:\n\
             {}\n",
            SCHEMA, excerpt
        );

        Self { text, truncated }
    }
}

/// Strip Markdown code fences the generator adds despite being told not to.
fn strip_code_fences(response: &str) -> String {
    response.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a generator reply into records.
///
/// Code fences are removed first. A reply that is empty after cleanup yields
/// no records; anything else must be a JSON array in the record schema.
pub fn parse_standardized_response(
    response: &str,
) -> Result<Vec<DistributionRecord>, ParseError> {
    let cleaned = strip_code_fences(response);
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }
    parse_records_json_str(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"[{"SupplierID": "MedTech-A", "Category": "Cardiac",
        "LicenseNo": "LIC-1000", "Model": "M-200", "LotNO": "L-5000",
        "SerialNo": "SN-1", "CustomerID": "HOSP-100",
        "DeliverDate": "2023-01-01", "Quantity": 4}]"#;

    #[test]
    fn test_prompt_carries_schema_and_input() {
        let prompt = StandardizePrompt::from_raw("MedTech-A shipped 4 units of M-200 to HOSP-100");
        assert!(!prompt.truncated);
        assert!(prompt.text.contains("\"LotNO\": string"));
        assert!(prompt.text.contains("\"Quantity\": number"));
        assert!(prompt
            .text
            .ends_with("Raw Data:\nMedTech-A shipped 4 units of M-200 to HOSP-100\n"));
    }

    #[test]
    fn test_prompt_truncates_long_input() {
        let raw = format!("{}{}", "a".repeat(MAX_RAW_CHARS), "TAIL");
        let prompt = StandardizePrompt::from_raw(&raw);
        assert!(prompt.truncated);
        assert!(!prompt.text.contains("TAIL"));
        assert!(prompt.text.contains(&"a".repeat(MAX_RAW_CHARS)));

        let exact = "b".repeat(MAX_RAW_CHARS);
        assert!(!StandardizePrompt::from_raw(&exact).truncated);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let raw = "é".repeat(MAX_RAW_CHARS + 5);
        let (excerpt, truncated) = truncate_chars(&raw, MAX_RAW_CHARS);
        assert!(truncated);
        assert_eq!(excerpt.chars().count(), MAX_RAW_CHARS);
    }

    #[test]
    fn test_fenced_reply_is_parsed() {
        let fenced = format!("```json\n{}\n```", REPLY);
        let records = parse_standardized_response(&fenced).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_id, "HOSP-100");
        assert_eq!(records[0].quantity, 4);

        let bare_fence = format!("```\n{}\n```", REPLY);
        assert_eq!(parse_standardized_response(&bare_fence).unwrap(), records);
    }

    #[test]
    fn test_empty_reply_yields_no_records() {
        assert!(parse_standardized_response("").unwrap().is_empty());
        assert!(parse_standardized_response("```json\n```").unwrap().is_empty());
    }

    #[test]
    fn test_prose_reply_is_an_error() {
        assert!(matches!(
            parse_standardized_response("Sorry, I cannot help with that."),
            Err(ParseError::Json { .. })
        ));
    }
}
