use serde::{Deserialize, Deserializer};

use super::ParseError;
use crate::models::DistributionRecord;

/// Accepts either a string or a number and keeps its text form.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(i) => i.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}

/// Accepts an integer, an integral float (`10.0`) or a numeric string for `Quantity`.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum QuantityValue {
        String(String),
        Int(i64),
        Float(f64),
    }

    match QuantityValue::deserialize(deserializer)? {
        QuantityValue::String(s) => s.trim().parse::<i64>().map_err(|_| {
            D::Error::custom(format!("Quantity must be an integer, got '{}'", s))
        }),
        QuantityValue::Int(i) => Ok(i),
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        QuantityValue::Float(f)
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
        {
            Ok(f as i64)
        }
        QuantityValue::Float(f) => Err(D::Error::custom(format!(
            "Quantity must be a whole number, got {}",
            f
        ))),
    }
}

/// Raw JSON structure as pasted by the user
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "SupplierID", deserialize_with = "deserialize_text")]
    supplier_id: String,
    #[serde(rename = "Category", deserialize_with = "deserialize_text")]
    category: String,
    #[serde(rename = "LicenseNo", deserialize_with = "deserialize_text")]
    license_no: String,
    #[serde(rename = "Model", deserialize_with = "deserialize_text")]
    model: String,
    #[serde(rename = "LotNO", deserialize_with = "deserialize_text")]
    lot_no: String,
    #[serde(rename = "SerialNo", deserialize_with = "deserialize_text")]
    serial_no: String,
    #[serde(rename = "CustomerID", deserialize_with = "deserialize_text")]
    customer_id: String,
    #[serde(rename = "DeliverDate", deserialize_with = "deserialize_text")]
    deliver_date: String,
    #[serde(rename = "Quantity", deserialize_with = "deserialize_quantity")]
    quantity: i64,
}

impl From<RawRecord> for DistributionRecord {
    fn from(raw: RawRecord) -> Self {
        DistributionRecord {
            supplier_id: raw.supplier_id,
            category: raw.category,
            license_no: raw.license_no,
            model: raw.model,
            lot_no: raw.lot_no,
            serial_no: raw.serial_no,
            customer_id: raw.customer_id,
            deliver_date: raw.deliver_date,
            quantity: raw.quantity,
        }
    }
}

/// Parse a JSON array of records.
///
/// Every column is required. Errors carry the JSON path of the offending
/// value, e.g. `[3].Quantity`.
pub fn parse_records_json_str(json_str: &str) -> Result<Vec<DistributionRecord>, ParseError> {
    if json_str.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: Vec<RawRecord> =
        serde_path_to_error::deserialize(deserializer).map_err(|err| ParseError::Json {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        })?;

    log::debug!("Parsed {} records from JSON", raw.len());
    Ok(raw.into_iter().map(DistributionRecord::from).collect())
}
