use std::collections::HashMap;

use super::ParseError;
use crate::models::{DistributionRecord, RecordField};

/// Header position of every record column.
struct ColumnIndex(HashMap<RecordField, usize>);

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ParseError> {
        let mut positions = HashMap::new();
        for field in RecordField::ALL {
            let name = field.column_name();
            let idx = headers
                .iter()
                .position(|h| h == name)
                .ok_or(ParseError::MissingColumn(name))?;
            positions.insert(field, idx);
        }
        Ok(Self(positions))
    }

    fn get<'r>(&self, row: &'r csv::StringRecord, field: RecordField) -> &'r str {
        self.0
            .get(&field)
            .and_then(|&idx| row.get(idx))
            .unwrap_or("")
    }
}

/// Parse CSV text with a header row naming the record columns.
///
/// Column order is free and extra columns are ignored. Cells are trimmed;
/// short rows leave missing cells empty. `Quantity` must parse as an integer.
pub fn parse_records_csv_str(csv_str: &str) -> Result<Vec<DistributionRecord>, ParseError> {
    if csv_str.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_str.as_bytes());

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = result?;
        // Quoted cells may span lines, so ask the reader where the row began.
        let line = row
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(row_idx + 2);

        let quantity_text = columns.get(&row, RecordField::Quantity);
        let quantity = quantity_text
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidQuantity {
                line,
                value: quantity_text.to_string(),
            })?;

        records.push(DistributionRecord {
            supplier_id: columns.get(&row, RecordField::SupplierId).to_string(),
            category: columns.get(&row, RecordField::Category).to_string(),
            license_no: columns.get(&row, RecordField::LicenseNo).to_string(),
            model: columns.get(&row, RecordField::Model).to_string(),
            lot_no: columns.get(&row, RecordField::LotNo).to_string(),
            serial_no: columns.get(&row, RecordField::SerialNo).to_string(),
            customer_id: columns.get(&row, RecordField::CustomerId).to_string(),
            deliver_date: columns.get(&row, RecordField::DeliverDate).to_string(),
            quantity,
        });
    }

    log::debug!("Parsed {} records from CSV", records.len());
    Ok(records)
}
