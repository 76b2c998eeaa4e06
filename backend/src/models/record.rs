//! Distribution record model.
//!
//! One record is one shipment event: which supplier shipped which model under
//! which license, lot and serial, to which customer, on which date and in what
//! quantity. Records are plain values: they carry no identity and are never
//! mutated after ingestion. Transformations always build new records.

use serde::{Deserialize, Serialize};

use crate::services::time_zone::derive_time_zone;

/// A single medical-device distribution (shipment) record.
///
/// Field names serialize with the exact keys used by the upstream datasets
/// (`SupplierID`, `LotNO`, ...), so pasted JSON round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DistributionRecord {
    #[serde(rename = "SupplierID")]
    pub supplier_id: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "LicenseNo")]
    pub license_no: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "LotNO")]
    pub lot_no: String,
    #[serde(rename = "SerialNo")]
    pub serial_no: String,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    /// Delivery date as supplied. No format normalization is applied.
    #[serde(rename = "DeliverDate")]
    pub deliver_date: String,
    /// Shipped quantity. Expected to be non-negative but not enforced.
    #[serde(rename = "Quantity")]
    pub quantity: i64,
}

/// The record columns, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    SupplierId,
    Category,
    LicenseNo,
    Model,
    LotNo,
    SerialNo,
    CustomerId,
    DeliverDate,
    Quantity,
}

impl RecordField {
    pub const ALL: [RecordField; 9] = [
        RecordField::SupplierId,
        RecordField::Category,
        RecordField::LicenseNo,
        RecordField::Model,
        RecordField::LotNo,
        RecordField::SerialNo,
        RecordField::CustomerId,
        RecordField::DeliverDate,
        RecordField::Quantity,
    ];

    /// Column name as it appears in JSON keys and CSV headers.
    pub fn column_name(&self) -> &'static str {
        match self {
            RecordField::SupplierId => "SupplierID",
            RecordField::Category => "Category",
            RecordField::LicenseNo => "LicenseNo",
            RecordField::Model => "Model",
            RecordField::LotNo => "LotNO",
            RecordField::SerialNo => "SerialNo",
            RecordField::CustomerId => "CustomerID",
            RecordField::DeliverDate => "DeliverDate",
            RecordField::Quantity => "Quantity",
        }
    }
}

impl DistributionRecord {
    /// String form of one field. `Quantity` renders in decimal.
    pub fn field_value(&self, field: RecordField) -> String {
        match field {
            RecordField::SupplierId => self.supplier_id.clone(),
            RecordField::Category => self.category.clone(),
            RecordField::LicenseNo => self.license_no.clone(),
            RecordField::Model => self.model.clone(),
            RecordField::LotNo => self.lot_no.clone(),
            RecordField::SerialNo => self.serial_no.clone(),
            RecordField::CustomerId => self.customer_id.clone(),
            RecordField::DeliverDate => self.deliver_date.clone(),
            RecordField::Quantity => self.quantity.to_string(),
        }
    }

    /// All field values in canonical column order.
    pub fn field_values(&self) -> impl Iterator<Item = String> + '_ {
        RecordField::ALL.iter().map(move |f| self.field_value(*f))
    }

    /// Synthetic GMT offset derived from the customer identifier.
    ///
    /// Recomputed on every call; never stored.
    pub fn gmt_offset(&self) -> i32 {
        derive_time_zone(&self.customer_id)
    }
}
