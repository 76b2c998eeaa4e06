#![allow(dead_code)]

use distribution_lab::api::DistributionRecord;

/// Build a record with the columns the aggregations care about.
pub fn record(
    supplier: &str,
    category: &str,
    model: &str,
    customer: &str,
    date: &str,
    quantity: i64,
) -> DistributionRecord {
    DistributionRecord {
        supplier_id: supplier.to_string(),
        category: category.to_string(),
        license_no: format!("LIC-{}", model),
        model: model.to_string(),
        lot_no: format!("L-{}", quantity),
        serial_no: format!("SN-{}-{}", date.replace('-', ""), quantity),
        customer_id: customer.to_string(),
        deliver_date: date.to_string(),
        quantity,
    }
}

/// Six shipments over two suppliers, three models and three customers.
pub fn sample_records() -> Vec<DistributionRecord> {
    vec![
        record("MedTech-A", "Cardiac", "M-200", "HOSP-100", "2023-01-05", 40),
        record("MedTech-A", "Cardiac", "M-201", "HOSP-101", "2023-01-05", 20),
        record("BioLife-B", "Ortho", "M-200", "HOSP-102", "2023-02-10", 15),
        record("BioLife-B", "Ortho", "M-202", "HOSP-100", "2023-03-01", 10),
        record("MedTech-A", "Dental", "M-200", "HOSP-101", "2023-03-01", 10),
        record("BioLife-B", "Dental", "M-201", "HOSP-102", "2023-04-12", 5),
    ]
}

/// CSV rendering of `sample_records`.
pub fn sample_csv() -> String {
    let mut csv = String::from(
        "SupplierID,Category,LicenseNo,Model,LotNO,SerialNo,CustomerID,DeliverDate,Quantity\n",
    );
    for r in sample_records() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            r.supplier_id,
            r.category,
            r.license_no,
            r.model,
            r.lot_no,
            r.serial_no,
            r.customer_id,
            r.deliver_date,
            r.quantity
        ));
    }
    csv
}
