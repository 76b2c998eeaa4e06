use crate::api::{DistributionRecord, PreviewData};

pub const DEFAULT_PREVIEW_ROWS: usize = 20;
pub const MIN_PREVIEW_ROWS: usize = 5;
pub const MAX_PREVIEW_ROWS: usize = 50;

/// First rows of a record set for the table preview.
///
/// `requested` is clamped into `[min_rows, max_rows]`; `None` uses `default_rows`.
pub fn compute_preview(
    records: &[DistributionRecord],
    requested: Option<usize>,
    default_rows: usize,
    min_rows: usize,
    max_rows: usize,
) -> PreviewData {
    let row_limit = requested.unwrap_or(default_rows).clamp(min_rows, max_rows);

    PreviewData {
        rows: records.iter().take(row_limit).cloned().collect(),
        row_limit,
        total_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<DistributionRecord> {
        (0..n)
            .map(|i| DistributionRecord {
                serial_no: format!("SN-{}", i),
                quantity: i as i64,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_preview_default_rows() {
        let data = compute_preview(&records(100), None, 20, 5, 50);
        assert_eq!(data.row_limit, 20);
        assert_eq!(data.rows.len(), 20);
        assert_eq!(data.total_count, 100);
    }

    #[test]
    fn test_preview_clamps_request() {
        let data = compute_preview(&records(100), Some(500), 20, 5, 50);
        assert_eq!(data.row_limit, 50);
        let data = compute_preview(&records(100), Some(1), 20, 5, 50);
        assert_eq!(data.row_limit, 5);
        assert_eq!(data.rows[4].serial_no, "SN-4");
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        let data = compute_preview(&records(3), None, 20, 5, 50);
        assert_eq!(data.rows.len(), 3);
        assert_eq!(data.row_limit, 20);
    }
}
