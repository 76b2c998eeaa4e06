//! Domain models: distribution records and the filter specification.

pub mod filter;
pub mod record;

pub use filter::{
    initial_filters, FilterScope, FilterState, TimeZoneRange, MAX_GMT_OFFSET, MIN_GMT_OFFSET,
};
pub use record::{DistributionRecord, RecordField};
