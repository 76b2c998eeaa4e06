//! Filter specification applied to a record set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowest synthetic GMT offset.
pub const MIN_GMT_OFFSET: i32 = -12;
/// Highest synthetic GMT offset.
pub const MAX_GMT_OFFSET: i32 = 12;

/// Closed interval `[lo, hi]` over synthetic GMT offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneRange {
    pub lo: i32,
    pub hi: i32,
}

impl TimeZoneRange {
    pub fn new(lo: i32, hi: i32) -> Result<Self, String> {
        if lo > hi {
            return Err(format!("Time zone range is inverted: {} > {}", lo, hi));
        }
        if lo < MIN_GMT_OFFSET || hi > MAX_GMT_OFFSET {
            return Err(format!(
                "Time zone range must lie within [{}, {}]",
                MIN_GMT_OFFSET, MAX_GMT_OFFSET
            ));
        }
        Ok(Self { lo, hi })
    }

    /// The whole offset domain.
    pub fn full() -> Self {
        Self {
            lo: MIN_GMT_OFFSET,
            hi: MAX_GMT_OFFSET,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, offset: i32) -> bool {
        offset >= self.lo && offset <= self.hi
    }

    pub fn is_full(&self) -> bool {
        self.lo <= MIN_GMT_OFFSET && self.hi >= MAX_GMT_OFFSET
    }
}

impl Default for TimeZoneRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Which rule set a filter pass evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterScope {
    /// Every clause of the filter state.
    #[default]
    Full,
    /// Supplier and model exact matches only.
    Reduced,
}

/// User-chosen restrictions over a record set.
///
/// An empty allowed-set means "no restriction" for that field, and an empty
/// query string means the corresponding substring clause is skipped. The
/// default value is therefore the fully-unrestricted filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Case-insensitive substring matched against every field value.
    pub search_query: String,
    pub supplier_ids: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub license_nos: BTreeSet<String>,
    pub model_ids: BTreeSet<String>,
    pub customer_ids: BTreeSet<String>,
    /// Case-insensitive substring of `LotNO`.
    pub lot_query: String,
    /// Case-insensitive substring of `SerialNo`.
    pub serial_query: String,
    pub time_zone_range: TimeZoneRange,
}

/// The filter state a fresh session starts with.
pub fn initial_filters() -> FilterState {
    FilterState::default()
}

fn to_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl FilterState {
    pub fn with_search<S: Into<String>>(mut self, query: S) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_suppliers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supplier_ids = to_set(values);
        self
    }

    pub fn with_categories<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = to_set(values);
        self
    }

    pub fn with_licenses<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.license_nos = to_set(values);
        self
    }

    pub fn with_models<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_ids = to_set(values);
        self
    }

    pub fn with_customers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customer_ids = to_set(values);
        self
    }

    pub fn with_lot_query<S: Into<String>>(mut self, query: S) -> Self {
        self.lot_query = query.into();
        self
    }

    pub fn with_serial_query<S: Into<String>>(mut self, query: S) -> Self {
        self.serial_query = query.into();
        self
    }

    pub fn with_time_zone_range(mut self, range: TimeZoneRange) -> Self {
        self.time_zone_range = range;
        self
    }

    /// True when no clause can reject a record.
    pub fn is_unrestricted(&self) -> bool {
        self.search_query.is_empty()
            && self.supplier_ids.is_empty()
            && self.categories.is_empty()
            && self.license_nos.is_empty()
            && self.model_ids.is_empty()
            && self.customer_ids.is_empty()
            && self.lot_query.is_empty()
            && self.serial_query.is_empty()
            && self.time_zone_range.is_full()
    }
}
