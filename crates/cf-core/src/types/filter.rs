use crate::types::enums::ConversionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

/// Inclusive bounds on `sent_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Selection the filter engine applies to the record store.
///
/// An empty categorical set selects nothing. "Everything" is spelled out by
/// listing every observed value, see [`crate::filter::default_filter_spec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterSpec {
    pub channels: BTreeSet<String>,
    pub campaigns: BTreeSet<String>,
    pub indicators: BTreeSet<String>,
    pub date_range: DateRange,
    pub conversion_status: ConversionStatus,
}
