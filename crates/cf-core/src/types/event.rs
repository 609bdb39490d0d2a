use crate::types::ids::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const SECONDS_PER_DAY: i64 = 86_400;

/// One outreach attempt and what came of it.
///
/// `engaged_at` is expected to be present exactly when `engaged` is true, and
/// likewise for `converted_at`. Loaders enforce or repair that; everything
/// downstream treats a missing timestamp as "no date-dependent value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: AccountId,
    pub channel: String,
    pub campaign: String,
    pub business_indicator: String,
    pub sent_at: DateTime<Utc>,
    pub engaged: bool,
    #[serde(default)]
    pub engaged_at: Option<DateTime<Utc>>,
    pub converted: bool,
    #[serde(default)]
    pub converted_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Whole days from engagement to conversion. Negative when the conversion
    /// was recorded before the engagement.
    pub fn lag_days(&self) -> Option<i64> {
        if !(self.engaged && self.converted) {
            return None;
        }
        Some(whole_days(self.engaged_at?, self.converted_at?))
    }

    /// Whole days from send to conversion.
    pub fn days_after_send(&self) -> Option<i64> {
        if !self.converted {
            return None;
        }
        Some(whole_days(self.sent_at, self.converted_at?))
    }
}

/// Elapsed time floored to whole days, so -1h is day -1 and 36h is day 1.
pub fn whole_days(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_seconds().div_euclid(SECONDS_PER_DAY)
}
