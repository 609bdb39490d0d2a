use crate::filter::FilteredView;
use crate::types::CohortPoint;
use std::collections::{BTreeMap, HashSet};

/// Cumulative distinct converters by days since send, ascending by offset.
///
/// Accounts are de-duplicated within an offset only; an account converting
/// at two different offsets contributes to both.
pub fn cohort_curve(view: &FilteredView<'_>) -> Vec<CohortPoint> {
    let mut by_offset: BTreeMap<i64, HashSet<&str>> = BTreeMap::new();
    for event in view.iter().filter(|event| event.converted) {
        if let Some(offset) = event.days_after_send() {
            by_offset
                .entry(offset)
                .or_default()
                .insert(event.id.as_str());
        }
    }

    let mut cumulative = 0;
    by_offset
        .into_iter()
        .map(|(days_after_send, accounts)| {
            cumulative += accounts.len();
            CohortPoint {
                days_after_send,
                count: accounts.len(),
                cumulative_count: cumulative,
            }
        })
        .collect()
}
