use crate::types::{DatasetSummary, Event};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable event dataset loaded once at startup.
///
/// Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    events: Arc<[Event]>,
}

impl RecordStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn distinct_channels(&self) -> Vec<String> {
        distinct_in_order(&self.events, |event| &event.channel)
    }

    pub fn distinct_campaigns(&self) -> Vec<String> {
        distinct_in_order(&self.events, |event| &event.campaign)
    }

    pub fn distinct_indicators(&self) -> Vec<String> {
        distinct_in_order(&self.events, |event| &event.business_indicator)
    }

    pub fn sent_at_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        sent_at_bounds(&self.events)
    }

    pub fn summary(&self) -> DatasetSummary {
        let bounds = self.sent_at_bounds();
        DatasetSummary {
            event_count: self.len(),
            channels: self.distinct_channels(),
            campaigns: self.distinct_campaigns(),
            indicators: self.distinct_indicators(),
            first_sent_at: bounds.map(|(first, _)| first),
            last_sent_at: bounds.map(|(_, last)| last),
        }
    }
}

impl From<Vec<Event>> for RecordStore {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

pub(crate) fn distinct_in_order<F>(events: &[Event], field: F) -> Vec<String>
where
    F: Fn(&Event) -> &String,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for event in events {
        let value = field(event);
        if seen.insert(value.as_str()) {
            values.push(value.clone());
        }
    }
    values
}

pub(crate) fn sent_at_bounds(events: &[Event]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = events.iter().map(|event| event.sent_at).min()?;
    let last = events.iter().map(|event| event.sent_at).max()?;
    Some((first, last))
}
