use crate::error::FilterError;
use crate::store::{distinct_in_order, sent_at_bounds};
use crate::types::{ConversionStatus, DateRange, Event, FilterSpec};
use crate::validation::validate_filter_spec;

/// Events retained by a filter, borrowed from the store in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    events: Vec<&'a Event>,
}

impl<'a> FilteredView<'a> {
    /// A view over every event, without filtering.
    pub fn all(events: &'a [Event]) -> Self {
        Self {
            events: events.iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.events.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_events(&self) -> Vec<Event> {
        self.iter().cloned().collect()
    }
}

pub fn matches(spec: &FilterSpec, event: &Event) -> bool {
    spec.channels.contains(&event.channel)
        && spec.campaigns.contains(&event.campaign)
        && spec.indicators.contains(&event.business_indicator)
        && spec.date_range.contains(event.sent_at)
        && spec.conversion_status.matches(event.converted)
}

pub fn filter_events<'a, I>(events: I, spec: &FilterSpec) -> Result<FilteredView<'a>, FilterError>
where
    I: IntoIterator<Item = &'a Event>,
{
    validate_filter_spec(spec)?;
    Ok(FilteredView {
        events: events
            .into_iter()
            .filter(|event| matches(spec, event))
            .collect(),
    })
}

/// The "select everything observed" spec used to seed filter controls.
///
/// With no events the date range is unbounded.
pub fn default_filter_spec(events: &[Event]) -> FilterSpec {
    let date_range = sent_at_bounds(events)
        .map(|(start, end)| DateRange::new(start, end))
        .unwrap_or_else(DateRange::unbounded);
    FilterSpec {
        channels: distinct_in_order(events, |event| &event.channel)
            .into_iter()
            .collect(),
        campaigns: distinct_in_order(events, |event| &event.campaign)
            .into_iter()
            .collect(),
        indicators: distinct_in_order(events, |event| &event.business_indicator)
            .into_iter()
            .collect(),
        date_range,
        conversion_status: ConversionStatus::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{base_time, three_event_scenario, EventBuilder};
    use chrono::Duration;
    use std::collections::BTreeSet;

    fn mixed_events() -> Vec<Event> {
        vec![
            EventBuilder::new("a").engaged(0).converted(1).build(),
            EventBuilder::new("b").channel("Push").campaign("Campaign B").build(),
            EventBuilder::new("c")
                .channel("WhatsApp")
                .indicator("Account Opening")
                .sent_day(3)
                .engaged(1)
                .build(),
            EventBuilder::new("d")
                .channel("Push")
                .sent_day(6)
                .engaged(0)
                .converted(4)
                .build(),
        ]
    }

    fn ids(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().map(|event| event.id.to_string()).collect()
    }

    #[test]
    fn test_default_spec_is_identity() {
        let events = mixed_events();
        let spec = default_filter_spec(&events);
        let view = filter_events(&events, &spec).unwrap();
        assert_eq!(view.to_events(), events);
    }

    #[test]
    fn test_empty_channel_set_excludes_all() {
        let events = mixed_events();
        let mut spec = default_filter_spec(&events);
        spec.channels = BTreeSet::new();
        let view = filter_events(&events, &spec).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = mixed_events();
        let mut spec = default_filter_spec(&events);
        spec.channels.remove("Email");
        spec.conversion_status = ConversionStatus::NotConvertedOnly;
        let once = filter_events(&events, &spec).unwrap();
        let twice = filter_events(once.iter(), &spec).unwrap();
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["b", "c"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let events = mixed_events();
        let mut spec = default_filter_spec(&events);
        spec.channels = ["Push".to_string()].into_iter().collect();
        let view = filter_events(&events, &spec).unwrap();
        assert_eq!(ids(&view), vec!["b", "d"]);
    }

    #[test]
    fn test_conversion_status_filters() {
        let events = mixed_events();
        let mut spec = default_filter_spec(&events);
        spec.conversion_status = ConversionStatus::ConvertedOnly;
        let view = filter_events(&events, &spec).unwrap();
        assert_eq!(ids(&view), vec!["a", "d"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let events = mixed_events();
        let mut spec = default_filter_spec(&events);
        spec.date_range = DateRange::new(base_time(), base_time() + Duration::days(3));
        let view = filter_events(&events, &spec).unwrap();
        assert_eq!(ids(&view), vec!["a", "b", "c"]);

        spec.date_range = DateRange::new(
            base_time() + Duration::days(3),
            base_time() + Duration::days(3),
        );
        let view = filter_events(&events, &spec).unwrap();
        assert_eq!(ids(&view), vec!["c"]);
    }

    #[test]
    fn test_inverted_range_is_rejected_not_swapped() {
        let events = mixed_events();
        let mut spec = default_filter_spec(&events);
        spec.date_range = DateRange::new(base_time() + Duration::days(6), base_time());
        assert!(matches!(
            filter_events(&events, &spec),
            Err(FilterError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_empty_input_yields_empty_view() {
        let spec = default_filter_spec(&[]);
        assert_eq!(spec.date_range, DateRange::unbounded());
        let view = filter_events(&[], &spec).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_default_spec_lists_observed_values() {
        let events = three_event_scenario();
        let spec = default_filter_spec(&events);
        let expected: BTreeSet<String> = ["Email".to_string(), "Push".to_string()].into();
        assert_eq!(spec.channels, expected);
        assert_eq!(spec.conversion_status, ConversionStatus::Any);
    }
}
