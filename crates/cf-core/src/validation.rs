use crate::error::{EventError, FilterError, MetricsError};
use crate::types::{Event, FilterSpec, MetricOptions};

pub fn validate_event(event: &Event) -> Result<(), EventError> {
    match event_violations(event).into_iter().next() {
        Some(reason) => Err(EventError::Malformed {
            id: event.id.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Brings an event back in line with the flag/timestamp invariant.
///
/// A flag without its timestamp keeps the flag and leaves the timestamp
/// empty; a timestamp without its flag is dropped. Returns what was changed.
pub fn repair_event(event: &mut Event) -> Vec<&'static str> {
    let violations = event_violations(event);
    if !event.engaged {
        event.engaged_at = None;
    }
    if !event.converted {
        event.converted_at = None;
    }
    violations
}

fn event_violations(event: &Event) -> Vec<&'static str> {
    let mut violations = Vec::new();
    match (event.engaged, event.engaged_at.is_some()) {
        (true, false) => violations.push("engaged without engaged_at"),
        (false, true) => violations.push("engaged_at set on a non-engaged event"),
        _ => {}
    }
    match (event.converted, event.converted_at.is_some()) {
        (true, false) => violations.push("converted without converted_at"),
        (false, true) => violations.push("converted_at set on a non-converted event"),
        _ => {}
    }
    violations
}

pub fn validate_filter_spec(spec: &FilterSpec) -> Result<(), FilterError> {
    let range = spec.date_range;
    if range.start > range.end {
        return Err(FilterError::InvalidDateRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

pub fn validate_metric_options(options: &MetricOptions) -> Result<(), MetricsError> {
    if options.lag_bins == 0 {
        return Err(MetricsError::InvalidBinCount {
            bins: options.lag_bins,
        });
    }
    Ok(())
}
