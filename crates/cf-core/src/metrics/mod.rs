//! Derived tables over a filtered view.
//!
//! Each table is an independent single pass over the view; none of them fail
//! on an empty view.

pub mod campaign;
pub mod channel;
pub mod cohort;
pub mod funnel;
pub(crate) mod group;
pub mod heatmap;
pub mod lag;

pub use campaign::campaign_ranking;
pub use channel::channel_rates;
pub use cohort::cohort_curve;
pub use funnel::funnel_counts;
pub use heatmap::channel_indicator_heatmap;
pub use lag::lag_histogram;

use crate::error::{FunnelError, MetricsError};
use crate::filter::{filter_events, FilteredView};
use crate::types::{Event, FilterSpec, MetricOptions, MetricsBundle};
use crate::validation::validate_metric_options;

pub fn aggregate(
    view: &FilteredView<'_>,
    options: &MetricOptions,
) -> Result<MetricsBundle, MetricsError> {
    validate_metric_options(options)?;
    Ok(MetricsBundle {
        funnel: funnel_counts(view),
        channel_rates: channel_rates(view),
        campaign_ranking: campaign_ranking(view),
        lag_histogram: lag_histogram(view, options.lag_bins)?,
        cohort_curve: cohort_curve(view),
        heatmap: channel_indicator_heatmap(view),
    })
}

pub fn compute_metrics(events: &[Event], spec: &FilterSpec) -> Result<MetricsBundle, FunnelError> {
    compute_metrics_with(events, spec, &MetricOptions::default())
}

pub fn compute_metrics_with(
    events: &[Event],
    spec: &FilterSpec,
    options: &MetricOptions,
) -> Result<MetricsBundle, FunnelError> {
    let view = filter_events(events, spec)?;
    Ok(aggregate(&view, options)?)
}
