use crate::error::FunnelError;
use crate::filter::{default_filter_spec, filter_events};
use crate::loader::EventLoader;
use crate::metrics::aggregate;
use crate::store::RecordStore;
use crate::types::{DatasetSummary, Event, FilterSpec, MetricOptions, MetricsBundle};
use crate::validation::validate_metric_options;
use std::time::Instant;

/// Entry point for callers that hold one dataset and evaluate many filters
/// against it.
#[derive(Debug, Clone)]
pub struct Analytics {
    store: RecordStore,
    options: MetricOptions,
}

impl Analytics {
    pub fn new(store: RecordStore, options: MetricOptions) -> Result<Self, FunnelError> {
        validate_metric_options(&options)?;
        Ok(Self { store, options })
    }

    pub fn from_loader(
        loader: &dyn EventLoader,
        options: MetricOptions,
    ) -> Result<Self, FunnelError> {
        let events = loader.load()?;
        Self::new(RecordStore::new(events), options)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn options(&self) -> MetricOptions {
        self.options
    }

    pub fn summary(&self) -> DatasetSummary {
        self.store.summary()
    }

    pub fn default_filter(&self) -> FilterSpec {
        default_filter_spec(self.store.events())
    }

    pub fn compute(&self, spec: &FilterSpec) -> Result<MetricsBundle, FunnelError> {
        let started = Instant::now();
        let view = filter_events(self.store.events(), spec)?;
        let bundle = aggregate(&view, &self.options)?;
        tracing::debug!(
            matched = view.len(),
            total = self.store.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "computed metrics"
        );
        Ok(bundle)
    }

    pub fn compute_default(&self) -> Result<MetricsBundle, FunnelError> {
        self.compute(&self.default_filter())
    }

    pub fn query(&self, spec: &FilterSpec) -> Result<Vec<Event>, FunnelError> {
        Ok(filter_events(self.store.events(), spec)?.to_events())
    }
}
