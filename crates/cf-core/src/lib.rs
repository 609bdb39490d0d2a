pub mod analytics;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod sample;
pub mod store;
pub mod validation;

pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::analytics::Analytics;
pub use crate::error::FunnelError;
pub use crate::filter::{default_filter_spec, filter_events, FilteredView};
pub use crate::loader::EventLoader;
pub use crate::metrics::{compute_metrics, compute_metrics_with};
pub use crate::store::RecordStore;
