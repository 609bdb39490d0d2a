pub mod dataset;
pub mod enums;
pub mod event;
pub mod filter;
pub mod ids;
pub mod metrics;

pub use dataset::DatasetSummary;
pub use enums::{ConversionStatus, DataFormat, ValidationPolicy};
pub use event::Event;
pub use filter::{DateRange, FilterSpec};
pub use ids::{AccountId, IdError};
pub use metrics::{
    CampaignRank, ChannelRate, CohortPoint, FunnelCounts, Heatmap, HeatmapCell, LagBin,
    LagHistogram, MetricOptions, MetricsBundle,
};
