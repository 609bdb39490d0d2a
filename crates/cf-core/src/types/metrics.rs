use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_LAG_BINS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct FunnelCounts {
    pub impacted: usize,
    pub engaged: usize,
    pub converted: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChannelRate {
    pub channel: String,
    pub total: usize,
    pub converted: usize,
    /// Percentage in `[0, 100]`.
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignRank {
    pub campaign: String,
    pub channel: String,
    pub total: usize,
    pub engaged_count: usize,
    pub converted_count: usize,
    /// Converted per engaged, as a percentage. Exceeds 100 only when the
    /// input has conversions without engagement.
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LagBin {
    pub low: f64,
    pub high: f64,
    /// True only for the last bin, which includes its upper edge.
    pub upper_inclusive: bool,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct LagHistogram {
    pub bins: Vec<LagBin>,
    pub sample_count: usize,
    pub negative_count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl LagHistogram {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CohortPoint {
    pub days_after_send: i64,
    /// Distinct accounts converting at this offset.
    pub count: usize,
    pub cumulative_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeatmapCell {
    pub channel: String,
    pub business_indicator: String,
    pub total: usize,
    pub converted: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Heatmap {
    pub channels: Vec<String>,
    pub indicators: Vec<String>,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricsBundle {
    pub funnel: FunnelCounts,
    pub channel_rates: Vec<ChannelRate>,
    pub campaign_ranking: Vec<CampaignRank>,
    pub lag_histogram: LagHistogram,
    pub cohort_curve: Vec<CohortPoint>,
    pub heatmap: Heatmap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricOptions {
    pub lag_bins: usize,
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            lag_bins: DEFAULT_LAG_BINS,
        }
    }
}
