use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cf_core::types::{
    AccountId, CampaignRank, ChannelRate, CohortPoint, ConversionStatus, DatasetSummary,
    DateRange, Event, FilterSpec, FunnelCounts, Heatmap, HeatmapCell, LagBin, LagHistogram,
    MetricsBundle,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "convfunnel", description = "Engagement-to-conversion funnel analytics"),
    paths(
        crate::routes::dataset::summary,
        crate::routes::filters::default_filter,
        crate::routes::metrics::default_metrics,
        crate::routes::metrics::compute_metrics,
        crate::routes::events::query_events
    ),
    components(schemas(
        AccountId,
        Event,
        DateRange,
        ConversionStatus,
        FilterSpec,
        DatasetSummary,
        FunnelCounts,
        ChannelRate,
        CampaignRank,
        LagBin,
        LagHistogram,
        CohortPoint,
        HeatmapCell,
        Heatmap,
        MetricsBundle
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn router() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
