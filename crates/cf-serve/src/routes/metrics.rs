use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use cf_core::types::{FilterSpec, MetricsBundle};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(default_metrics).post(compute_metrics))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/metrics",
    responses((status = 200, body = MetricsBundle))
)]
pub(crate) async fn default_metrics(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    match state
        .with_analytics(|analytics| analytics.compute_default())
        .await
    {
        Ok(bundle) => Json(bundle).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/metrics",
    request_body = FilterSpec,
    responses((status = 200, body = MetricsBundle), (status = 400, description = "Invalid filter"))
)]
pub(crate) async fn compute_metrics(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(spec): Json<FilterSpec>,
) -> Response {
    match state
        .with_analytics(move |analytics| analytics.compute(&spec))
        .await
    {
        Ok(bundle) => Json(bundle).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
