use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cf_core::types::DatasetSummary;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dataset", get(summary))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/dataset",
    responses((status = 200, body = DatasetSummary))
)]
pub(crate) async fn summary(State(state): State<AppState>) -> Json<DatasetSummary> {
    Json(state.analytics.summary())
}
