use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cf_core::types::FilterSpec;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/filters/default", get(default_filter))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/filters/default",
    responses((status = 200, body = FilterSpec))
)]
pub(crate) async fn default_filter(State(state): State<AppState>) -> Json<FilterSpec> {
    Json(state.analytics.default_filter())
}
