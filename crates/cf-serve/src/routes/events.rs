use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use cf_core::types::{Event, FilterSpec};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events/query", post(query_events))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/events/query",
    request_body = FilterSpec,
    responses((status = 200, body = Vec<Event>), (status = 400, description = "Invalid filter"))
)]
pub(crate) async fn query_events(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(spec): Json<FilterSpec>,
) -> Response {
    match state
        .with_analytics(move |analytics| analytics.query(&spec))
        .await
    {
        Ok(events) => Json(events).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
