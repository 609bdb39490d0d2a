use axum::http::StatusCode;
use axum::Json;
use cf_core::error::{ConfigError, EventError, FilterError, FunnelError, LoadError, MetricsError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

pub fn map_error(
    err: &FunnelError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        FunnelError::Filter(filter) => map_filter_error(filter),
        FunnelError::Metrics(metrics) => map_metrics_error(metrics),
        FunnelError::Event(event) => map_event_error(event),
        FunnelError::Load(load) => map_load_error(load),
        FunnelError::Config(config) => map_config_error(config),
        FunnelError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            message.clone(),
        ),
    };
    if status.is_server_error() {
        tracing::error!(code, %message, "request failed");
    }

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn map_filter_error(err: &FilterError) -> (StatusCode, &'static str, String) {
    match err {
        FilterError::InvalidDateRange { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
    }
}

fn map_metrics_error(err: &MetricsError) -> (StatusCode, &'static str, String) {
    match err {
        MetricsError::InvalidBinCount { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
    }
}

fn map_event_error(err: &EventError) -> (StatusCode, &'static str, String) {
    match err {
        EventError::Malformed { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "malformed_event",
            err.to_string(),
        ),
    }
}

fn map_load_error(err: &LoadError) -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "load_failed",
        err.to_string(),
    )
}

fn map_config_error(err: &ConfigError) -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "config_error",
        err.to_string(),
    )
}
