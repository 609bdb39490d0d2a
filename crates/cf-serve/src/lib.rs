pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use cf_core::{Analytics, FunnelError};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub analytics: Arc<Analytics>,
}

impl AppState {
    pub fn new(analytics: Analytics) -> Self {
        Self {
            analytics: Arc::new(analytics),
        }
    }

    /// Runs `f` against the shared dataset on the blocking pool.
    pub async fn with_analytics<T, F>(&self, f: F) -> Result<T, FunnelError>
    where
        F: FnOnce(&Analytics) -> Result<T, FunnelError> + Send + 'static,
        T: Send + 'static,
    {
        let analytics = Arc::clone(&self.analytics);
        tokio::task::spawn_blocking(move || f(&analytics))
            .await
            .map_err(|err| FunnelError::Internal {
                message: err.to_string(),
            })?
    }
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, events = state.analytics.store().len(), "listening");
    axum::serve(listener, app(state)).await
}
