use axum::{Router, http::StatusCode, routing::get};

pub const LIVENESS_PATH: &str = "/healthz";
pub const READINESS_PATH: &str = "/readyz";

/// Liveness and readiness probes, mounted at the root of any router.
/// The stub owns no backing services, so ready means listening.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(LIVENESS_PATH, get(probe_ok))
        .route(READINESS_PATH, get(probe_ok))
}

async fn probe_ok() -> StatusCode {
    StatusCode::OK
}
