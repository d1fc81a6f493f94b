use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use syncstub_core::health::health_routes;
use syncstub_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    fallback::not_found,
    manifest::{get_manifest, get_version_check},
    submit::submit,
};
use crate::state::AppState;

/// Routes the client talks to. The version-check and submit routes go by
/// different names across deployments, so every known alias is served.
fn stub_routes() -> Router<AppState> {
    Router::new()
        // Manifest
        .route("/manifest", get(get_manifest))
        // Version check
        .route("/check_manifest", get(get_version_check))
        .route("/version_check", get(get_version_check))
        .route("/version", get(get_version_check))
        // Submission
        .route("/submit", post(submit))
        .route("/change", post(submit))
}

pub fn build_router(state: AppState) -> Router {
    let mut router = health_routes().merge(stub_routes());

    if !state.route_prefix.is_empty() {
        router = router.nest(&state.route_prefix, stub_routes());
    }

    router
        .fallback(not_found)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
