use axum::{Json, extract::State};

use crate::domain::types::{Manifest, VersionCheck};
use crate::state::AppState;

// ── GET /manifest ────────────────────────────────────────────────────────────

pub async fn get_manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(Manifest::clone(&state.manifest))
}

// ── GET /check_manifest, /version_check, /version ────────────────────────────

pub async fn get_version_check(State(state): State<AppState>) -> Json<VersionCheck> {
    Json(state.manifest.version_check())
}
