use axum::http::{Method, Uri};
use tracing::warn;

use crate::error::StubError;

/// Unknown routes are logged so a misconfigured client shows up in the output.
pub async fn not_found(method: Method, uri: Uri) -> StubError {
    warn!(%method, %uri, "request for unknown route");
    StubError::RouteNotFound
}
