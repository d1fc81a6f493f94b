use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Stub service error variants.
#[derive(Debug, thiserror::Error)]
pub enum StubError {
    /// The synthetic failure handed to every odd-numbered submission.
    #[error("submission rejected")]
    SubmissionRejected { seq: u64 },
    #[error("route not found")]
    RouteNotFound,
}

impl StubError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SubmissionRejected { .. } => "SUBMISSION_REJECTED",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
        }
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::SubmissionRejected { .. } => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
