use axum::{extract::State, http::StatusCode};
use bytes::Bytes;

use crate::error::StubError;
use crate::state::AppState;
use crate::usecase::submit::SubmitUseCase;

// ── POST /submit, /change ────────────────────────────────────────────────────

/// Takes the body as raw bytes so a missing or malformed payload can never
/// turn into an extractor rejection; only the sequence number picks the status.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, StubError> {
    let usecase = SubmitUseCase {
        ledger: state.submission_ledger(),
        fail_delay: state.fail_delay,
    };
    usecase.execute(&body).await?;
    Ok(StatusCode::OK)
}
