use std::time::Duration;

use tracing::info;

use crate::domain::ledger::SubmissionLedger;
use crate::domain::types::{PlayerDataSubmission, Submission, SubmissionOutcome};
use crate::error::StubError;

// ── Submit ───────────────────────────────────────────────────────────────────

pub struct SubmitUseCase<L: SubmissionLedger> {
    pub ledger: L,
    pub fail_delay: Duration,
}

impl<L: SubmissionLedger> SubmitUseCase<L> {
    /// Record one submission and decide its fate from the pre-increment
    /// sequence number. Rejections are held for `fail_delay` before returning,
    /// without blocking the runtime thread.
    pub async fn execute(&self, body: &[u8]) -> Result<Submission, StubError> {
        let submission = Submission::new(self.ledger.next());
        log_submission(&submission, body);

        match submission.outcome {
            SubmissionOutcome::Accepted => Ok(submission),
            SubmissionOutcome::Rejected => {
                tokio::time::sleep(self.fail_delay).await;
                Err(StubError::SubmissionRejected {
                    seq: submission.seq,
                })
            }
        }
    }
}

fn log_submission(submission: &Submission, body: &[u8]) {
    let parsed = serde_json::from_slice::<PlayerDataSubmission>(body).ok();
    let data = parsed.as_ref().map(|p| &p.data);
    info!(
        seq = submission.seq,
        outcome = submission.outcome.as_str(),
        username = parsed.as_ref().map(|p| p.username.as_str()),
        profile = parsed.as_ref().map(|p| p.profile.as_str()),
        varbs = data.map(|d| d.varb.len()),
        varps = data.map(|d| d.varp.len()),
        levels = data.map(|d| d.level.len()),
        bytes = body.len(),
        body = %String::from_utf8_lossy(body),
        "{}",
        log_message(parsed.as_ref())
    );
}

fn log_message(parsed: Option<&PlayerDataSubmission>) -> &'static str {
    match parsed {
        Some(submission) if submission.data.is_empty() => "empty submission received",
        Some(_) => "submission received",
        None => "unparsed submission received",
    }
}
