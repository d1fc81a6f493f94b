use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ledger::SubmissionLedger;

/// Process-wide submission counter. Starts at zero and is never reset or
/// persisted; restarting the process restarts the alternation.
#[derive(Debug, Default)]
pub struct AtomicSubmissionCounter {
    next: AtomicU64,
}

impl AtomicSubmissionCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionLedger for AtomicSubmissionCounter {
    fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
