use std::sync::Arc;
use std::time::Duration;

use crate::config::StubConfig;
use crate::domain::types::Manifest;
use crate::infra::counter::AtomicSubmissionCounter;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and never mutated.
    pub manifest: Arc<Manifest>,
    pub submissions: Arc<AtomicSubmissionCounter>,
    pub fail_delay: Duration,
    pub route_prefix: String,
}

impl AppState {
    pub fn from_config(config: &StubConfig) -> Self {
        Self {
            manifest: Arc::new(Manifest::with_version(config.manifest_version)),
            submissions: Arc::new(AtomicSubmissionCounter::new()),
            fail_delay: config.fail_delay,
            route_prefix: config.route_prefix.clone(),
        }
    }

    pub fn submission_ledger(&self) -> Arc<AtomicSubmissionCounter> {
        Arc::clone(&self.submissions)
    }
}
