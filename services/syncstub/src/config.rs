use std::time::Duration;

use crate::domain::types::DEFAULT_MANIFEST_VERSION;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_FAIL_DELAY_MS: u64 = 6000;

/// Stub server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    /// TCP port to listen on (default 8000). Env var: `STUB_PORT`.
    pub port: u16,
    /// Interface to bind (default "0.0.0.0"). Env var: `STUB_BIND_ADDR`.
    pub bind_addr: String,
    /// How long a rejected submission is held before the 400 goes out
    /// (default 6s). Env var: `STUB_FAIL_DELAY_MS`.
    pub fail_delay: Duration,
    /// Version reported by both the manifest and version-check routes
    /// (default 5). Env var: `STUB_MANIFEST_VERSION`.
    pub manifest_version: i32,
    /// Extra mount point for every stub route, e.g. "/runelite". Routes stay
    /// available at the root as well. Env var: `STUB_ROUTE_PREFIX`.
    pub route_prefix: String,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            fail_delay: Duration::from_millis(DEFAULT_FAIL_DELAY_MS),
            manifest_version: DEFAULT_MANIFEST_VERSION,
            route_prefix: String::new(),
        }
    }
}

impl StubConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or unparseable
    /// values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            port: lookup("STUB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            bind_addr: lookup("STUB_BIND_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            fail_delay: lookup("STUB_FAIL_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.fail_delay),
            manifest_version: lookup("STUB_MANIFEST_VERSION")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.manifest_version),
            route_prefix: lookup("STUB_ROUTE_PREFIX")
                .map(|v| normalize_prefix(&v))
                .unwrap_or(defaults.route_prefix),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// "runelite/" → "/runelite", "/" → "".
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
