//! The probe sequence and the checks applied to each response.

use std::time::{Duration, Instant};

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

/// How long a step is allowed (or required) to take relative to the delay floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Must finish before the delay floor.
    Fast,
    /// Must take at least the delay floor.
    Delayed,
    Any,
}

impl Timing {
    pub fn check(self, elapsed: Duration, floor: Duration) -> Option<String> {
        match self {
            Timing::Fast if elapsed >= floor => Some(format!(
                "expected a fast response (< {floor:?}), took {elapsed:?}"
            )),
            Timing::Delayed if elapsed < floor => Some(format!(
                "expected a delayed response (>= {floor:?}), took {elapsed:?}"
            )),
            _ => None,
        }
    }
}

/// Result of one probe step.
#[derive(Debug)]
pub struct StepResult {
    pub name: String,
    pub method: Method,
    pub path: String,
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    pub elapsed: Duration,
    /// Everything that was wrong with an otherwise-received response.
    pub problems: Vec<String>,
    /// Set when the request could not be sent (e.g. connection refused).
    pub error: Option<String>,
}

impl StepResult {
    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.actual_status == Some(self.expected_status)
            && self.problems.is_empty()
    }
}

/// Checks the manifest body and returns its version when present.
pub fn check_manifest(body: &Value) -> (Option<i64>, Vec<String>) {
    let mut problems = Vec::new();

    match body.get("varbits").and_then(Value::as_array) {
        Some(varbits) if varbits.is_empty() => problems.push("varbits is empty".to_owned()),
        Some(varbits) if !varbits.iter().all(Value::is_i64) => {
            problems.push("varbits contains non-integers".to_owned())
        }
        Some(_) => {}
        None => problems.push("varbits missing or not an array".to_owned()),
    }
    if !body.get("varps").is_some_and(Value::is_array) {
        problems.push("varps missing or not an array".to_owned());
    }

    let version = body.get("version").and_then(Value::as_i64);
    if version.is_none() {
        problems.push("version missing or not an integer".to_owned());
    }
    (version, problems)
}

/// Compares the version-check body with the manifest version.
pub fn check_version(body: &Value, manifest_version: Option<i64>) -> Vec<String> {
    let actual = body.get("version").and_then(Value::as_i64);
    match (actual, manifest_version) {
        (None, _) => vec!["version missing or not an integer".to_owned()],
        (Some(actual), Some(expected)) if actual != expected => vec![format!(
            "version drifted from manifest: expected {expected}, got {actual}"
        )],
        _ => Vec::new(),
    }
}

pub struct Probe {
    client: Client,
    base_url: String,
    delay_floor: Duration,
}

impl Probe {
    pub fn new(base_url: &str, delay_floor: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            delay_floor,
        }
    }

    pub async fn run(&self) -> Vec<StepResult> {
        let mut results = Vec::new();

        let (mut manifest, body) = self
            .step("fetch manifest", Method::GET, "/manifest", 200, Timing::Any)
            .await;
        let manifest_version = body.as_ref().and_then(|body| {
            let (version, problems) = check_manifest(body);
            manifest.problems.extend(problems);
            version
        });
        results.push(manifest);

        let (mut check, body) = self
            .step("check version", Method::GET, "/check_manifest", 200, Timing::Any)
            .await;
        if let Some(body) = &body {
            check.problems.extend(check_version(body, manifest_version));
        }
        results.push(check);

        let submissions = [
            ("first submission", 200, Timing::Fast),
            ("second submission", 400, Timing::Delayed),
            ("third submission", 200, Timing::Fast),
        ];
        for (name, status, timing) in submissions {
            let (result, _) = self.step(name, Method::POST, "/submit", status, timing).await;
            results.push(result);
        }

        results
    }

    /// Sends one request and returns the result plus the parsed JSON body, if any.
    async fn step(
        &self,
        name: &str,
        method: Method,
        path: &str,
        expected_status: u16,
        timing: Timing,
    ) -> (StepResult, Option<Value>) {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);
        if method == Method::POST {
            req = req.json(&serde_json::json!({}));
        }

        let mut result = StepResult {
            name: name.to_owned(),
            method,
            path: path.to_owned(),
            expected_status,
            actual_status: None,
            elapsed: Duration::ZERO,
            problems: Vec::new(),
            error: None,
        };

        let started = Instant::now();
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                result.error = Some(e.to_string());
                return (result, None);
            }
        };
        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();
        result.elapsed = started.elapsed();
        result.actual_status = Some(status.as_u16());

        if let Some(problem) = timing.check(result.elapsed, self.delay_floor) {
            result.problems.push(problem);
        }

        let body = if status == StatusCode::OK && result.method == Method::GET {
            match serde_json::from_str::<Value>(&body_text) {
                Ok(body) => Some(body),
                Err(e) => {
                    result.problems.push(format!("body is not JSON: {e}"));
                    None
                }
            }
        } else {
            None
        };

        (result, body)
    }
}
