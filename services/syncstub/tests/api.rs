use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use syncstub::config::StubConfig;
use syncstub::router::build_router;
use syncstub::state::AppState;

const TEST_FAIL_DELAY: Duration = Duration::from_millis(300);

fn test_config() -> StubConfig {
    StubConfig {
        fail_delay: TEST_FAIL_DELAY,
        ..StubConfig::default()
    }
}

fn server_with(config: StubConfig) -> TestServer {
    let state = AppState::from_config(&config);
    TestServer::new(build_router(state)).unwrap()
}

fn server() -> TestServer {
    server_with(test_config())
}

// ── Manifest ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_the_manifest() {
    let server = server();

    let response = server.get("/manifest").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["version"], 5);
    let varbits = body["varbits"].as_array().unwrap();
    assert!(varbits.contains(&json!(4101)));
    assert_eq!(body["varps"], json!([1, 3, 5, 6, 7, 10]));
}

#[tokio::test]
async fn should_serve_an_identical_manifest_every_time() {
    let server = server();

    let first: Value = server.get("/manifest").await.json();
    let second: Value = server.get("/manifest").await.json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_ignore_query_on_manifest() {
    let server = server();

    let plain: Value = server.get("/manifest").await.json();
    let with_query: Value = server.get("/manifest?version=99&foo=bar").await.json();

    assert_eq!(plain, with_query);
}

// ── Version check ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_the_manifest_version_on_every_alias() {
    let server = server();
    let manifest: Value = server.get("/manifest").await.json();

    for path in ["/check_manifest", "/version_check", "/version"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, json!({ "version": manifest["version"] }), "{path}");
    }
}

#[tokio::test]
async fn should_keep_versions_in_step_when_configured() {
    for version in [-1, 0, 4, 17] {
        let server = server_with(StubConfig {
            manifest_version: version,
            ..test_config()
        });

        let manifest: Value = server.get("/manifest").await.json();
        let check: Value = server.get("/check_manifest").await.json();

        assert_eq!(manifest["version"], version);
        assert_eq!(check["version"], manifest["version"]);
    }
}

// ── Submit ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_alternate_submission_outcomes() {
    let server = server();

    for position in 1..=5 {
        let started = Instant::now();
        let response = server.post("/submit").json(&json!({})).await;
        let elapsed = started.elapsed();

        if position % 2 == 1 {
            response.assert_status_ok();
            assert!(
                elapsed < TEST_FAIL_DELAY,
                "call {position} should be fast, took {elapsed:?}"
            );
        } else {
            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(
                elapsed >= TEST_FAIL_DELAY,
                "call {position} should be delayed, took {elapsed:?}"
            );
            let body: Value = response.json();
            assert_eq!(body["kind"], "SUBMISSION_REJECTED");
        }
    }
}

#[tokio::test]
async fn should_share_the_counter_between_submit_aliases() {
    let server = server();

    server.post("/submit").json(&json!({})).await.assert_status_ok();
    server
        .post("/change")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server.post("/change").json(&json!({})).await.assert_status_ok();
}

#[tokio::test]
async fn should_not_let_gets_advance_the_counter() {
    let server = server();

    server.get("/manifest").await.assert_status_ok();
    server.get("/check_manifest").await.assert_status_ok();

    server.post("/submit").json(&json!({})).await.assert_status_ok();
}

#[tokio::test]
async fn should_accept_any_body() {
    let server = server();

    server.post("/submit").await.assert_status_ok();
    server
        .post("/submit")
        .text("{definitely not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/submit")
        .json(&json!({
            "username": "Zezima",
            "profile": "STANDARD",
            "data": { "varb": { "4101": 1 }, "varp": {}, "level": { "Prayer": 43 } }
        }))
        .await
        .assert_status_ok();
    server
        .post("/submit")
        .json(&json!([1, 2, 3]))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_not_block_other_requests_while_rejecting() {
    let server = server();
    server.post("/submit").json(&json!({})).await.assert_status_ok();

    let started = Instant::now();
    let (rejected, manifest_elapsed) = tokio::join!(
        async { server.post("/submit").json(&json!({})).await },
        async {
            server.get("/manifest").await.assert_status_ok();
            started.elapsed()
        },
    );

    rejected.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        manifest_elapsed < TEST_FAIL_DELAY,
        "manifest waited on the rejected submission: {manifest_elapsed:?}"
    );
}

// ── Routing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_mount_routes_under_prefix_and_root() {
    let server = server_with(StubConfig {
        route_prefix: "/runelite".to_owned(),
        ..test_config()
    });

    server.get("/runelite/manifest").await.assert_status_ok();
    server.get("/manifest").await.assert_status_ok();
    server.get("/runelite/check_manifest").await.assert_status_ok();

    server
        .post("/runelite/submit")
        .json(&json!({}))
        .await
        .assert_status_ok();
    server
        .post("/submit")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_json_404_for_unknown_routes() {
    let server = server();

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "ROUTE_NOT_FOUND");
}

#[tokio::test]
async fn should_answer_health_probes() {
    let server = server();

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_attach_a_request_id() {
    let server = server();

    let response = server.get("/manifest").await;

    let id = response.headers().get("x-request-id");
    assert!(id.is_some_and(|v| !v.is_empty()));
}
