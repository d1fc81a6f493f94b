use anyhow::Context;
use clap::Parser;
use tracing::info;

use syncstub::config::StubConfig;
use syncstub::router::build_router;
use syncstub::state::AppState;
use syncstub_core::tracing::init_tracing;

/// Everything else is configured through `STUB_*` environment variables.
#[derive(Parser)]
#[command(about = "Stub manifest and submission endpoint for exercising the sync client")]
struct Args {
    /// TCP port to listen on (overrides STUB_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let mut config = StubConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = AppState::from_config(&config);
    let router = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        manifest_version = config.manifest_version,
        fail_delay = ?config.fail_delay,
        route_prefix = %config.route_prefix,
        "syncstub listening"
    );
    // Runs until the process is killed; in-flight requests are not drained.
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
