use std::future::Future;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, runtime::Runtime};
use tracing::info;

use dominant::PipelineConfig;

use crate::{
    config::ServerConfig,
    routes::{routes, ApiState},
};

pub fn run(config: ServerConfig) -> Result<()> {
    info!("Starting dominant-server with config:\n{:#?}", config);

    let rt = Runtime::new().context("Failed to start tokio runtime")?;
    rt.block_on(async {
        let listener = TcpListener::bind(config.addr)
            .await
            .with_context(|| format!("Failed to bind {}", config.addr))?;
        info!("Listening on {}", config.addr);

        serve(listener, &config.pipeline, shutdown_signal()).await
    })?;

    info!("Received exit signal. Terminating...");
    Ok(())
}

/// Serve the API on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    pipeline: &PipelineConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = routes(ApiState::new(pipeline));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Failed to listen for exit signal");
        std::future::pending::<()>().await;
    }
}
