use std::sync::Arc;

use anyhow::Context;
use rcs_chat_backend::{
    config::Config,
    logging::init_logging,
    routes,
    services::anthropic::AnthropicClient,
    state::AppState,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("startup configuration")?;
    init_logging(&config.log_level, config.log_json);
    info!(version = env!("CARGO_PKG_VERSION"), ?config, "starting RCS chat backend");

    let client = AnthropicClient::new(config.api_key.clone(), &config.anthropic_base_url);
    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router(&config.static_dir).with_state(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
