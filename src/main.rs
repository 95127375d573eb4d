use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use crm_gateway::{
    config::Config, routes, services::crm::client::CrmClient, state::AppState,
    token_store::TokenStore,
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads `.env` as well, so it runs before tracing reads `RUST_LOG`.
    let config = Config::from_env();
    init_tracing();

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration, refusing to start");
            std::process::exit(1);
        }
    };
    info!(?config, "configuration loaded");

    let http_client = CrmClient::http_client().context("failed to build HTTP client")?;
    let crm = Arc::new(CrmClient::new(http_client, &config));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = AppState {
        config: Arc::new(config),
        token_store: Arc::new(TokenStore::new()),
        crm,
    };
    let app = routes::router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting server on {}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// `RUST_LOG` controls verbosity; `LOG_FORMAT=json` switches to structured output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let json = std::env::var("LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
