//! Serve command - runs the HTTP + WebSocket server

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::state::AppState;
use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::api_key::{parse_key, GeneratedKey};
use crate::infrastructure::logging;

/// Environment variable holding a `<prefix>.<secret>` credential to seed
/// the key store with at startup
const API_KEY_ENV: &str = "BLOG_API_KEY";

/// Run the API server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state().await?;
    seed_api_key(&state).await?;

    let app = create_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

/// Seed the in-memory key store. A credential supplied via `BLOG_API_KEY`
/// is registered as-is; otherwise a fresh key is created and its
/// credential logged exactly once at startup.
async fn seed_api_key(state: &AppState) -> anyhow::Result<()> {
    match std::env::var(API_KEY_ENV) {
        Ok(credential) if !credential.is_empty() => {
            let parsed = parse_key(&credential)
                .map_err(|e| anyhow::anyhow!("{} is invalid: {}", API_KEY_ENV, e))?;
            let generated = GeneratedKey {
                prefix: parsed.prefix.to_string(),
                secret: parsed.secret.to_string(),
            };
            state.api_key_service.create_from("env", &generated).await?;
            info!("API key loaded from {}", API_KEY_ENV);
        }
        _ => {
            let created = state.api_key_service.create("default").await?;
            info!("===========================================");
            info!("No {} set; generated an API key.", API_KEY_ENV);
            info!("Credential (shown once): {}", created.credential);
            info!("===========================================");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
