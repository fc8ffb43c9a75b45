//! Entry point for the Bonus Calculation Engine binary.
//!
//! Running this binary starts an HTTP server exposing the feedback
//! endpoint. The configuration directory may be specified via the
//! `BONUS_CONFIG_DIR` environment variable; if unset the server looks for
//! `config/bonus` relative to the current working directory. The bind
//! address comes from `BONUS_BIND_ADDR` and defaults to `127.0.0.1:8083`.

use bonus_engine::api::{AppState, create_router};
use bonus_engine::config::ConfigLoader;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config_dir =
        std::env::var("BONUS_CONFIG_DIR").unwrap_or_else(|_| "config/bonus".to_string());
    let addr = std::env::var("BONUS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8083".to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration from {config_dir}: {err}");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Failed to assemble application state: {err}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!(%addr, config_dir = %config_dir, "bonus engine listening");

    if let Err(err) = axum::serve(listener, create_router(state)).await {
        eprintln!("Error running server: {err}");
    }
}
