//! Distribution Lab HTTP Server Binary
//!
//! Initializes the repository, loads the dashboard configuration, sets up the
//! HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin distribution-lab-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DASHBOARD_CONFIG`: Path to a dashboard TOML file (default: search for `dashboard.toml`)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use distribution_lab::config::DashboardConfig;
use distribution_lab::db;
use distribution_lab::http::{create_router, AppState};

fn load_config() -> anyhow::Result<DashboardConfig> {
    let config = match env::var("DASHBOARD_CONFIG") {
        Ok(path) => {
            info!("Loading dashboard config from {}", path);
            DashboardConfig::from_file(&path)?
        }
        Err(_) => DashboardConfig::from_default_location()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Distribution Lab HTTP Server");

    let config = load_config()?;
    info!(
        "Flow link mode: {:?}, comparison scope: {:?}",
        config.flow.link_mode, config.comparison.scope
    );

    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    let state = AppState::new(repository, config);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
