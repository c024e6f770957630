//! Backend entry-point: loads settings, seeds demo data, and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use destinate::inbound::http::health::HealthState;
use server::{AppPorts, ServerSettings, create_server, seed_if_enabled};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let ports = AppPorts::in_memory()?;
    seed_if_enabled(&settings, &ports).await;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &ports, &settings)?;
    server.await
}
