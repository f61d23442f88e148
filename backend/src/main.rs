//! Backend entry-point: loads settings, initialises tracing, and serves the
//! users API with health, configuration, metrics and OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend_api::inbound::http::health::HealthState;
use backend_api::inbound::http::state::AppInfo;
#[cfg(feature = "metrics")]
use server::build_prometheus;
use server::{ServerConfig, ServerSettings, create_server};

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;
    let info = AppInfo::new(settings.api_url(), settings.environment());
    info!(
        %bind_addr,
        environment = %info.environment,
        version = %info.version,
        "starting backend-api"
    );

    let config = ServerConfig::new(bind_addr, info);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(build_prometheus()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
