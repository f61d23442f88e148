//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub(crate) use metrics::build_prometheus;
pub use settings::ServerSettings;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use backend_api::Trace;
#[cfg(debug_assertions)]
use backend_api::doc::ApiDoc;
use backend_api::domain::ports::{NoOpUserOperationMetrics, UserOperationMetrics};
use backend_api::domain::{UserStore, UsersService};
use backend_api::inbound::http::configure;
use backend_api::inbound::http::health::HealthState;
use backend_api::inbound::http::state::HttpState;
#[cfg(feature = "metrics")]
use backend_api::outbound::metrics::PrometheusUserOperationMetrics;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the user operation metrics recorder.
///
/// Registers Prometheus series on the exporter's registry when one is
/// configured, otherwise returns a no-op recorder.
///
/// # Errors
/// Returns [`std::io::Error`] if Prometheus metric registration fails.
#[cfg(feature = "metrics")]
fn build_operation_metrics(
    config: &ServerConfig,
) -> std::io::Result<Arc<dyn UserOperationMetrics>> {
    match &config.prometheus {
        Some(prom) => {
            let metrics = PrometheusUserOperationMetrics::new(&prom.registry).map_err(|e| {
                std::io::Error::other(format!("user operation metrics registration failed: {e}"))
            })?;
            Ok(Arc::new(metrics))
        }
        None => Ok(Arc::new(NoOpUserOperationMetrics)),
    }
}

/// Build the user operation metrics recorder.
///
/// Without the metrics feature a no-op recorder is always used.
#[cfg(not(feature = "metrics"))]
fn build_operation_metrics(
    _config: &ServerConfig,
) -> std::io::Result<Arc<dyn UserOperationMetrics>> {
    Ok(Arc::new(NoOpUserOperationMetrics))
}

/// Wire the shared store, the users service and the HTTP state.
///
/// The store is created once here so every Actix worker sees the same records.
fn build_http_state(
    config: &ServerConfig,
    metrics: Arc<dyn UserOperationMetrics>,
) -> web::Data<HttpState> {
    let service = Arc::new(UsersService::new(Arc::new(UserStore::new()), metrics));
    web::Data::new(HttpState::new(
        service.clone(),
        service,
        config.info.clone(),
    ))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors::permissive())
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing binding, deployment
///   metadata, and optional metrics settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when metric registration, binding the socket,
/// or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let operation_metrics = build_operation_metrics(&config)?;
    let http_state = build_http_state(&config, operation_metrics);
    let ServerConfig {
        bind_addr,
        info: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "HTTP server listening");
    health_state.mark_ready();
    Ok(server)
}
