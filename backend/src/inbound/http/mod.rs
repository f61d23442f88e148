//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers depend only on the users ports collected in [`state::HttpState`];
//! [`validation`] turns extractor rejections into the shared error envelope.

pub mod error;
pub mod health;
pub mod info;
pub mod state;
pub mod stats;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every REST endpoint together with the extractor error handlers.
///
/// Expects [`state::HttpState`] and [`health::HealthState`] to be supplied as
/// `web::Data` by the caller.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend_api::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(info::root)
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(
            web::scope("/api")
                .service(info::config)
                .service(users::list_users)
                .service(users::get_user)
                .service(users::create_user)
                .service(users::update_user)
                .service(users::delete_user)
                .service(stats::user_stats),
        );
}
