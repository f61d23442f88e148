//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Deployment metadata reported by `/health` and `/api/config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Public base URL clients should use for API calls.
    pub api_url: String,
    /// Service version string.
    pub version: String,
    /// Deployment environment name, e.g. `development`.
    pub environment: String,
}

impl AppInfo {
    /// Build metadata with the crate version.
    ///
    /// # Examples
    /// ```
    /// use backend_api::inbound::http::state::AppInfo;
    ///
    /// let info = AppInfo::new("http://localhost:8000", "development");
    /// assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    /// ```
    pub fn new(api_url: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: environment.into(),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub info: AppInfo,
}

impl HttpState {
    /// Construct state from the users ports and deployment metadata.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend_api::domain::ports::NoOpUserOperationMetrics;
    /// use backend_api::domain::{UserStore, UsersService};
    /// use backend_api::inbound::http::state::{AppInfo, HttpState};
    ///
    /// let service = Arc::new(UsersService::new(
    ///     Arc::new(UserStore::new()),
    ///     Arc::new(NoOpUserOperationMetrics),
    /// ));
    /// let state = HttpState::new(
    ///     service.clone(),
    ///     service,
    ///     AppInfo::new("http://localhost:8000", "development"),
    /// );
    /// assert_eq!(state.info.environment, "development");
    /// ```
    pub fn new(
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        info: AppInfo,
    ) -> Self {
        Self {
            users,
            users_command,
            info,
        }
    }
}
