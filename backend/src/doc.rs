//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: all HTTP endpoints from the inbound layer (users, stats,
//!   health, info)
//! - **Schemas**: the request/response DTOs and the shared error envelope
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::info::{ConfigResponse, RootResponse};
use crate::inbound::http::stats::{AgeGroupsResponse, UserStatsResponse};
use crate::inbound::http::users::{DeleteUserResponse, UserRequest, UserResponse};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Backend API",
        description = "In-memory user management with health, configuration and statistics endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::stats::user_stats,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::info::root,
        crate::inbound::http::info::config,
    ),
    components(schemas(
        UserRequest,
        UserResponse,
        DeleteUserResponse,
        UserStatsResponse,
        AgeGroupsResponse,
        HealthResponse,
        RootResponse,
        ConfigResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "info", description = "Service discovery and client configuration")
    )
)]
pub struct ApiDoc;
