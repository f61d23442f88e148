//! Service discovery endpoints: the root greeting and frontend configuration.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    #[schema(example = "/docs")]
    pub docs: String,
    #[schema(example = "/health")]
    pub health: String,
}

/// Body of `GET /api/config`, consumed by the frontend at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[schema(example = "http://localhost:8000")]
    pub api_url: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "development")]
    pub environment: String,
}

/// Greeting with pointers to the docs and health endpoints.
#[utoipa::path(
    get,
    path = "/",
    tags = ["info"],
    responses((status = 200, description = "Service greeting", body = RootResponse))
)]
#[get("/")]
pub async fn root() -> web::Json<RootResponse> {
    web::Json(RootResponse {
        message: "Backend API is running".to_owned(),
        docs: "/docs".to_owned(),
        health: "/health".to_owned(),
    })
}

/// Deployment configuration for API clients.
#[utoipa::path(
    get,
    path = "/api/config",
    tags = ["info"],
    responses((status = 200, description = "Client configuration", body = ConfigResponse))
)]
#[get("/config")]
pub async fn config(state: web::Data<HttpState>) -> web::Json<ConfigResponse> {
    let info = &state.info;
    web::Json(ConfigResponse {
        api_url: info.api_url.clone(),
        version: info.version.clone(),
        environment: info.environment.clone(),
    })
}
