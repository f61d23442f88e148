//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{id}
//! POST /api/users {"name":"Alice","email":"alice@x.com","age":22}
//! PUT /api/users/{id} {"name":"Alice","email":"alice@x.com","age":23}
//! DELETE /api/users/{id}
//! ```
//!
//! Handlers translate JSON to domain drafts and delegate to the users ports
//! held in [`HttpState`]. All consistency rules live behind those ports.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users` and `PUT /api/users/{id}`.
///
/// Example JSON:
/// `{"name":"Alice","email":"alice@x.com","age":22}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@x.com")]
    pub email: String,
    /// Any integer is accepted.
    #[schema(example = 22)]
    pub age: i64,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        let UserRequest { name, email, age } = value;
        Self { name, email, age }
    }
}

/// Stored user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            age: user.age(),
        }
    }
}

/// Confirmation returned by `DELETE /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "Alice deleted")]
    pub message: String,
}

impl From<User> for DeleteUserResponse {
    fn from(user: User) -> Self {
        Self {
            message: format!("{} deleted", user.name()),
        }
    }
}

/// List every stored user in creation order.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend_api::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.get_user(UserId::new(path.into_inner())).await?;
    Ok(web::Json(user.into()))
}

/// Create a user; the store assigns the identifier.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Invalid body or email already registered", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(web::Json(user.into()))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid body or email already registered", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_command
        .update_user(UserId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(user.into()))
}

/// Remove a user and confirm by name.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let user = state
        .users_command
        .delete_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(user.into()))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
