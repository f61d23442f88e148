//! Aggregate statistics endpoint.
//!
//! ```text
//! GET /api/stats
//! {"total_users":2,"average_age":29.0,"users_by_age_group":{"18-25":1,"26-35":0,"36-50":1,"50+":0}}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AgeBracket, AgeGroupCounts, Error, UserStats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Per-bracket user counts. All four keys are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct AgeGroupsResponse {
    #[serde(rename = "18-25")]
    pub eighteen_to_twenty_five: usize,
    #[serde(rename = "26-35")]
    pub twenty_six_to_thirty_five: usize,
    #[serde(rename = "36-50")]
    pub thirty_six_to_fifty: usize,
    #[serde(rename = "50+")]
    pub over_fifty: usize,
}

impl From<&AgeGroupCounts> for AgeGroupsResponse {
    fn from(counts: &AgeGroupCounts) -> Self {
        Self {
            eighteen_to_twenty_five: counts.get(AgeBracket::EighteenToTwentyFive),
            twenty_six_to_thirty_five: counts.get(AgeBracket::TwentySixToThirtyFive),
            thirty_six_to_fifty: counts.get(AgeBracket::ThirtySixToFifty),
            over_fifty: counts.get(AgeBracket::OverFifty),
        }
    }
}

/// Statistics snapshot returned by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct UserStatsResponse {
    pub total_users: usize,
    #[schema(example = 29.0)]
    pub average_age: f64,
    pub users_by_age_group: AgeGroupsResponse,
}

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_users: stats.total_users,
            average_age: stats.average_age,
            users_by_age_group: AgeGroupsResponse::from(&stats.users_by_age_group),
        }
    }
}

/// Report user count, mean age and age-bracket distribution.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "User statistics", body = UserStatsResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "userStats"
)]
#[get("/stats")]
pub async fn user_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<UserStatsResponse>> {
    let stats = state.users.user_stats().await?;
    Ok(web::Json(stats.into()))
}
