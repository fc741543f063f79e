use axum::extract::State;
use axum::http::HeaderMap;

use backend_application::commands::user_commands;
use backend_application::dtos::{NotificationQuery, UpdateUserRequest};
use backend_application::queries::notification_queries;
use backend_application::AppState;
use backend_domain::{NotificationCounts, User, UserId};

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::authenticate;

pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(user_id): ApiPath<UserId>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<ApiResponse<User>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let user = user_commands::update_user(&state, &actor, user_id, payload).await?;
    Ok(ApiResponse::ok(user))
}

pub async fn notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<NotificationQuery>,
) -> Result<ApiResponse<NotificationCounts>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let counts = notification_queries::notification_counts(&state, &actor, query).await?;
    Ok(ApiResponse::ok(counts))
}
