use axum::extract::State;
use axum::http::HeaderMap;

use backend_application::commands::reward_commands;
use backend_application::dtos::{CreateRewardRequest, GuildQuery, PurchaseRequest};
use backend_application::queries::reward_queries;
use backend_application::AppState;
use backend_domain::{Purchase, Reward, RewardId};

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::authenticate;

pub async fn list_rewards(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<GuildQuery>,
) -> Result<ApiResponse<Vec<Reward>>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let rewards = reward_queries::list_rewards(&state, &actor, query).await?;
    Ok(ApiResponse::ok(rewards))
}

pub async fn create_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateRewardRequest>,
) -> Result<ApiResponse<Reward>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let reward = reward_commands::create_reward(&state, &actor, payload).await?;
    Ok(ApiResponse::created(reward))
}

pub async fn purchase_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(reward_id): ApiPath<RewardId>,
    ApiJson(payload): ApiJson<PurchaseRequest>,
) -> Result<ApiResponse<Purchase>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let purchase = reward_commands::purchase_reward(&state, &actor, reward_id, payload).await?;
    Ok(ApiResponse::ok(purchase))
}
