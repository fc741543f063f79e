use axum::extract::State;
use axum::http::HeaderMap;

use backend_application::commands::reward_commands;
use backend_application::dtos::{CharacterQuery, GrantRequest, GrantResponse, GuildQuery};
use backend_application::queries::character_queries;
use backend_application::AppState;
use backend_domain::{Character, CharacterId, CharacterProfile};

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::authenticate;

pub async fn get_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<CharacterQuery>,
) -> Result<ApiResponse<CharacterProfile>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let profile = character_queries::get_character(&state, &actor, query).await?;
    Ok(ApiResponse::ok(profile))
}

pub async fn list_characters(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<GuildQuery>,
) -> Result<ApiResponse<Vec<Character>>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let characters = character_queries::list_characters(&state, &actor, query).await?;
    Ok(ApiResponse::ok(characters))
}

pub async fn grant_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(character_id): ApiPath<CharacterId>,
    ApiJson(payload): ApiJson<GrantRequest>,
) -> Result<ApiResponse<GrantResponse>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let granted = reward_commands::grant_reward(&state, &actor, character_id, payload).await?;
    Ok(ApiResponse::ok(granted))
}
