use axum::extract::State;
use axum::http::HeaderMap;

use backend_application::commands::{guild_commands, onboarding_commands};
use backend_application::dtos::{CreatePlayerRequest, InviteRequest, UpdateGuildRequest};
use backend_application::queries::guild_queries;
use backend_application::AppState;
use backend_domain::{Guild, GuildId, GuildSummary, Onboarding};

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::authenticate;

pub async fn get_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(guild_id): ApiPath<GuildId>,
) -> Result<ApiResponse<GuildSummary>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let summary = guild_queries::guild_summary(&state, &actor, guild_id).await?;
    Ok(ApiResponse::ok(summary))
}

pub async fn update_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(guild_id): ApiPath<GuildId>,
    ApiJson(payload): ApiJson<UpdateGuildRequest>,
) -> Result<ApiResponse<Guild>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let guild = guild_commands::update_guild(&state, &actor, guild_id, payload).await?;
    Ok(ApiResponse::ok(guild))
}

pub async fn invite_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<InviteRequest>,
) -> Result<ApiResponse<Onboarding>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let onboarding = onboarding_commands::invite_member(&state, &actor, payload).await?;
    let message = format!(
        "{} has joined {}",
        onboarding.user.name, onboarding.guild.name
    );
    Ok(ApiResponse::ok(onboarding).with_message(message))
}

pub async fn create_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreatePlayerRequest>,
) -> Result<ApiResponse<Onboarding>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let onboarding = onboarding_commands::create_player(&state, &actor, payload).await?;
    Ok(ApiResponse::created(onboarding))
}
