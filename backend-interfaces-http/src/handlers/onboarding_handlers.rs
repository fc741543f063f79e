use axum::extract::State;

use backend_application::commands::{onboarding_commands, session_commands};
use backend_application::dtos::{
    CreateGuildmasterRequest, JoinGuildRequest, LoginRequest, LoginResponse, OnboardingResponse,
};
use backend_application::AppState;

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::ApiJson;

pub async fn create_guildmaster(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGuildmasterRequest>,
) -> Result<ApiResponse<OnboardingResponse>, HttpError> {
    let created = onboarding_commands::create_guildmaster(&state, payload).await?;
    let message = format!("Guild {} founded", created.onboarding.guild.name);
    Ok(ApiResponse::created(created).with_message(message))
}

pub async fn join_guild(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<JoinGuildRequest>,
) -> Result<ApiResponse<OnboardingResponse>, HttpError> {
    let joined = onboarding_commands::join_guild(&state, payload).await?;
    let message = format!("Welcome to {}", joined.onboarding.guild.name);
    Ok(ApiResponse::created(joined).with_message(message))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, HttpError> {
    let session = session_commands::login(&state, payload).await?;
    Ok(ApiResponse::ok(session))
}
