use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::access::mastered_guild;
use crate::commands::input::{required_email, required_password, required_text};
use crate::commands::session_commands::{hash_password, issue_session};
use crate::dtos::{
    CreateGuildmasterRequest, CreatePlayerRequest, InviteRequest, JoinGuildRequest,
    OnboardingResponse,
};
use crate::{Actor, AppError, AppState};
use backend_domain::{
    normalize_guild_code, normalize_optional_text, DomainError, GuildCodeGenerator, GuildTarget,
    NewAccount, NewGuild, Onboarding, Role,
};

pub async fn create_guildmaster(
    state: &AppState,
    payload: CreateGuildmasterRequest,
) -> Result<OnboardingResponse, AppError> {
    let name = required_text(payload.name, "name")?;
    let email = required_email(payload.email)?;
    let password = required_password(payload.password)?;
    let guild_name = required_text(payload.guild_name, "guildName")?;
    let description = normalize_optional_text(payload.guild_description);

    ensure_email_free(state, &email).await?;
    let account = new_account(state, name, email, password, Role::Guildmaster).await?;

    let guilds = Arc::clone(&state.guilds);
    let code = GuildCodeGenerator::new(state.config.guild_code_max_attempts)
        .generate(move |candidate| {
            let guilds = Arc::clone(&guilds);
            async move { guilds.guild_code_exists(&candidate).await }
        })
        .await?;

    let onboarding = state
        .guilds
        .create_guildmaster(
            account,
            NewGuild {
                name: guild_name,
                code,
                description,
            },
        )
        .await?;
    info!(
        user_id = %onboarding.user.id,
        guild_id = %onboarding.guild.id,
        code = %onboarding.guild.code,
        "guild created"
    );
    signed_in(state, onboarding)
}

pub async fn join_guild(
    state: &AppState,
    payload: JoinGuildRequest,
) -> Result<OnboardingResponse, AppError> {
    let name = required_text(payload.name, "name")?;
    let email = required_email(payload.email)?;
    let password = required_password(payload.password)?;
    let code = normalize_guild_code(&required_text(payload.guild_code, "guildCode")?);

    ensure_email_free(state, &email).await?;
    let account = new_account(state, name, email, password, Role::Player).await?;

    let onboarding = state
        .guilds
        .join_guild(account, GuildTarget::Code(code))
        .await?;
    info!(
        user_id = %onboarding.user.id,
        guild_id = %onboarding.guild.id,
        members = onboarding.guild.member_count,
        "player joined guild"
    );
    signed_in(state, onboarding)
}

/// A guild master creates a player account directly inside their guild.
pub async fn create_player(
    state: &AppState,
    actor: &Actor,
    payload: CreatePlayerRequest,
) -> Result<Onboarding, AppError> {
    let guild_id = actor
        .user
        .guild_id
        .ok_or_else(|| AppError::forbidden("guild master of this guild only"))?;
    mastered_guild(state, actor, guild_id).await?;

    let name = required_text(payload.name, "name")?;
    let email = required_email(payload.email)?;
    let password = required_password(payload.password)?;

    ensure_email_free(state, &email).await?;
    let account = new_account(state, name, email, password, Role::Player).await?;
    let onboarding = state
        .guilds
        .join_guild(account, GuildTarget::Id(guild_id))
        .await?;
    state.metrics.record_onboarding();
    info!(
        user_id = %onboarding.user.id,
        guild_id = %guild_id,
        "player created by guild master"
    );
    Ok(onboarding)
}

pub async fn invite_member(
    state: &AppState,
    actor: &Actor,
    payload: InviteRequest,
) -> Result<Onboarding, AppError> {
    if !actor.user.is_guildmaster() {
        return Err(AppError::forbidden("only guild masters can invite"));
    }
    let guild_id = payload
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    let email = required_email(payload.email)?;
    mastered_guild(state, actor, guild_id).await?;

    let invitee = state
        .users
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?;
    if invitee.guild_id.is_some() {
        warn!(user_id = %invitee.id, "invite rejected: user already in a guild");
        return Err(AppError::BadRequest(
            "user already belongs to a guild".to_string(),
        ));
    }

    let onboarding = state.guilds.invite_user(&email, guild_id).await?;
    info!(user_id = %onboarding.user.id, guild_id = %guild_id, "user invited");
    Ok(onboarding)
}

async fn ensure_email_free(state: &AppState, email: &str) -> Result<(), AppError> {
    if state.users.find_user_by_email(email).await?.is_some() {
        return Err(
            DomainError::Conflict(format!("email '{}' is already registered", email)).into(),
        );
    }
    Ok(())
}

async fn new_account(
    state: &AppState,
    name: String,
    email: String,
    password: String,
    role: Role,
) -> Result<NewAccount, AppError> {
    let password_hash = hash_password(state, password).await?;
    Ok(NewAccount {
        name,
        email,
        password_hash,
        role,
    })
}

fn signed_in(state: &AppState, onboarding: Onboarding) -> Result<OnboardingResponse, AppError> {
    state.metrics.record_onboarding();
    let session = issue_session(&state.config, onboarding.user.id, Utc::now())?;
    Ok(OnboardingResponse {
        onboarding,
        token: session.token,
        expires_at: session.expires_at,
    })
}
