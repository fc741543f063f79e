use crate::access::load_guild;
use crate::dtos::GuildQuery;
use crate::{Actor, AppError, AppState};
use backend_domain::Reward;

/// Guild masters see the whole catalogue; players only what is on sale.
pub async fn list_rewards(
    state: &AppState,
    actor: &Actor,
    query: GuildQuery,
) -> Result<Vec<Reward>, AppError> {
    let guild_id = query
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    actor.require_member(guild_id)?;
    let guild = load_guild(state, guild_id).await?;

    let mut rewards = state.rewards.list_rewards(guild_id).await?;
    if actor.require_guildmaster(&guild).is_err() {
        rewards.retain(|reward| reward.is_active);
    }
    Ok(rewards)
}
