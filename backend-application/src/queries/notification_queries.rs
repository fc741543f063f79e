use crate::dtos::NotificationQuery;
use crate::{Actor, AppError, AppState};
use backend_domain::NotificationCounts;

/// Open quests of the guild plus the caller's own in-progress quests and unused items.
pub async fn notification_counts(
    state: &AppState,
    actor: &Actor,
    query: NotificationQuery,
) -> Result<NotificationCounts, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId is required".to_string()))?;
    let guild_id = query
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    actor.require_self(user_id)?;
    actor.require_member(guild_id)?;

    let character_id = state
        .characters
        .find_character_by_user(user_id)
        .await?
        .filter(|character| character.guild_id == guild_id)
        .map(|character| character.id);
    Ok(state
        .characters
        .notification_counts(guild_id, character_id)
        .await?)
}
