use crate::dtos::QuestListQuery;
use crate::{Actor, AppError, AppState};
use backend_domain::{normalize_optional_text, Quest, QuestStatus};

pub async fn list_quests(
    state: &AppState,
    actor: &Actor,
    query: QuestListQuery,
) -> Result<Vec<Quest>, AppError> {
    let guild_id = query
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    let status = normalize_optional_text(query.status)
        .map(|raw| raw.parse::<QuestStatus>())
        .transpose()?;
    actor.require_member(guild_id)?;
    Ok(state.quests.list_quests(guild_id, status).await?)
}
