use crate::access::load_character;
use crate::dtos::{CharacterQuery, GuildQuery};
use crate::{Actor, AppError, AppState};
use backend_domain::{Character, CharacterProfile};

pub const RECENT_ACTIVITY_LIMIT: usize = 10;

pub async fn get_character(
    state: &AppState,
    actor: &Actor,
    query: CharacterQuery,
) -> Result<CharacterProfile, AppError> {
    let character = match (query.character_id, query.user_id) {
        (Some(character_id), _) => load_character(state, character_id).await?,
        (None, Some(user_id)) => state
            .characters
            .find_character_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("character"))?,
        (None, None) => {
            return Err(AppError::BadRequest(
                "characterId or userId is required".to_string(),
            ))
        }
    };
    actor.require_member(character.guild_id)?;

    let active_effects = state.effects.list_effects(character.id, true).await?;
    let recent_activity = state
        .characters
        .recent_activity(character.id, RECENT_ACTIVITY_LIMIT)
        .await?;
    let achievements = state.characters.list_achievements(character.id).await?;
    Ok(CharacterProfile {
        character,
        active_effects,
        recent_activity,
        achievements,
    })
}

/// Player characters of a guild, strongest first.
pub async fn list_characters(
    state: &AppState,
    actor: &Actor,
    query: GuildQuery,
) -> Result<Vec<Character>, AppError> {
    let guild_id = query
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    actor.require_member(guild_id)?;
    Ok(state.characters.list_guild_players(guild_id).await?)
}
