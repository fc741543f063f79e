use tracing::{info, warn};

use crate::access::{load_character, mastered_guild};
use crate::commands::input::{amount, required_text};
use crate::dtos::{CreateQuestRequest, StartQuestRequest};
use crate::{Actor, AppError, AppState};
use backend_domain::{
    Approval, DomainError, EffectModifiers, NewQuest, Quest, QuestId, DEFAULT_DIFFICULTY,
    MAX_DIFFICULTY,
};

pub async fn create_quest(
    state: &AppState,
    actor: &Actor,
    payload: CreateQuestRequest,
) -> Result<Quest, AppError> {
    let guild_id = payload
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    let title = required_text(payload.title, "title")?;
    let description = required_text(payload.description, "description")?;
    let quest_type = required_text(payload.quest_type, "type")?;
    let rewards = payload
        .rewards
        .ok_or_else(|| AppError::BadRequest("rewards is required".to_string()))?;
    amount(rewards.experience, "rewards.experience")?;
    amount(rewards.bronze, "rewards.bronze")?;
    amount(rewards.silver, "rewards.silver")?;
    amount(rewards.gold, "rewards.gold")?;
    let difficulty = payload.difficulty.unwrap_or(DEFAULT_DIFFICULTY);
    if !(1..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(AppError::BadRequest(format!(
            "difficulty must be between 1 and {}",
            MAX_DIFFICULTY
        )));
    }

    mastered_guild(state, actor, guild_id).await?;

    let quest = state
        .quests
        .create_quest(NewQuest {
            guild_id,
            title,
            description,
            quest_type,
            difficulty,
            rewards,
            created_by: Some(actor.id()),
        })
        .await?;
    state.metrics.record_quest_created();
    info!(quest_id = %quest.id, guild_id = %guild_id, "quest created");
    Ok(quest)
}

pub async fn start_quest(
    state: &AppState,
    actor: &Actor,
    quest_id: QuestId,
    payload: StartQuestRequest,
) -> Result<Quest, AppError> {
    let character_id = payload
        .character_id
        .ok_or_else(|| AppError::BadRequest("characterId is required".to_string()))?;
    let quest = load_quest(state, quest_id).await?;
    let character = load_character(state, character_id).await?;
    if character.user_id != actor.id() {
        return Err(AppError::forbidden("not your character"));
    }
    if character.guild_id != quest.guild_id {
        return Err(AppError::not_found("quest"));
    }

    let effects = state.effects.list_effects(character_id, true).await?;
    if EffectModifiers::from_effects(&effects).restrictions.quests {
        warn!(character_id = %character_id, "quest pickup blocked by an active effect");
        return Err(DomainError::Restricted(
            "an active effect prevents taking new quests".to_string(),
        )
        .into());
    }

    let quest = state.quests.start_quest(quest_id, character_id).await?;
    info!(quest_id = %quest_id, character_id = %character_id, "quest started");
    Ok(quest)
}

pub async fn complete_quest(
    state: &AppState,
    actor: &Actor,
    quest_id: QuestId,
) -> Result<Quest, AppError> {
    let quest = load_quest(state, quest_id).await?;
    let assigned = quest
        .assigned_character_id
        .ok_or_else(|| AppError::forbidden("quest is not assigned to you"))?;
    let character = load_character(state, assigned).await?;
    if character.user_id != actor.id() {
        return Err(AppError::forbidden("quest is not assigned to you"));
    }

    let quest = state.quests.complete_quest(quest_id).await?;
    info!(quest_id = %quest_id, character_id = %assigned, "quest completed");
    Ok(quest)
}

pub async fn approve_quest(
    state: &AppState,
    actor: &Actor,
    quest_id: QuestId,
) -> Result<Approval, AppError> {
    let quest = load_quest(state, quest_id).await?;
    mastered_guild(state, actor, quest.guild_id).await?;

    let approval = state.quests.approve_quest(quest_id).await?;
    state.metrics.record_quest_approved();
    info!(
        quest_id = %quest_id,
        character_id = %approval.character.id,
        experience = approval.credited.experience,
        levels_gained = approval.credited.levels_gained,
        "quest approved"
    );
    Ok(approval)
}

pub async fn expire_quest(
    state: &AppState,
    actor: &Actor,
    quest_id: QuestId,
) -> Result<Quest, AppError> {
    let quest = load_quest(state, quest_id).await?;
    mastered_guild(state, actor, quest.guild_id).await?;

    let quest = state.quests.expire_quest(quest_id).await?;
    info!(quest_id = %quest_id, "quest expired");
    Ok(quest)
}

async fn load_quest(state: &AppState, quest_id: QuestId) -> Result<Quest, AppError> {
    state
        .quests
        .find_quest(quest_id)
        .await?
        .ok_or_else(|| AppError::not_found("quest"))
}
