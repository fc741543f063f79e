use tracing::{info, warn};

use crate::access::{load_character, load_guild, mastered_guild};
use crate::commands::input::{amount, non_negative, required_text};
use crate::dtos::{CreateRewardRequest, GrantRequest, GrantResponse, PurchaseRequest};
use crate::{Actor, AppError, AppState};
use backend_domain::{
    normalize_optional_text, CharacterId, Currency, DomainError, EffectModifiers, Grant,
    NewReward, Purchase, PurchaseOrder, Reward, RewardId,
};

const DEFAULT_CATEGORY: &str = "general";

pub async fn create_reward(
    state: &AppState,
    actor: &Actor,
    payload: CreateRewardRequest,
) -> Result<Reward, AppError> {
    let guild_id = payload
        .guild_id
        .ok_or_else(|| AppError::BadRequest("guildId is required".to_string()))?;
    let name = required_text(payload.name, "name")?;
    let price = payload.price.unwrap_or_default();
    amount(price.bronze, "price.bronze")?;
    amount(price.silver, "price.silver")?;
    amount(price.gold, "price.gold")?;
    if price.bronze == 0 && price.silver == 0 && price.gold == 0 {
        return Err(AppError::BadRequest(
            "price must be positive in at least one currency".to_string(),
        ));
    }
    if let Some(stock) = payload.stock {
        non_negative(i64::from(stock), "stock")?;
    }

    mastered_guild(state, actor, guild_id).await?;

    let reward = state
        .rewards
        .create_reward(NewReward {
            guild_id,
            name,
            description: normalize_optional_text(payload.description),
            category: normalize_optional_text(payload.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            price,
            stock: payload.stock,
            is_active: payload.is_active.unwrap_or(true),
        })
        .await?;
    info!(reward_id = %reward.id, guild_id = %guild_id, "reward created");
    Ok(reward)
}

pub async fn purchase_reward(
    state: &AppState,
    actor: &Actor,
    reward_id: RewardId,
    payload: PurchaseRequest,
) -> Result<Purchase, AppError> {
    let character_id = payload
        .character_id
        .ok_or_else(|| AppError::BadRequest("characterId is required".to_string()))?;
    let currency = required_text(payload.currency, "currency")?.parse::<Currency>()?;
    let cost = payload
        .cost
        .ok_or_else(|| AppError::BadRequest("cost is required".to_string()))?;

    let character = load_character(state, character_id).await?;
    if character.user_id != actor.id() {
        return Err(AppError::forbidden("not your character"));
    }

    let effects = state.effects.list_effects(character_id, true).await?;
    if EffectModifiers::from_effects(&effects).restrictions.shop {
        warn!(character_id = %character_id, "purchase blocked by an active effect");
        return Err(DomainError::Restricted(
            "an active effect prevents shopping".to_string(),
        )
        .into());
    }

    let purchase = state
        .rewards
        .purchase_reward(PurchaseOrder {
            reward_id,
            character_id,
            currency,
            cost,
        })
        .await?;
    state.metrics.record_purchase();
    info!(
        reward_id = %reward_id,
        character_id = %character_id,
        currency = %currency,
        cost,
        "reward purchased"
    );
    Ok(purchase)
}

/// Direct credit from a guild master to one of their players.
pub async fn grant_reward(
    state: &AppState,
    actor: &Actor,
    character_id: CharacterId,
    payload: GrantRequest,
) -> Result<GrantResponse, AppError> {
    let character = load_character(state, character_id).await?;
    let guild = load_guild(state, character.guild_id).await?;
    actor.require_guildmaster(&guild)?;

    let grant = Grant {
        experience: amount(payload.experience, "experience")?,
        bronze: amount(payload.bronze, "bronze")?,
        silver: amount(payload.silver, "silver")?,
        gold: amount(payload.gold, "gold")?,
        reason: normalize_optional_text(payload.reason),
    };
    if grant.is_empty() {
        return Err(AppError::BadRequest(
            "grant must credit at least one amount".to_string(),
        ));
    }

    let (character, credited) = state.characters.grant(character_id, &grant).await?;
    info!(
        character_id = %character_id,
        bronze = credited.bronze,
        silver = credited.silver,
        gold = credited.gold,
        experience = credited.experience,
        "reward granted"
    );
    Ok(GrantResponse {
        character,
        credited,
    })
}
