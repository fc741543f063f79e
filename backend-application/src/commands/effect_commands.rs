use tracing::info;

use crate::access::{load_character, mastered_guild};
use crate::commands::input::required_text;
use crate::dtos::{ApplyEffectRequest, SetDurationRequest};
use crate::{Actor, AppError, AppState};
use backend_domain::effects::{normalize_modifiers, parse_duration};
use backend_domain::{CharacterId, Effect, EffectId, EffectType, NewEffect};

/// Sets the remaining duration. The value is validated before anything is written.
pub async fn set_effect_duration(
    state: &AppState,
    actor: &Actor,
    effect_id: EffectId,
    payload: SetDurationRequest,
) -> Result<Effect, AppError> {
    let effect = state
        .effects
        .find_effect(effect_id)
        .await?
        .ok_or_else(|| AppError::not_found("effect"))?;
    let character = load_character(state, effect.character_id).await?;
    mastered_guild(state, actor, character.guild_id).await?;

    let raw = payload
        .duration
        .ok_or_else(|| AppError::BadRequest("duration is required".to_string()))?;
    let duration = parse_duration(&raw)?;

    let effect = state.effects.set_effect_duration(effect_id, duration).await?;
    info!(
        effect_id = %effect_id,
        duration = effect.duration,
        active = effect.is_active(),
        "effect duration updated"
    );
    Ok(effect)
}

pub async fn apply_effect(
    state: &AppState,
    actor: &Actor,
    character_id: CharacterId,
    payload: ApplyEffectRequest,
) -> Result<Effect, AppError> {
    let character = load_character(state, character_id).await?;
    mastered_guild(state, actor, character.guild_id).await?;

    let name = required_text(payload.name, "name")?;
    let effect_type = required_text(payload.effect_type, "type")?.parse::<EffectType>()?;
    let raw_duration = payload
        .duration
        .ok_or_else(|| AppError::BadRequest("duration is required".to_string()))?;
    let duration = parse_duration(&raw_duration)?;
    let modifiers =
        normalize_modifiers(payload.multipliers, payload.restrictions, payload.bonuses)?;

    let effect = state
        .effects
        .create_effect(NewEffect {
            character_id,
            name,
            effect_type,
            duration,
            multipliers: modifiers.multipliers,
            restrictions: modifiers.restrictions,
            bonuses: modifiers.bonuses,
        })
        .await?;
    info!(
        effect_id = %effect.id,
        character_id = %character_id,
        effect_type = %effect.effect_type,
        "effect applied"
    );
    Ok(effect)
}

/// One daily decay step over every active effect.
pub async fn decay_effects(state: &AppState) -> Result<u64, AppError> {
    let touched = state.effects.decay_effects().await?;
    state.metrics.record_effects_decayed(touched);
    info!(effects = touched, "effect decay sweep finished");
    Ok(touched)
}
