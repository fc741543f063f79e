use axum::extract::State;
use axum::http::HeaderMap;

use backend_application::commands::effect_commands;
use backend_application::dtos::{ApplyEffectRequest, SetDurationRequest};
use backend_application::AppState;
use backend_domain::{CharacterId, Effect, EffectId};

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::authenticate;

pub async fn set_effect_duration(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(effect_id): ApiPath<EffectId>,
    ApiJson(payload): ApiJson<SetDurationRequest>,
) -> Result<ApiResponse<Effect>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let effect = effect_commands::set_effect_duration(&state, &actor, effect_id, payload).await?;
    Ok(ApiResponse::ok(effect))
}

pub async fn apply_effect(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(character_id): ApiPath<CharacterId>,
    ApiJson(payload): ApiJson<ApplyEffectRequest>,
) -> Result<ApiResponse<Effect>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let effect = effect_commands::apply_effect(&state, &actor, character_id, payload).await?;
    Ok(ApiResponse::created(effect))
}
