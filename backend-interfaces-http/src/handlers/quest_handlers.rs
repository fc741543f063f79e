use axum::extract::State;
use axum::http::HeaderMap;

use backend_application::commands::quest_commands;
use backend_application::dtos::{CreateQuestRequest, QuestListQuery, StartQuestRequest};
use backend_application::queries::quest_queries;
use backend_application::AppState;
use backend_domain::{Approval, Quest, QuestId};

use crate::envelope::ApiResponse;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::authenticate;

pub async fn list_quests(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<QuestListQuery>,
) -> Result<ApiResponse<Vec<Quest>>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let quests = quest_queries::list_quests(&state, &actor, query).await?;
    Ok(ApiResponse::ok(quests))
}

pub async fn create_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateQuestRequest>,
) -> Result<ApiResponse<Quest>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let quest = quest_commands::create_quest(&state, &actor, payload).await?;
    Ok(ApiResponse::created(quest))
}

pub async fn start_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(quest_id): ApiPath<QuestId>,
    ApiJson(payload): ApiJson<StartQuestRequest>,
) -> Result<ApiResponse<Quest>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let quest = quest_commands::start_quest(&state, &actor, quest_id, payload).await?;
    Ok(ApiResponse::ok(quest))
}

pub async fn complete_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(quest_id): ApiPath<QuestId>,
) -> Result<ApiResponse<Quest>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let quest = quest_commands::complete_quest(&state, &actor, quest_id).await?;
    Ok(ApiResponse::ok(quest))
}

pub async fn approve_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(quest_id): ApiPath<QuestId>,
) -> Result<ApiResponse<Approval>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let approval = quest_commands::approve_quest(&state, &actor, quest_id).await?;
    Ok(ApiResponse::ok(approval))
}

pub async fn expire_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(quest_id): ApiPath<QuestId>,
) -> Result<ApiResponse<Quest>, HttpError> {
    let actor = authenticate(&state, &headers).await?;
    let quest = quest_commands::expire_quest(&state, &actor, quest_id).await?;
    Ok(ApiResponse::ok(quest))
}
