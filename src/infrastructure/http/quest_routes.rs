//! Quest routes - catalog lookups and the per-session quest lifecycle

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    AdvanceObjectiveRequestDto, AdvanceObjectiveResponseDto, ApiResponse, ChoiceOutcomeResponseDto,
    QuestInstanceResponseDto, QuestStatisticsResponseDto, QuestTemplateResponseDto,
    StartQuestRequestDto,
};
use crate::domain::error::EngineError;
use crate::domain::value_objects::{ChoiceId, ObjectiveId, QuestId, SessionId};
use crate::infrastructure::http::{engine_error, parse_uuid, session_error, ApiError};
use crate::infrastructure::state::AppState;

/// List every quest template in the catalog
pub async fn list_templates(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<QuestTemplateResponseDto>>> {
    let templates = state
        .catalog
        .list_templates()
        .iter()
        .map(QuestTemplateResponseDto::from)
        .collect();
    Json(ApiResponse::ok(templates))
}

/// Get one quest template by id
pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(template_id): Path<String>,
) -> Result<Json<ApiResponse<QuestTemplateResponseDto>>, ApiError> {
    let template = state
        .catalog
        .get_template(&template_id)
        .map_err(engine_error)?;
    Ok(Json(ApiResponse::ok(template.into())))
}

/// The session's full quest log
pub async fn list_quests(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<QuestInstanceResponseDto>>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let sessions = state.sessions.read().await;
    let character = sessions.character(session_id).map_err(session_error)?;
    let quests = character
        .quest_log
        .iter()
        .map(QuestInstanceResponseDto::from)
        .collect();

    Ok(Json(ApiResponse::ok(quests)))
}

/// One quest instance from the session's log
pub async fn get_quest(
    State(state): State<Arc<AppState>>,
    Path((session_id, quest_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<QuestInstanceResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);
    let quest_id = QuestId::from_uuid(parse_uuid(&quest_id, "quest")?);

    let sessions = state.sessions.read().await;
    let character = sessions.character(session_id).map_err(session_error)?;
    let quest = character
        .quest(quest_id)
        .ok_or_else(|| engine_error(EngineError::QuestNotFound(quest_id.to_string())))?;

    Ok(Json(ApiResponse::ok(quest.into())))
}

/// Start a quest from a template
pub async fn start_quest(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(req): Json<StartQuestRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<QuestInstanceResponseDto>>), ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let mut sessions = state.sessions.write().await;
    let character = sessions.character_mut(session_id).map_err(session_error)?;
    let instance = state
        .quest_service
        .start_quest(character, &req.template_id)
        .map_err(engine_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(instance.into())),
    ))
}

/// Add progress to one objective
pub async fn advance_objective(
    State(state): State<Arc<AppState>>,
    Path((session_id, quest_id, objective_id)): Path<(String, String, String)>,
    Json(req): Json<AdvanceObjectiveRequestDto>,
) -> Result<Json<ApiResponse<AdvanceObjectiveResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);
    let quest_id = QuestId::from_uuid(parse_uuid(&quest_id, "quest")?);
    let objective_id = ObjectiveId::from_uuid(parse_uuid(&objective_id, "objective")?);

    let mut sessions = state.sessions.write().await;
    let character = sessions.character_mut(session_id).map_err(session_error)?;
    let advance = state
        .quest_service
        .advance_objective(character, quest_id, objective_id, req.increment)
        .map_err(engine_error)?;

    Ok(Json(ApiResponse::ok(advance.into())))
}

/// Make a one-time choice
pub async fn make_choice(
    State(state): State<Arc<AppState>>,
    Path((session_id, quest_id, choice_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<ChoiceOutcomeResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);
    let quest_id = QuestId::from_uuid(parse_uuid(&quest_id, "quest")?);
    let choice_id = ChoiceId::from_uuid(parse_uuid(&choice_id, "choice")?);

    let mut sessions = state.sessions.write().await;
    let character = sessions.character_mut(session_id).map_err(session_error)?;
    let outcome = state
        .quest_service
        .make_choice(character, quest_id, choice_id)
        .map_err(engine_error)?;

    Ok(Json(ApiResponse::ok(outcome.into())))
}

/// Abandon an Active quest, marking it Failed
pub async fn abandon_quest(
    State(state): State<Arc<AppState>>,
    Path((session_id, quest_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);
    let quest_id = QuestId::from_uuid(parse_uuid(&quest_id, "quest")?);

    let mut sessions = state.sessions.write().await;
    let character = sessions.character_mut(session_id).map_err(session_error)?;
    state
        .quest_service
        .abandon_quest(character, quest_id)
        .map_err(engine_error)?;

    Ok(Json(ApiResponse::ok(())))
}

/// Aggregate quest statistics for the session
pub async fn quest_statistics(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<QuestStatisticsResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let sessions = state.sessions.read().await;
    let character = sessions.character(session_id).map_err(session_error)?;
    let stats = state.quest_service.statistics(character);

    Ok(Json(ApiResponse::ok(stats.into())))
}
