//! Character routes

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    ApiResponse, CharacterResponseDto, ReplaceAttributesRequestDto,
};
use crate::domain::value_objects::SessionId;
use crate::infrastructure::http::{parse_uuid, session_error, ApiError};
use crate::infrastructure::state::AppState;

/// Get the session's character with derived stats and quest log
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<CharacterResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let sessions = state.sessions.read().await;
    let character = sessions.character(session_id).map_err(session_error)?;

    Ok(Json(ApiResponse::ok(character.into())))
}

/// Replace the character's attributes and level, recomputing derived stats
pub async fn replace_attributes(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(req): Json<ReplaceAttributesRequestDto>,
) -> Result<Json<ApiResponse<CharacterResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let mut sessions = state.sessions.write().await;
    let character = sessions
        .replace_attributes(session_id, req.attributes.into(), req.level)
        .map_err(session_error)?;

    Ok(Json(ApiResponse::ok(character.into())))
}
