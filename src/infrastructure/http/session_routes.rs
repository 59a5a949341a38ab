//! Session lifecycle routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    ApiResponse, CreateSessionRequestDto, SessionCreatedResponseDto,
};
use crate::domain::value_objects::SessionId;
use crate::infrastructure::http::{parse_uuid, session_error, ApiError};
use crate::infrastructure::state::AppState;

/// Create a session with a fresh character. The body is optional; an
/// empty request falls back to the configured defaults.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateSessionRequestDto>>,
) -> Result<(StatusCode, Json<ApiResponse<SessionCreatedResponseDto>>), ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let mut sessions = state.sessions.write().await;
    let (session_id, character) = sessions
        .create_session(req.attributes.map(Into::into), req.level)
        .map_err(session_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(SessionCreatedResponseDto::new(
            session_id, character,
        ))),
    ))
}

/// End a session, destroying its character and quest log
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let mut sessions = state.sessions.write().await;
    sessions.end_session(session_id).map_err(session_error)?;

    Ok(Json(ApiResponse::ok(())))
}
