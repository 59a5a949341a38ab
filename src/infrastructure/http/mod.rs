//! HTTP REST API routes
//!
//! Thin boundary over the engine: every handler resolves the target session,
//! invokes exactly one engine operation, and wraps the result in the uniform
//! `ApiResponse` envelope. Status mapping: 400 validation/state/precondition,
//! 401 unknown session, 404 lookups, 500 anything outside the taxonomy.

mod character_routes;
mod combat_routes;
mod quest_routes;
mod session_routes;

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::ApiResponse;
use crate::domain::error::EngineError;
use crate::infrastructure::session::SessionError;
use crate::infrastructure::state::AppState;

/// Envelope-carrying error tuple returned by all handlers
pub(crate) type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub(crate) fn engine_error(e: EngineError) -> ApiError {
    let status = if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(ApiResponse::error(e.code(), e.to_string())))
}

pub(crate) fn session_error(e: SessionError) -> ApiError {
    match e {
        SessionError::NotFound(_) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("NO_SESSION", e.to_string())),
        ),
        SessionError::Engine(engine) => engine_error(engine),
    }
}

pub(crate) fn parse_uuid(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "INVALID_ID",
                format!("Invalid {what} ID format: {raw}"),
            )),
        )
    })
}

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(session_routes::create_session))
        .route(
            "/api/sessions/{session_id}",
            delete(session_routes::end_session),
        )
        // Character
        .route(
            "/api/sessions/{session_id}/character",
            get(character_routes::get_character),
        )
        .route(
            "/api/sessions/{session_id}/character/attributes",
            put(character_routes::replace_attributes),
        )
        // Combat
        .route(
            "/api/sessions/{session_id}/combat/resolve",
            post(combat_routes::resolve_combat),
        )
        // Quest catalog
        .route("/api/quests/templates", get(quest_routes::list_templates))
        .route(
            "/api/quests/templates/{template_id}",
            get(quest_routes::get_template),
        )
        // Quest log
        .route(
            "/api/sessions/{session_id}/quests",
            get(quest_routes::list_quests),
        )
        .route(
            "/api/sessions/{session_id}/quests",
            post(quest_routes::start_quest),
        )
        .route(
            "/api/sessions/{session_id}/quests/statistics",
            get(quest_routes::quest_statistics),
        )
        .route(
            "/api/sessions/{session_id}/quests/{quest_id}",
            get(quest_routes::get_quest),
        )
        .route(
            "/api/sessions/{session_id}/quests/{quest_id}/objectives/{objective_id}/advance",
            post(quest_routes::advance_objective),
        )
        .route(
            "/api/sessions/{session_id}/quests/{quest_id}/choices/{choice_id}",
            post(quest_routes::make_choice),
        )
        .route(
            "/api/sessions/{session_id}/quests/{quest_id}/abandon",
            post(quest_routes::abandon_quest),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use crate::domain::value_objects::Attributes;
    use crate::infrastructure::config::AppConfig;

    fn app() -> Router {
        let config = AppConfig {
            server_port: 0,
            quest_catalog_path: None,
            default_attributes: Attributes::default(),
            default_level: 1,
        };
        let state = Arc::new(AppState::new(config).unwrap());
        create_routes().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_session_without_a_body_uses_defaults() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["character"]["level"], 1);
        assert_eq!(json["data"]["character"]["attributes"]["might"], 10);
    }

    #[tokio::test]
    async fn create_session_with_a_body_reflects_the_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sessions")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"attributes":{"might":15,"intellect":12,"will":10,"shadow":0},"level":5}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["character"]["level"], 5);
        assert_eq!(json["data"]["character"]["attributes"]["might"], 15);
    }

    #[tokio::test]
    async fn unknown_session_maps_to_unauthorized_envelope() {
        let uri = format!("/api/sessions/{}/character", Uuid::new_v4());
        let response = app()
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "NO_SESSION");
    }
}
