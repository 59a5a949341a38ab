//! Combat routes

use axum::{
    extract::{Path, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::application::dto::{ApiResponse, CombatRequestDto, CombatResponseDto};
use crate::domain::services::combat_resolver;
use crate::domain::value_objects::SessionId;
use crate::infrastructure::http::{engine_error, parse_uuid, session_error, ApiError};
use crate::infrastructure::state::AppState;

/// Resolve one combat exchange; the session's character attacks
///
/// A request-supplied seed makes the outcome reproducible; without one the
/// handler draws a fresh entropy-seeded RNG for this exchange only.
pub async fn resolve_combat(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(req): Json<CombatRequestDto>,
) -> Result<Json<ApiResponse<CombatResponseDto>>, ApiError> {
    let session_id = SessionId::from_uuid(parse_uuid(&session_id, "session")?);

    let defender = req.defender.to_derived().map_err(engine_error)?;

    let sessions = state.sessions.read().await;
    let attacker = sessions.character(session_id).map_err(session_error)?.derived;
    drop(sessions);

    let mut rng = match req.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let exchange = combat_resolver::resolve(
        &attacker,
        &defender,
        req.weapon_damage,
        req.armor_value,
        &mut rng,
    )
    .map_err(engine_error)?;

    tracing::debug!(
        "Combat resolved for session {}: hit={} damage={}",
        session_id,
        exchange.hit_success,
        exchange.damage_dealt
    );

    Ok(Json(ApiResponse::ok(exchange.into())))
}
