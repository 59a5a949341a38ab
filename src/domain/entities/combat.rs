//! Combat exchange result - ephemeral, never stored

use serde::{Deserialize, Serialize};

/// Outcome of a single resolved combat exchange
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatExchange {
    pub hit_success: bool,
    /// Damage actually dealt; 0 on a miss, never negative
    pub damage_dealt: i32,
    /// The clamped hit probability used for the roll
    pub hit_chance: f64,
}
