//! Combat DTOs
//!
//! The session's character is always the attacker. The defender is supplied
//! in the request, either as a pre-derived stat block or as raw attributes
//! plus level to be derived server-side (opponents are not sessions).

use serde::{Deserialize, Serialize};

use crate::domain::entities::CombatExchange;
use crate::domain::error::EngineError;
use crate::domain::services::attribute_deriver;
use crate::domain::value_objects::DerivedAttributes;

use super::character::AttributesDto;

#[derive(Debug, Clone, Deserialize)]
pub struct CombatRequestDto {
    pub defender: DefenderDto,
    pub weapon_damage: i32,
    pub armor_value: i32,
    /// Optional seed for reproducible outcomes
    pub seed: Option<u64>,
}

/// Defender specification, one of two shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenderDto {
    /// Pre-derived stats, passed through unchanged
    Derived {
        health: i32,
        mana: i32,
        accuracy: i32,
        evasion: i32,
        mitigation: i32,
        attack_power: i32,
    },
    /// Raw attributes and level, derived before resolution
    Attributes {
        attributes: AttributesDto,
        level: i32,
    },
}

impl DefenderDto {
    /// Defender stats ready for resolution, deriving from raw attributes
    /// when that is the shape the caller sent
    pub fn to_derived(&self) -> Result<DerivedAttributes, EngineError> {
        match *self {
            Self::Derived {
                health,
                mana,
                accuracy,
                evasion,
                mitigation,
                attack_power,
            } => Ok(DerivedAttributes {
                health,
                mana,
                accuracy,
                evasion,
                mitigation,
                attack_power,
            }),
            Self::Attributes { attributes, level } => {
                attribute_deriver::derive(&attributes.into(), level)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CombatResponseDto {
    pub hit_success: bool,
    pub damage_dealt: i32,
    pub hit_chance: f64,
}

impl From<CombatExchange> for CombatResponseDto {
    fn from(e: CombatExchange) -> Self {
        Self {
            hit_success: e.hit_success,
            damage_dealt: e.damage_dealt,
            hit_chance: e.hit_chance,
        }
    }
}
