//! Base and derived attribute value objects
//!
//! `Attributes` are the four caller-controlled base values. `DerivedAttributes`
//! are always computed from them by the attribute deriver and never set
//! directly; replacing a character's attributes recomputes the whole block.

use serde::{Deserialize, Serialize};

/// The four base attributes of a character
///
/// Values are validated non-negative at the point of derivation; the engine
/// enforces no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub might: i32,
    pub intellect: i32,
    pub will: i32,
    pub shadow: i32,
}

impl Attributes {
    pub fn new(might: i32, intellect: i32, will: i32, shadow: i32) -> Self {
        Self {
            might,
            intellect,
            will,
            shadow,
        }
    }

    /// True if every base value is non-negative
    pub fn is_valid(&self) -> bool {
        self.might >= 0 && self.intellect >= 0 && self.will >= 0 && self.shadow >= 0
    }
}

impl Default for Attributes {
    fn default() -> Self {
        // Starting spread for a fresh character
        Self::new(10, 10, 10, 0)
    }
}

/// Combat statistics computed from `Attributes` and level
///
/// Read-only by construction: the only producer is
/// `domain::services::attribute_deriver::derive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    pub health: i32,
    pub mana: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub mitigation: i32,
    pub attack_power: i32,
}
