//! Domain layer - Core game rules with no external dependencies
//!
//! This layer contains:
//! - Entities: Character, QuestTemplate, QuestInstance, CombatExchange
//! - Value Objects: Attributes, DerivedAttributes, typed ids
//! - Domain Services: attribute derivation, combat resolution (pure)
//! - Errors: the engine error taxonomy

pub mod entities;
pub mod error;
pub mod services;
pub mod value_objects;
