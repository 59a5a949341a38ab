//! Domain entities - Core business objects with identity

mod character;
mod combat;
mod quest;

pub use character::Character;
pub use combat::CombatExchange;
pub use quest::{
    Choice, ChoiceDef, Objective, ObjectiveDef, QuestInstance, QuestStatus, QuestTemplate,
    QuestType,
};
