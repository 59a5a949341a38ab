//! Application services - Engine use cases over the domain model

mod quest_catalog;
mod quest_service;

pub use quest_catalog::QuestCatalog;
pub use quest_service::{ChoiceOutcome, ObjectiveAdvance, QuestService, QuestStatistics};
