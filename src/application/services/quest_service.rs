//! Quest service - the quest instance state machine
//!
//! Owns no state itself: every operation takes the character whose quest log
//! is being read or mutated, looks templates up in the shared catalog, and
//! either completes or fails atomically. Quest instances move Active ->
//! Completed | Failed; objectives and choices are terminal once completed/made.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::QuestCatalog;
use crate::domain::entities::{Character, QuestInstance, QuestStatus};
use crate::domain::error::EngineError;
use crate::domain::value_objects::{ChoiceId, ObjectiveId, QuestId};

/// Result of advancing one objective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveAdvance {
    pub objective_completed: bool,
    /// True only on the call that transitioned the quest to Completed
    pub quest_completed: bool,
}

/// Result of making a choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOutcome {
    /// Consequences actually applied, exactly once
    pub consequences: Vec<String>,
    pub quest_completed: bool,
}

/// Per-character quest log aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestStatistics {
    pub active_count: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub level: i32,
}

pub struct QuestService {
    catalog: Arc<QuestCatalog>,
}

impl QuestService {
    pub fn new(catalog: Arc<QuestCatalog>) -> Self {
        Self { catalog }
    }

    /// Start a new quest instance from a template
    ///
    /// At most one Active instance per template per character. A template with
    /// neither objectives nor choices completes on the spot.
    pub fn start_quest<'c>(
        &self,
        character: &'c mut Character,
        template_id: &str,
    ) -> Result<&'c QuestInstance, EngineError> {
        let template = self.catalog.get_template(template_id)?;

        if character.level < template.level_requirement {
            return Err(EngineError::LevelTooLow {
                required: template.level_requirement,
                actual: character.level,
            });
        }
        if character.has_active_instance_of(template_id) {
            return Err(EngineError::AlreadyActive(template_id.to_string()));
        }

        let mut instance = QuestInstance::from_template(template);
        if instance.completion_reached() {
            // Nothing to do and nothing to decide
            instance.status = QuestStatus::Completed;
        }

        info!(
            "Quest started: '{}' ({}) as {}",
            template.title, template_id, instance.quest_id
        );
        let slot = character.quest_log.len();
        character.quest_log.push(instance);
        Ok(&character.quest_log[slot])
    }

    /// Add progress to one objective of an Active quest
    ///
    /// Progress clamps at the objective's target and never un-completes.
    /// Completing the last open objective transitions the quest to Completed;
    /// that transition is final and later calls fail with `QuestNotActive`.
    pub fn advance_objective(
        &self,
        character: &mut Character,
        quest_id: QuestId,
        objective_id: ObjectiveId,
        increment: i32,
    ) -> Result<ObjectiveAdvance, EngineError> {
        if increment <= 0 {
            return Err(EngineError::InvalidIncrement(increment));
        }

        let quest = character
            .quest_mut(quest_id)
            .ok_or_else(|| EngineError::QuestNotFound(quest_id.to_string()))?;
        if !quest.is_active() {
            return Err(EngineError::QuestNotActive(quest_id.to_string()));
        }

        let objective = quest
            .objective_mut(objective_id)
            .ok_or_else(|| EngineError::ObjectiveNotFound(objective_id.to_string()))?;

        objective.current_progress =
            (objective.current_progress.saturating_add(increment)).min(objective.target_count);
        let objective_completed = objective.current_progress == objective.target_count;
        objective.completed = objective_completed;

        debug!(
            "Objective {} progress {}/{} on quest {}",
            objective_id, objective.current_progress, objective.target_count, quest_id
        );

        let quest_completed = objective_completed && quest.all_objectives_completed();
        if quest_completed {
            quest.status = QuestStatus::Completed;
            info!("Quest completed: '{}' ({})", quest.title, quest_id);
        }

        Ok(ObjectiveAdvance {
            objective_completed,
            quest_completed,
        })
    }

    /// Make a one-time choice on an Active quest
    ///
    /// A repeated choice is a caller error (`ChoiceAlreadyMade`), never a
    /// silent no-op: consequences must apply exactly once. Choices only
    /// complete a quest whose template defines no objectives.
    pub fn make_choice(
        &self,
        character: &mut Character,
        quest_id: QuestId,
        choice_id: ChoiceId,
    ) -> Result<ChoiceOutcome, EngineError> {
        let quest = character
            .quest_mut(quest_id)
            .ok_or_else(|| EngineError::QuestNotFound(quest_id.to_string()))?;
        if !quest.is_active() {
            return Err(EngineError::QuestNotActive(quest_id.to_string()));
        }

        let choice = quest
            .choice_mut(choice_id)
            .ok_or_else(|| EngineError::ChoiceNotFound(choice_id.to_string()))?;
        if choice.made {
            return Err(EngineError::ChoiceAlreadyMade(choice_id.to_string()));
        }

        choice.made = true;
        choice.consequences_applied = true;
        let consequences = choice.consequences.clone();

        debug!(
            "Choice {} made on quest {}: {} consequence(s)",
            choice_id,
            quest_id,
            consequences.len()
        );

        let quest_completed = quest.objectives.is_empty() && quest.all_choices_made();
        if quest_completed {
            quest.status = QuestStatus::Completed;
            info!("Quest completed: '{}' ({})", quest.title, quest_id);
        }

        Ok(ChoiceOutcome {
            consequences,
            quest_completed,
        })
    }

    /// Mark an Active quest as Failed
    pub fn abandon_quest(
        &self,
        character: &mut Character,
        quest_id: QuestId,
    ) -> Result<(), EngineError> {
        let quest = character
            .quest_mut(quest_id)
            .ok_or_else(|| EngineError::QuestNotFound(quest_id.to_string()))?;
        if !quest.is_active() {
            return Err(EngineError::QuestNotActive(quest_id.to_string()));
        }

        quest.status = QuestStatus::Failed;
        info!("Quest abandoned: '{}' ({})", quest.title, quest_id);
        Ok(())
    }

    /// Aggregate the character's quest log; reads only
    pub fn statistics(&self, character: &Character) -> QuestStatistics {
        QuestStatistics {
            active_count: character.count_with_status(QuestStatus::Active),
            completed_count: character.count_with_status(QuestStatus::Completed),
            failed_count: character.count_with_status(QuestStatus::Failed),
            level: character.level,
        }
    }
}
