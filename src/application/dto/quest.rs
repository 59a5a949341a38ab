//! Quest DTOs - templates, instances, progress results, statistics

use serde::{Deserialize, Serialize};

use crate::application::services::{ChoiceOutcome, ObjectiveAdvance, QuestStatistics};
use crate::domain::entities::{
    Choice, ChoiceDef, Objective, ObjectiveDef, QuestInstance, QuestTemplate,
};

#[derive(Debug, Clone, Serialize)]
pub struct QuestTemplateResponseDto {
    pub template_id: String,
    pub title: String,
    pub quest_type: String,
    pub level_requirement: i32,
    pub objectives: Vec<ObjectiveDefDto>,
    pub choices: Vec<ChoiceDefDto>,
}

impl From<&QuestTemplate> for QuestTemplateResponseDto {
    fn from(t: &QuestTemplate) -> Self {
        Self {
            template_id: t.template_id.clone(),
            title: t.title.clone(),
            quest_type: t.quest_type.display_name().to_string(),
            level_requirement: t.level_requirement,
            objectives: t.objectives.iter().map(ObjectiveDefDto::from).collect(),
            choices: t.choices.iter().map(ChoiceDefDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveDefDto {
    pub description: String,
    pub target_count: i32,
}

impl From<&ObjectiveDef> for ObjectiveDefDto {
    fn from(def: &ObjectiveDef) -> Self {
        Self {
            description: def.description.clone(),
            target_count: def.target_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceDefDto {
    pub description: String,
    pub consequences: Vec<String>,
}

impl From<&ChoiceDef> for ChoiceDefDto {
    fn from(def: &ChoiceDef) -> Self {
        Self {
            description: def.description.clone(),
            consequences: def.consequences.clone(),
        }
    }
}

/// Body for `POST /api/sessions/{id}/quests`
#[derive(Debug, Clone, Deserialize)]
pub struct StartQuestRequestDto {
    pub template_id: String,
}

/// Body for objective advancement
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceObjectiveRequestDto {
    pub increment: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestInstanceResponseDto {
    pub quest_id: String,
    pub template_id: String,
    pub title: String,
    pub status: String,
    pub objectives: Vec<ObjectiveResponseDto>,
    pub choices: Vec<ChoiceResponseDto>,
    pub started_at: String,
}

impl From<&QuestInstance> for QuestInstanceResponseDto {
    fn from(q: &QuestInstance) -> Self {
        Self {
            quest_id: q.quest_id.to_string(),
            template_id: q.template_id.clone(),
            title: q.title.clone(),
            status: q.status.display_name().to_string(),
            objectives: q.objectives.iter().map(ObjectiveResponseDto::from).collect(),
            choices: q.choices.iter().map(ChoiceResponseDto::from).collect(),
            started_at: q.started_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveResponseDto {
    pub objective_id: String,
    pub description: String,
    pub target_count: i32,
    pub current_progress: i32,
    pub completed: bool,
}

impl From<&Objective> for ObjectiveResponseDto {
    fn from(o: &Objective) -> Self {
        Self {
            objective_id: o.objective_id.to_string(),
            description: o.description.clone(),
            target_count: o.target_count,
            current_progress: o.current_progress,
            completed: o.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResponseDto {
    pub choice_id: String,
    pub description: String,
    pub made: bool,
    pub consequences_applied: bool,
}

impl From<&Choice> for ChoiceResponseDto {
    fn from(c: &Choice) -> Self {
        Self {
            choice_id: c.choice_id.to_string(),
            description: c.description.clone(),
            made: c.made,
            consequences_applied: c.consequences_applied,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvanceObjectiveResponseDto {
    pub objective_completed: bool,
    pub quest_completed: bool,
}

impl From<ObjectiveAdvance> for AdvanceObjectiveResponseDto {
    fn from(a: ObjectiveAdvance) -> Self {
        Self {
            objective_completed: a.objective_completed,
            quest_completed: a.quest_completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOutcomeResponseDto {
    pub consequences: Vec<String>,
    pub quest_completed: bool,
}

impl From<ChoiceOutcome> for ChoiceOutcomeResponseDto {
    fn from(o: ChoiceOutcome) -> Self {
        Self {
            consequences: o.consequences,
            quest_completed: o.quest_completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestStatisticsResponseDto {
    pub active_count: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub level: i32,
}

impl From<QuestStatistics> for QuestStatisticsResponseDto {
    fn from(s: QuestStatistics) -> Self {
        Self {
            active_count: s.active_count,
            completed_count: s.completed_count,
            failed_count: s.failed_count,
            level: s.level,
        }
    }
}
