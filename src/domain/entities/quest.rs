//! Quest entities - Immutable templates and live per-character instances
//!
//! A `QuestTemplate` is a definition loaded once into the catalog at startup
//! and shared for the process lifetime. A `QuestInstance` is one character's
//! live progress through a template; it references the template by id and is
//! owned exclusively by that character's quest log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ChoiceId, ObjectiveId, QuestId};

/// Immutable quest definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestTemplate {
    /// Unique template identifier, e.g. "main_001"
    pub template_id: String,
    pub title: String,
    pub quest_type: QuestType,
    /// Minimum character level required to start this quest
    pub level_requirement: i32,
    /// Ordered objective definitions
    pub objectives: Vec<ObjectiveDef>,
    /// Ordered choice definitions
    pub choices: Vec<ChoiceDef>,
}

impl QuestTemplate {
    pub fn new(
        template_id: impl Into<String>,
        title: impl Into<String>,
        quest_type: QuestType,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            title: title.into(),
            quest_type,
            level_requirement: 1,
            objectives: Vec::new(),
            choices: Vec::new(),
        }
    }

    pub fn with_level_requirement(mut self, level: i32) -> Self {
        self.level_requirement = level;
        self
    }

    pub fn with_objective(mut self, description: impl Into<String>, target_count: i32) -> Self {
        self.objectives.push(ObjectiveDef {
            description: description.into(),
            target_count,
        });
        self
    }

    pub fn with_choice(
        mut self,
        description: impl Into<String>,
        consequences: Vec<String>,
    ) -> Self {
        self.choices.push(ChoiceDef {
            description: description.into(),
            consequences,
        });
        self
    }
}

/// Definition of a countable sub-goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveDef {
    pub description: String,
    pub target_count: i32,
}

/// Definition of a one-time branching decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceDef {
    pub description: String,
    /// Consequence descriptors applied when the choice is made
    pub consequences: Vec<String>,
}

/// Kinds of quests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestType {
    /// Main storyline quest
    Main,
    /// Optional side quest
    Side,
    /// Limited-time event quest
    Event,
}

impl QuestType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Side => "Side",
            Self::Event => "Event",
        }
    }
}

/// Lifecycle of a quest instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Active,
    Completed,
    Failed,
}

impl QuestStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// One character's live progress through a quest template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestInstance {
    pub quest_id: QuestId,
    /// Non-owning reference to the catalog template
    pub template_id: String,
    pub title: String,
    pub status: QuestStatus,
    pub objectives: Vec<Objective>,
    pub choices: Vec<Choice>,
    pub started_at: DateTime<Utc>,
}

impl QuestInstance {
    /// Instantiate a fresh Active instance from a template
    pub fn from_template(template: &QuestTemplate) -> Self {
        Self {
            quest_id: QuestId::new(),
            template_id: template.template_id.clone(),
            title: template.title.clone(),
            status: QuestStatus::Active,
            objectives: template
                .objectives
                .iter()
                .map(|def| Objective {
                    objective_id: ObjectiveId::new(),
                    description: def.description.clone(),
                    target_count: def.target_count,
                    current_progress: 0,
                    completed: false,
                })
                .collect(),
            choices: template
                .choices
                .iter()
                .map(|def| Choice {
                    choice_id: ChoiceId::new(),
                    description: def.description.clone(),
                    consequences: def.consequences.clone(),
                    made: false,
                    consequences_applied: false,
                })
                .collect(),
            started_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }

    pub fn objective_mut(&mut self, id: ObjectiveId) -> Option<&mut Objective> {
        self.objectives.iter_mut().find(|o| o.objective_id == id)
    }

    pub fn choice_mut(&mut self, id: ChoiceId) -> Option<&mut Choice> {
        self.choices.iter_mut().find(|c| c.choice_id == id)
    }

    pub fn all_objectives_completed(&self) -> bool {
        self.objectives.iter().all(|o| o.completed)
    }

    pub fn all_choices_made(&self) -> bool {
        self.choices.iter().all(|c| c.made)
    }

    /// Completion rule for this instance in its current state
    ///
    /// Objective-bearing quests complete when every objective is done.
    /// Choice-only quests stay Active until every choice is made.
    pub fn completion_reached(&self) -> bool {
        if self.objectives.is_empty() {
            self.all_choices_made()
        } else {
            self.all_objectives_completed()
        }
    }
}

/// A countable sub-goal of a quest instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub objective_id: ObjectiveId,
    pub description: String,
    pub target_count: i32,
    pub current_progress: i32,
    pub completed: bool,
}

/// A one-time branching decision within a quest instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub choice_id: ChoiceId,
    pub description: String,
    pub consequences: Vec<String>,
    pub made: bool,
    pub consequences_applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> QuestTemplate {
        QuestTemplate::new("side_010", "The Ferryman's Toll", QuestType::Side)
            .with_level_requirement(2)
            .with_objective("Collect toll coins", 5)
            .with_choice("Pay the ferryman", vec!["reputation:ferrymen:+1".into()])
    }

    #[test]
    fn from_template_starts_active_with_zeroed_progress() {
        let instance = QuestInstance::from_template(&template());

        assert_eq!(instance.status, QuestStatus::Active);
        assert_eq!(instance.template_id, "side_010");
        assert_eq!(instance.objectives.len(), 1);
        assert_eq!(instance.objectives[0].current_progress, 0);
        assert!(!instance.objectives[0].completed);
        assert_eq!(instance.choices.len(), 1);
        assert!(!instance.choices[0].made);
        assert!(!instance.choices[0].consequences_applied);
    }

    #[test]
    fn completion_rule_tracks_objectives_when_present() {
        let mut instance = QuestInstance::from_template(&template());
        assert!(!instance.completion_reached());

        instance.objectives[0].current_progress = 5;
        instance.objectives[0].completed = true;
        // Choice still unmade, but objectives govern completion here
        assert!(instance.completion_reached());
    }

    #[test]
    fn choice_only_quest_completes_on_choices() {
        let choice_only = QuestTemplate::new("side_011", "A Quiet Word", QuestType::Side)
            .with_choice("Side with the smith", vec!["faction:smiths".into()])
            .with_choice("Side with the miller", vec!["faction:millers".into()]);
        let mut instance = QuestInstance::from_template(&choice_only);

        assert!(!instance.completion_reached());
        instance.choices[0].made = true;
        assert!(!instance.completion_reached());
        instance.choices[1].made = true;
        assert!(instance.completion_reached());
    }
}
