//! Character entity - the single player character owned by a session

use serde::{Deserialize, Serialize};

use crate::domain::entities::{QuestInstance, QuestStatus};
use crate::domain::value_objects::{Attributes, DerivedAttributes, QuestId};

/// The player character for one session
///
/// `derived` is always the output of the attribute deriver for the current
/// (attributes, level) pair; it is replaced wholesale, never field-patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub attributes: Attributes,
    pub level: i32,
    pub derived: DerivedAttributes,
    /// Ordered quest log; instances are owned exclusively by this character
    pub quest_log: Vec<QuestInstance>,
}

impl Character {
    pub fn new(attributes: Attributes, level: i32, derived: DerivedAttributes) -> Self {
        Self {
            attributes,
            level,
            derived,
            quest_log: Vec::new(),
        }
    }

    /// Replace base attributes and level together with their derived block
    pub fn replace_attributes(
        &mut self,
        attributes: Attributes,
        level: i32,
        derived: DerivedAttributes,
    ) {
        self.attributes = attributes;
        self.level = level;
        self.derived = derived;
    }

    pub fn quest(&self, quest_id: QuestId) -> Option<&QuestInstance> {
        self.quest_log.iter().find(|q| q.quest_id == quest_id)
    }

    pub fn quest_mut(&mut self, quest_id: QuestId) -> Option<&mut QuestInstance> {
        self.quest_log.iter_mut().find(|q| q.quest_id == quest_id)
    }

    /// True if an Active instance of the given template is already in the log
    pub fn has_active_instance_of(&self, template_id: &str) -> bool {
        self.quest_log
            .iter()
            .any(|q| q.template_id == template_id && q.status == QuestStatus::Active)
    }

    pub fn count_with_status(&self, status: QuestStatus) -> usize {
        self.quest_log.iter().filter(|q| q.status == status).count()
    }
}
