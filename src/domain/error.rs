//! Engine error taxonomy
//!
//! Four families of caller-visible errors: validation (bad input shape or
//! range), state (misuse of the quest state machine), lookup (unresolvable
//! ids), and precondition (requirements not met). None of these are retried
//! internally; anything outside this taxonomy is a defect and propagates as
//! an unexpected fault at the boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    // Validation
    #[error("Invalid attributes: all base attributes must be non-negative")]
    InvalidAttributes,

    #[error("Invalid level: {0} (must be at least 1)")]
    InvalidLevel(i32),

    #[error("Invalid increment: {0} (must be positive)")]
    InvalidIncrement(i32),

    #[error("Invalid combat input: {0}")]
    InvalidCombatInput(String),

    // State machine misuse
    #[error("Quest {0} is not active")]
    QuestNotActive(String),

    #[error("Quest template '{0}' already has an active instance")]
    AlreadyActive(String),

    #[error("Choice {0} has already been made")]
    ChoiceAlreadyMade(String),

    // Lookup
    #[error("Quest template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Quest {0} not found")]
    QuestNotFound(String),

    #[error("Objective {0} not found")]
    ObjectiveNotFound(String),

    #[error("Choice {0} not found")]
    ChoiceNotFound(String),

    // Precondition
    #[error("Level too low: quest requires level {required}, character is level {actual}")]
    LevelTooLow { required: i32, actual: i32 },
}

impl EngineError {
    /// Short machine-readable code for the boundary envelope
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAttributes => "INVALID_ATTRIBUTES",
            Self::InvalidLevel(_) => "INVALID_LEVEL",
            Self::InvalidIncrement(_) => "INVALID_INCREMENT",
            Self::InvalidCombatInput(_) => "INVALID_COMBAT_INPUT",
            Self::QuestNotActive(_) => "QUEST_NOT_ACTIVE",
            Self::AlreadyActive(_) => "ALREADY_ACTIVE",
            Self::ChoiceAlreadyMade(_) => "CHOICE_ALREADY_MADE",
            Self::TemplateNotFound(_) => "TEMPLATE_NOT_FOUND",
            Self::QuestNotFound(_) => "QUEST_NOT_FOUND",
            Self::ObjectiveNotFound(_) => "OBJECTIVE_NOT_FOUND",
            Self::ChoiceNotFound(_) => "CHOICE_NOT_FOUND",
            Self::LevelTooLow { .. } => "LEVEL_TOO_LOW",
        }
    }

    /// True for the lookup family (404-equivalent at the boundary)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TemplateNotFound(_)
                | Self::QuestNotFound(_)
                | Self::ObjectiveNotFound(_)
                | Self::ChoiceNotFound(_)
        )
    }
}
