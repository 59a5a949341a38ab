//! Session and character DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entities::Character;
use crate::domain::value_objects::{Attributes, DerivedAttributes, SessionId};

use super::quest::QuestInstanceResponseDto;

/// Body for `POST /api/sessions`; omitted fields use configured defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequestDto {
    pub attributes: Option<AttributesDto>,
    pub level: Option<i32>,
}

/// Body for `PUT /api/sessions/{id}/character/attributes`
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceAttributesRequestDto {
    pub attributes: AttributesDto,
    pub level: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttributesDto {
    pub might: i32,
    pub intellect: i32,
    pub will: i32,
    pub shadow: i32,
}

impl From<AttributesDto> for Attributes {
    fn from(dto: AttributesDto) -> Self {
        Attributes::new(dto.might, dto.intellect, dto.will, dto.shadow)
    }
}

impl From<Attributes> for AttributesDto {
    fn from(a: Attributes) -> Self {
        Self {
            might: a.might,
            intellect: a.intellect,
            will: a.will,
            shadow: a.shadow,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DerivedAttributesDto {
    pub health: i32,
    pub mana: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub mitigation: i32,
    pub attack_power: i32,
}

impl From<DerivedAttributes> for DerivedAttributesDto {
    fn from(d: DerivedAttributes) -> Self {
        Self {
            health: d.health,
            mana: d.mana,
            accuracy: d.accuracy,
            evasion: d.evasion,
            mitigation: d.mitigation,
            attack_power: d.attack_power,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponseDto {
    pub attributes: AttributesDto,
    pub level: i32,
    pub derived: DerivedAttributesDto,
    pub quest_log: Vec<QuestInstanceResponseDto>,
}

impl From<&Character> for CharacterResponseDto {
    fn from(character: &Character) -> Self {
        Self {
            attributes: character.attributes.into(),
            level: character.level,
            derived: character.derived.into(),
            quest_log: character
                .quest_log
                .iter()
                .map(QuestInstanceResponseDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponseDto {
    pub session_id: String,
    pub character: CharacterResponseDto,
}

impl SessionCreatedResponseDto {
    pub fn new(session_id: SessionId, character: &Character) -> Self {
        Self {
            session_id: session_id.to_string(),
            character: character.into(),
        }
    }
}
