//! Quest catalog - immutable registry of quest templates
//!
//! Built once at startup (compiled-in defaults, optionally extended from a
//! JSON file) and shared read-only for the process lifetime, so concurrent
//! lookups need no synchronization.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::{QuestTemplate, QuestType};
use crate::domain::error::EngineError;

pub struct QuestCatalog {
    /// template_id -> index into `order`; insertion order preserved for listing
    index: HashMap<String, usize>,
    order: Vec<QuestTemplate>,
}

impl QuestCatalog {
    /// Catalog built from an explicit template list
    ///
    /// Later templates override earlier ones with the same `template_id`,
    /// keeping the original position.
    pub fn from_templates(templates: impl IntoIterator<Item = QuestTemplate>) -> Self {
        let mut catalog = Self {
            index: HashMap::new(),
            order: Vec::new(),
        };
        for template in templates {
            catalog.insert(template);
        }
        catalog
    }

    /// Catalog with the compiled-in default templates
    pub fn builtin() -> Self {
        Self::from_templates([
            QuestTemplate::new("intro_001", "First Steps", QuestType::Main)
                .with_level_requirement(1)
                .with_objective("Speak with the village elder", 1)
                .with_objective("Light the signal beacons", 3),
            QuestTemplate::new("main_001", "Embers of the Old War", QuestType::Main)
                .with_level_requirement(5)
                .with_objective("Recover war relics from the ashlands", 4)
                .with_objective("Defeat the cinder wraith", 1)
                .with_choice(
                    "Surrender the relics to the council",
                    vec![
                        "reputation:council:+2".to_string(),
                        "gold:+50".to_string(),
                    ],
                )
                .with_choice(
                    "Keep the relics hidden",
                    vec![
                        "item:war_relic".to_string(),
                        "reputation:council:-1".to_string(),
                    ],
                ),
            QuestTemplate::new("side_001", "Rats in the Cellar", QuestType::Side)
                .with_level_requirement(1)
                .with_objective("Clear rats from the tavern cellar", 3),
            QuestTemplate::new("side_002", "The Broker's Bargain", QuestType::Side)
                .with_level_requirement(3)
                .with_choice(
                    "Sell the ledger to the broker",
                    vec!["gold:+120".to_string(), "reputation:guild:-2".to_string()],
                )
                .with_choice(
                    "Return the ledger to the guild",
                    vec!["reputation:guild:+3".to_string()],
                ),
            QuestTemplate::new("event_001", "Nightmarket", QuestType::Event)
                .with_level_requirement(2)
                .with_objective("Trade with the night vendors", 2)
                .with_objective("Escort the lampwright home", 1),
        ])
    }

    /// Builtin catalog extended (or overridden per template_id) from a JSON file
    ///
    /// The file holds a JSON array of `QuestTemplate` records.
    pub fn with_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read quest catalog file {}", path.display()))?;
        let templates: Vec<QuestTemplate> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid quest catalog JSON in {}", path.display()))?;

        let mut catalog = Self::builtin();
        for template in templates {
            catalog.insert(template);
        }
        tracing::info!(
            "Quest catalog loaded: {} templates after merging {}",
            catalog.order.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn insert(&mut self, template: QuestTemplate) {
        if let Some(&existing) = self.index.get(&template.template_id) {
            self.order[existing] = template;
        } else {
            self.index
                .insert(template.template_id.clone(), self.order.len());
            self.order.push(template);
        }
    }

    /// All templates in insertion order
    pub fn list_templates(&self) -> &[QuestTemplate] {
        &self.order
    }

    pub fn get_template(&self, template_id: &str) -> Result<&QuestTemplate, EngineError> {
        self.index
            .get(template_id)
            .map(|&i| &self.order[i])
            .ok_or_else(|| EngineError::TemplateNotFound(template_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_resolves_known_templates() {
        let catalog = QuestCatalog::builtin();

        let main = catalog.get_template("main_001").unwrap();
        assert_eq!(main.level_requirement, 5);
        assert_eq!(main.objectives.len(), 2);
        assert_eq!(main.choices.len(), 2);

        assert!(catalog.get_template("side_001").is_ok());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn unknown_template_is_a_lookup_error() {
        let catalog = QuestCatalog::builtin();
        let err = catalog.get_template("no_such_quest").unwrap_err();
        assert_eq!(
            err,
            EngineError::TemplateNotFound("no_such_quest".to_string())
        );
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let catalog = QuestCatalog::builtin();
        let ids: Vec<&str> = catalog
            .list_templates()
            .iter()
            .map(|t| t.template_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["intro_001", "main_001", "side_001", "side_002", "event_001"]
        );
    }

    #[test]
    fn with_file_merges_and_overrides_from_json() {
        let path = std::env::temp_dir().join(format!(
            "emberfall-catalog-{}.json",
            uuid::Uuid::new_v4()
        ));
        let json = r#"[
            {
                "template_id": "side_001",
                "title": "Bigger Rats",
                "quest_type": "side",
                "level_requirement": 1,
                "objectives": [
                    {"description": "Clear rats from the tavern cellar", "target_count": 6}
                ],
                "choices": []
            },
            {
                "template_id": "file_001",
                "title": "The Courier's Route",
                "quest_type": "side",
                "level_requirement": 2,
                "objectives": [
                    {"description": "Deliver parcels across the ward", "target_count": 2}
                ],
                "choices": [
                    {"description": "Pocket the undeliverable parcel", "consequences": ["gold:+10"]}
                ]
            }
        ]"#;
        std::fs::write(&path, json).unwrap();

        let catalog = QuestCatalog::with_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // Override replaces the builtin in place
        let side = catalog.get_template("side_001").unwrap();
        assert_eq!(side.title, "Bigger Rats");
        assert_eq!(side.objectives[0].target_count, 6);

        // New template is appended after the builtins
        let added = catalog.get_template("file_001").unwrap();
        assert_eq!(added.choices.len(), 1);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn with_file_surfaces_a_missing_file() {
        assert!(QuestCatalog::with_file("/nonexistent/emberfall-catalog.json").is_err());
    }

    #[test]
    fn file_templates_override_builtin_by_id() {
        let mut catalog = QuestCatalog::builtin();
        let replacement =
            QuestTemplate::new("side_001", "Bigger Rats", QuestType::Side).with_objective(
                "Clear rats from the tavern cellar",
                6,
            );
        catalog.insert(replacement);

        let template = catalog.get_template("side_001").unwrap();
        assert_eq!(template.title, "Bigger Rats");
        assert_eq!(template.objectives[0].target_count, 6);
        // Override keeps the original position and count
        assert_eq!(catalog.len(), 5);
    }
}
