//! Shared application state

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::application::services::{QuestCatalog, QuestService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::session::SessionManager;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Immutable template registry, shared for the process lifetime
    pub catalog: Arc<QuestCatalog>,
    pub quest_service: QuestService,
    /// Active sessions; write lock serializes all per-session mutation
    pub sessions: RwLock<SessionManager>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = match &config.quest_catalog_path {
            Some(path) => Arc::new(QuestCatalog::with_file(path)?),
            None => Arc::new(QuestCatalog::builtin()),
        };
        let quest_service = QuestService::new(catalog.clone());
        let sessions = RwLock::new(SessionManager::new(
            config.default_attributes,
            config.default_level,
        ));

        Ok(Self {
            config,
            catalog,
            quest_service,
            sessions,
        })
    }
}
