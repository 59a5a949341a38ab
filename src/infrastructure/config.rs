//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::domain::value_objects::Attributes;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,
    /// Optional path to a JSON file of extra quest templates
    pub quest_catalog_path: Option<String>,
    /// Attributes for characters created without caller-supplied values
    pub default_attributes: Attributes,
    /// Level for characters created without a caller-supplied value
    pub default_level: i32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            quest_catalog_path: env::var("QUEST_CATALOG_PATH").ok(),
            default_attributes: Attributes::new(
                parse_attr("DEFAULT_MIGHT", 10)?,
                parse_attr("DEFAULT_INTELLECT", 10)?,
                parse_attr("DEFAULT_WILL", 10)?,
                parse_attr("DEFAULT_SHADOW", 0)?,
            ),
            default_level: env::var("DEFAULT_LEVEL")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .context("DEFAULT_LEVEL must be an integer")?,
        })
    }
}

fn parse_attr(var: &str, fallback: i32) -> Result<i32> {
    env::var(var)
        .unwrap_or_else(|_| fallback.to_string())
        .parse()
        .with_context(|| format!("{var} must be an integer"))
}
