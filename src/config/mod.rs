//! # Demo Configuration
//!
//! Selects which variations of each family the demo runs, and in which order.
//! Both lists default to every variation, so an empty file runs everything.
//!
//! ```toml
//! furniture = ["Modern"]
//! database = ["Oracle", "MySQL"]
//! ```
//!
//! Variation names are the display names (`ArDeko`, `Modern`, `MySQL`,
//! `PostgreSQL`, `Oracle`). An empty list skips that family.

pub mod error;

pub use error::*;

use crate::database::DatabaseKind;
use crate::furniture::FurnitureStyle;
use factory_framework::Variation;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Variations to run for each family, in run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "all_styles")]
    pub furniture: Vec<FurnitureStyle>,
    #[serde(default = "all_kinds")]
    pub database: Vec<DatabaseKind>,
}

fn all_styles() -> Vec<FurnitureStyle> {
    FurnitureStyle::all().to_vec()
}

fn all_kinds() -> Vec<DatabaseKind> {
    DatabaseKind::all().to_vec()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            furniture: all_styles(),
            database: all_kinds(),
        }
    }
}

impl DemoConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading demo config");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_runs_everything() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.furniture, vec![FurnitureStyle::ArDeko, FurnitureStyle::Modern]);
        assert_eq!(config.database.len(), 3);
    }

    #[test]
    fn test_config_keeps_requested_order() {
        let config = DemoConfig::from_toml_str(
            r#"
            furniture = ["Modern"]
            database = ["Oracle", "MySQL"]
            "#,
        )
        .unwrap();

        assert_eq!(config.furniture, vec![FurnitureStyle::Modern]);
        assert_eq!(config.database, vec![DatabaseKind::Oracle, DatabaseKind::MySql]);
    }

    #[test]
    fn test_empty_list_skips_family() {
        let config = DemoConfig::from_toml_str("database = []").unwrap();
        assert!(config.database.is_empty());
        assert_eq!(config.furniture.len(), 2);
    }

    #[test]
    fn test_unknown_variation_is_rejected() {
        let result = DemoConfig::from_toml_str(r#"database = ["SQLite"]"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = DemoConfig::from_toml_str(r#"lighting = ["Neon"]"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DemoConfig::load("/definitely/not/here/demo.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
