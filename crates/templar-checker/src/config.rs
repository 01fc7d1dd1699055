//! Checker configuration, loaded from the `[templates]` table of a TOML file.
//!
//! ```toml
//! [templates]
//! check-class-case-sensitivity = true
//!
//! [templates.type-aliases]
//! MyAlias = "int|string"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::aliases::TypeAliases;
use crate::error::ConfigError;

/// Settings for the template checks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CheckConfig {
    /// Report class references whose letter case differs from the declaration
    #[serde(default)]
    pub check_class_case_sensitivity: bool,

    /// Registered type aliases (name → target type)
    #[serde(default)]
    pub type_aliases: IndexMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    templates: CheckConfig,
}

impl CheckConfig {
    /// Create the default configuration: no case checks, no aliases
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        file.templates.validate()?;
        Ok(file.templates)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, target) in &self.type_aliases {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "type alias name cannot be empty".to_string(),
                ));
            }
            if target.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "type alias '{}' has an empty target",
                    name
                )));
            }
        }
        Ok(())
    }

    /// The configured aliases as a lookup table
    pub fn type_aliases(&self) -> TypeAliases {
        TypeAliases::from(self.type_aliases.clone())
    }
}
