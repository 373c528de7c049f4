//! Generator configuration types

use crate::error::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};

/// Shape of the generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputVariant {
    /// One `UPPER_SNAKE` constant per field holding the bare column name
    Flat,
    /// Table name, one quoted reference per field, identifier alias and
    /// aggregate column lists
    #[default]
    Qualified,
}

/// When column references are qualified with the table name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePrefixMode {
    /// Only for classes carrying the table-prefix marker
    #[default]
    Marker,
    /// For every class
    Always,
    /// For no class
    Never,
}

impl TablePrefixMode {
    /// Resolve the mode against the presence of the class marker
    pub fn applies(&self, class_has_marker: bool) -> bool {
        match self {
            TablePrefixMode::Marker => class_has_marker,
            TablePrefixMode::Always => true,
            TablePrefixMode::Never => false,
        }
    }
}

/// Generator configuration, usually read from `entitygen.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Artifact shape
    #[serde(default)]
    pub variant: OutputVariant,

    /// Prefix prepended to the entity's simple name to form the artifact
    /// class name
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,

    #[serde(default)]
    pub table_prefix: TablePrefixMode,
}

fn default_class_prefix() -> String {
    "Dc".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            variant: OutputVariant::default(),
            class_prefix: default_class_prefix(),
            table_prefix: TablePrefixMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; empty input yields the defaults
    pub fn from_toml_str(content: &str) -> GenerationResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> GenerationResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the class prefix can start a Java class name
    pub fn validate(&self) -> GenerationResult<()> {
        let valid = self
            .class_prefix
            .chars()
            .enumerate()
            .all(|(i, c)| c == '_' || c == '$' || c.is_alphabetic() || (i > 0 && c.is_numeric()));

        if !valid {
            return Err(GenerationError::InvalidConfig(format!(
                "class_prefix {:?} is not a valid identifier prefix",
                self.class_prefix
            )));
        }
        Ok(())
    }

    /// Name of the artifact class generated for an entity
    pub fn artifact_class_name(&self, simple_name: &str) -> String {
        format!("{}{}", self.class_prefix, simple_name)
    }
}
