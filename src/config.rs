//! Demo runner configuration, read from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! sections = ["collections", "pipelines"]
//! sample = [1, 2, 3, 4, 5, 6, 7]
//! chunk_size = 3
//! take = 3
//! color = true
//!
//! [window]
//! size = 3
//! step = 2
//! partial = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::sequences::WindowSpec;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// One printed group of demonstrations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Collections,
    Pipelines,
    People,
    Delegation,
    Generics,
    Variants,
    ValueTypes,
    Builders,
    Reflection,
    Calculator,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Collections,
        Section::Pipelines,
        Section::People,
        Section::Delegation,
        Section::Generics,
        Section::Variants,
        Section::ValueTypes,
        Section::Builders,
        Section::Reflection,
        Section::Calculator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Collections => "collections",
            Section::Pipelines => "pipelines",
            Section::People => "people",
            Section::Delegation => "delegation",
            Section::Generics => "generics",
            Section::Variants => "variants",
            Section::ValueTypes => "value-types",
            Section::Builders => "builders",
            Section::Reflection => "reflection",
            Section::Calculator => "calculator",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Collections => "Collections and Functional Operations",
            Section::Pipelines => "Lazy Pipelines",
            Section::People => "Grouping and Partitioning Records",
            Section::Delegation => "Delegated Properties",
            Section::Generics => "Generics and Type Safety",
            Section::Variants => "Sum Types and Pattern Matching",
            Section::ValueTypes => "Zero-Cost Wrapper Types",
            Section::Builders => "Builder DSL",
            Section::Reflection => "Runtime Type Description",
            Section::Calculator => "Calculator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub size: usize,
    pub step: usize,
    pub partial: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: 3,
            step: 2,
            partial: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub sections: Vec<Section>,
    pub sample: Vec<i32>,
    pub chunk_size: usize,
    pub take: usize,
    pub window: WindowConfig,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            sample: (1..=7).collect(),
            chunk_size: 3,
            take: 3,
            window: WindowConfig::default(),
            color: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::invalid("chunk_size", "must be at least 1"));
        }
        self.window_spec()
            .validate()
            .map_err(|err| ConfigError::invalid("window", err.to_string()))?;

        let duplicates: Vec<&str> = self
            .sections
            .iter()
            .duplicates()
            .map(|section| section.name())
            .collect();
        if !duplicates.is_empty() {
            return Err(ConfigError::invalid(
                "sections",
                format!("listed more than once: {}", duplicates.join(", ")),
            ));
        }
        Ok(())
    }

    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec::new(self.window.size, self.window.step).partial(self.window.partial)
    }
}
