//! Template configuration, read from TOML.
//!
//! ```toml
//! placeholder = "unknown"
//! placement = "after"
//!
//! [population]
//! style = "grouped"
//! separator = ","
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where the shared populated-place rows go relative to the city rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Between the header row and the population row.
    Before,
    /// After the population row.
    #[default]
    After,
}

/// How population figures are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationStyle {
    /// Digits only: `3200000`.
    #[default]
    Plain,
    /// Digits in groups of three: `3,200,000`.
    Grouped,
}

/// Population formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PopulationFormat {
    /// Plain or grouped digits.
    pub style: PopulationStyle,
    /// Group separator used by [`PopulationStyle::Grouped`].
    pub separator: String,
}

impl Default for PopulationFormat {
    fn default() -> Self {
        Self {
            style: PopulationStyle::Plain,
            separator: ",".to_string(),
        }
    }
}

/// Options shared by the place templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Text shown when a fact is missing.
    pub placeholder: String,
    /// Position of the shared populated-place rows.
    pub placement: Placement,
    /// Population formatting.
    pub population: PopulationFormat,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            placeholder: "unknown".to_string(),
            placement: Placement::After,
            population: PopulationFormat::default(),
        }
    }
}

impl TemplateConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a key has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid template configuration")
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config: {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Cannot parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded template config");
        Ok(config)
    }
}
