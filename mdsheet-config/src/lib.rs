//! Shared configuration loader for the mdsheet toolchain.
//!
//! `defaults/mdsheet.default.toml` is embedded into every binary so the
//! module list, canonical section order and alias table ship with the
//! tool. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`SheetConfig`]. The pipeline
//! itself receives plain immutable data ([`SheetConfig::section_plan`]);
//! nothing downstream reads configuration globally.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use mdsheet_babel::SectionPlan;

const DEFAULT_TOML: &str = include_str!("../defaults/mdsheet.default.toml");

/// Top-level configuration consumed by mdsheet applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    pub batch: BatchConfig,
    pub datasheet: DatasheetConfig,
    pub publisher: PublisherConfig,
}

/// Which modules to process and where their files live.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Modules to generate datasheets for, in processing order.
    pub modules: Vec<String>,
    /// Modules that must never produce or overwrite an output file.
    pub skip: Vec<String>,
    /// Source file name inside each module directory.
    pub readme_name: String,
    /// Output subdirectory inside each module directory.
    pub output_dir: String,
}

/// Canonical datasheet structure and matching configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasheetConfig {
    pub sections: Vec<String>,
    pub placeholder: String,
    pub tagline: String,
    pub part_no: String,
    pub aliases: HashMap<String, Vec<String>>,
}

/// Publisher block appended to summary datasheets.
#[derive(Debug, Clone, Deserialize)]
pub struct PublisherConfig {
    pub default: String,
}

impl SheetConfig {
    /// The immutable section plan handed to the structural assembler.
    pub fn section_plan(&self) -> SectionPlan {
        SectionPlan {
            sections: self.datasheet.sections.clone(),
            aliases: self
                .datasheet
                .aliases
                .iter()
                .map(|(name, aliases)| (name.clone(), aliases.clone()))
                .collect(),
            placeholder: self.datasheet.placeholder.clone(),
            tagline: self.datasheet.tagline.clone(),
        }
    }

    /// Whether a module is on the permanent exclusion list.
    pub fn is_skipped(&self, module: &str) -> bool {
        self.batch.skip.iter().any(|m| m == module)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SheetConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SheetConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.batch.modules.len(), 9);
        assert!(config.is_skipped("MiniPLC"));
        assert!(!config.is_skipped("ALM-173-R1"));
        assert_eq!(config.datasheet.sections.len(), 13);
        assert_eq!(config.datasheet.sections[0], "Overview");
        assert_eq!(config.datasheet.sections[12], "Links");
        assert_eq!(config.batch.readme_name, "README.md");
        assert!(config.publisher.default.contains("ISYSTEMS"));
    }

    #[test]
    fn alias_table_feeds_the_section_plan() {
        let config = load_defaults().expect("defaults to deserialize");
        let plan = config.section_plan();
        let tech = plan.aliases_for("Tech Specs").expect("tech specs aliases");
        assert!(tech.iter().any(|a| a == "i/o summary"));
        let io = plan
            .aliases_for("Inputs & Outputs")
            .expect("inputs & outputs aliases");
        assert!(io.iter().any(|a| a == "i/o summary"));
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("datasheet.part_no", "0000042")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.datasheet.part_no, "0000042");
    }

    #[test]
    fn section_plan_preserves_configured_order() {
        let config = load_defaults().expect("defaults to deserialize");
        let plan = config.section_plan();
        assert_eq!(plan.sections, config.datasheet.sections);
        assert_eq!(plan.placeholder, "See module README for details.");
    }
}
