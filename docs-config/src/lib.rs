//! Shared configuration loader for the docs toolchain.
//!
//! `defaults/docs.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DocsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use docs_babel::{ConvertOptions, GenerateOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docs.default.toml");

/// Top-level configuration consumed by docs applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    pub convert: ConvertConfig,
    pub generate: GenerateConfig,
}

/// Markdown tree conversion settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub source_extension: String,
    pub target_extension: String,
    pub skip_marker: String,
    pub clean_destination: bool,
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            source_extension: config.source_extension.clone(),
            target_extension: config.target_extension.clone(),
            skip_marker: config.skip_marker.clone(),
            clean_destination: config.clean_destination,
        }
    }
}

/// Navigation config generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    pub page_extension: String,
    pub scan_folders: bool,
    pub validate: bool,
    pub schema_path: Option<String>,
}

impl From<&GenerateConfig> for GenerateOptions {
    fn from(config: &GenerateConfig) -> Self {
        GenerateOptions {
            page_extension: config.page_extension.clone(),
            scan_folders: config.scan_folders,
        }
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocsConfig, ConfigError> {
    Loader::new().build()
}
