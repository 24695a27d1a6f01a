//! Error types for conversion and generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting documents or generating navigation.
///
/// Malformed markup is never an error: the rewriter falls back to plain line
/// handling instead. Only file system, parsing and validation failures surface here.
#[derive(Debug, Error)]
pub enum DocsError {
    /// A source document or configuration file could not be read
    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination file or directory could not be created or written
    #[error("error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Cleaning the destination would remove the source tree
    #[error("refusing to clean {}: it contains the source directory", path.display())]
    UnsafeDestination { path: PathBuf },

    /// No configuration files were supplied
    #[error("at least one configuration file is required")]
    NoConfigFiles,

    /// A configuration file is not valid YAML for the site model
    #[error("error parsing config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema could not be loaded or compiled
    #[error("schema error: {0}")]
    Schema(String),

    /// The generated document does not satisfy the schema
    #[error("validation failed:\n{}", format_violations(.0))]
    SchemaViolations(Vec<String>),
}

fn format_violations(violations: &[String]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, DocsError>;
