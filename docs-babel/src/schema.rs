//! JSON Schema validation of generated configs.
//!
//! Site configs reference their schema by URL. The generator never goes to the
//! network, so only local schemas are compiled: a remote reference has to be
//! paired with a local copy by the caller.

use crate::error::{DocsError, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a schema reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Local(PathBuf),
    Remote(String),
}

impl SchemaSource {
    /// Classify a `$schema` reference. `file://` URLs are treated as local paths.
    pub fn from_reference(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            SchemaSource::Remote(reference.to_string())
        } else {
            let path = reference.strip_prefix("file://").unwrap_or(reference);
            SchemaSource::Local(PathBuf::from(path))
        }
    }
}

/// A compiled schema.
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    /// Load and compile the schema stored at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DocsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&content).map_err(|e| {
            DocsError::Schema(format!("failed to parse {}: {e}", path.display()))
        })?;
        Self::from_value(&schema)
    }

    /// Compile an in-memory schema. The draft is taken from its `$schema` keyword.
    pub fn from_value(schema: &Value) -> Result<Self> {
        let compiled = JSONSchema::compile(schema)
            .map_err(|e| DocsError::Schema(format!("failed to compile schema: {e}")))?;
        Ok(Self { compiled })
    }

    /// Check `instance`, collecting every violation.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let violations = errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    let path = if path.is_empty() {
                        "root".to_string()
                    } else {
                        path
                    };
                    format!("{e} at '{path}'")
                })
                .collect();
            return Err(DocsError::SchemaViolations(violations));
        }
        Ok(())
    }
}
