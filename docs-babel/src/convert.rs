//! Directory tree conversion
//!
//! Maps every Markdown document under a source root to an MDX document at the
//! same relative location under a destination root. Documents are converted one
//! at a time and the first failure aborts the run.

use crate::error::{DocsError, Result};
use crate::mdx::convert_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Knobs for [`convert_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Extension (without dot) of documents to convert
    pub source_extension: String,
    /// Extension (without dot) written to the destination
    pub target_extension: String,
    /// Documents whose relative path contains this string are skipped
    pub skip_marker: String,
    /// Remove and recreate the destination root before converting
    pub clean_destination: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            source_extension: "md".to_string(),
            target_extension: "mdx".to_string(),
            skip_marker: "_index.md".to_string(),
            clean_destination: true,
        }
    }
}

/// One converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of a tree conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub converted: Vec<ConvertedFile>,
    /// Root-relative paths of skipped documents
    pub skipped: Vec<PathBuf>,
}

impl ConvertReport {
    pub fn converted_count(&self) -> usize {
        self.converted.len()
    }
}

/// Convert every matching document below `src_root` into `dst_root`.
pub fn convert_tree(
    src_root: &Path,
    dst_root: &Path,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    info!(
        "Converting docs from {} to {}",
        src_root.display(),
        dst_root.display()
    );

    if options.clean_destination {
        ensure_safe_to_clean(src_root, dst_root)?;
        match fs::remove_dir_all(dst_root) {
            Ok(()) => debug!("Removed {}", dst_root.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(DocsError::Write {
                    path: dst_root.to_path_buf(),
                    source,
                })
            }
        }
    }
    create_dir(dst_root)?;

    let mut report = ConvertReport::default();
    for entry in WalkDir::new(src_root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, &options.source_extension) {
            continue;
        }

        let relative = path.strip_prefix(src_root).unwrap_or(path);
        if relative.to_string_lossy().contains(&options.skip_marker) {
            info!("Skipping {}", relative.display());
            report.skipped.push(relative.to_path_buf());
            continue;
        }

        let target_relative = relative.with_extension(&options.target_extension);
        let destination = dst_root.join(&target_relative);
        if let Some(parent) = destination.parent() {
            create_dir(parent)?;
        }

        info!(
            "Converting {} -> {}",
            relative.display(),
            target_relative.display()
        );
        convert_file(path, &destination)?;
        report.converted.push(ConvertedFile {
            source: path.to_path_buf(),
            destination,
        });
    }

    Ok(report)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| DocsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Cleaning a destination that is, or contains, the source would wipe the input.
fn ensure_safe_to_clean(src_root: &Path, dst_root: &Path) -> Result<()> {
    let (Ok(src), Ok(dst)) = (src_root.canonicalize(), dst_root.canonicalize()) else {
        return Ok(());
    };
    if src.starts_with(&dst) {
        return Err(DocsError::UnsafeDestination {
            path: dst_root.to_path_buf(),
        });
    }
    Ok(())
}
