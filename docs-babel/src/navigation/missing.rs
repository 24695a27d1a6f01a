//! Detection of page files that no navigation group covers.

use super::merge::configured_folders;
use super::site::SiteConfig;
use super::GenerateOptions;
use crate::error::Result;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Page files under `root` that are not inside any configured group folder.
///
/// Hidden files and directories are skipped. Paths are relative to `root`, use
/// `/` separators and come back sorted.
pub fn find_unlisted_pages(
    config: &SiteConfig,
    root: &Path,
    options: &GenerateOptions,
) -> Result<Vec<String>> {
    let folders = configured_folders(config);
    let mut missing = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file()
            || entry.path().extension().and_then(|ext| ext.to_str())
                != Some(options.page_extension.as_str())
        {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let relative = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let covered = folders
            .iter()
            .any(|folder| relative.starts_with(&format!("{folder}/")));
        if !covered {
            missing.push(relative);
        }
    }

    missing.sort();
    Ok(missing)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
