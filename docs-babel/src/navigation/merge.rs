//! Merging of several YAML configuration files.

use super::pages::clean_path;
use super::site::SiteConfig;
use crate::error::{DocsError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read one configuration file.
///
/// An empty (or whitespace-only) file yields the default configuration.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path).map_err(|source| DocsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|source| DocsError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and merge configuration files in order.
///
/// The first file provides every setting, including the global navigation. Tabs
/// from all files are concatenated in file order.
pub fn merge_configs<P: AsRef<Path>>(paths: &[P]) -> Result<SiteConfig> {
    let Some((first, rest)) = paths.split_first() else {
        return Err(DocsError::NoConfigFiles);
    };

    let mut merged = load_config(first.as_ref())?;
    debug!(
        "Loaded base config {} ({} tabs)",
        first.as_ref().display(),
        merged.navigation.tabs.len()
    );
    for path in rest {
        let config = load_config(path.as_ref())?;
        debug!(
            "Merging {} tabs from {}",
            config.navigation.tabs.len(),
            path.as_ref().display()
        );
        merged.navigation.tabs.extend(config.navigation.tabs);
    }
    Ok(merged)
}

/// Folders referenced by any group, cleaned of `.` segments and trailing `/`.
pub(crate) fn configured_folders(config: &SiteConfig) -> Vec<String> {
    let mut folders: Vec<String> = config
        .navigation
        .tabs
        .iter()
        .flat_map(|tab| &tab.groups)
        .map(|group| clean_path(&group.folder))
        .filter(|folder| !folder.is_empty())
        .collect();
    folders.sort();
    folders.dedup();
    folders
}
