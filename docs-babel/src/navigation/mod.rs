//! Navigation config generation
//!
//! Turns one or more YAML site configurations into the single JSON document the
//! docs platform reads.
//!
//! # Pipeline
//!
//!     YAML files ──merge_configs──▶ SiteConfig ──generate──▶ DocsJson ──▶ JSON
//!
//! Merging takes every setting from the first file and concatenates navigation tabs
//! across files. Generation walks tabs and groups; each group either lists its pages
//! explicitly (with nested subgroups) or, when folder scanning is enabled, is filled
//! from the page files of its folder.
//!
//! # Page Paths
//!
//! Page references are site-relative paths without extension, e.g. `guides/intro`
//! for `guides/intro.mdx`. A group's `folder` is prepended to listed pages that do
//! not already start with it.

pub mod docs_json;
pub mod merge;
pub mod missing;
pub mod pages;
pub mod scan;
pub mod site;

pub use docs_json::{DocsJson, Group, NavPage, Navigation, Tab};
pub use merge::{load_config, merge_configs};
pub use missing::find_unlisted_pages;
pub use pages::resolve_pages;
pub use scan::{scan_folder, scan_subdirectory};
pub use site::{GroupConfig, PageEntry, SiteConfig, TabConfig};

use tracing::{debug, error};

/// Knobs for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Extension (without dot) of page files
    pub page_extension: String,
    /// Fill groups that have a folder but no pages from the folder contents
    pub scan_folders: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            page_extension: "mdx".to_string(),
            scan_folders: false,
        }
    }
}

/// Build the output document from a merged configuration.
///
/// Groups that resolve to nothing are left out. A folder scan that fails is
/// reported and only drops its own group.
pub fn generate(config: &SiteConfig, options: &GenerateOptions) -> DocsJson {
    let tabs = config
        .navigation
        .tabs
        .iter()
        .map(|tab| Tab {
            tab: tab.tab.clone(),
            icon: tab.icon.clone(),
            groups: tab
                .groups
                .iter()
                .filter_map(|group| generate_group(group, options))
                .collect(),
        })
        .collect();

    DocsJson {
        schema: config.schema.clone(),
        theme: config.theme.clone(),
        name: config.name.clone(),
        colors: config.colors.clone(),
        favicon: config.favicon.clone(),
        banner: config.banner.clone(),
        contextual: config.contextual.clone(),
        logo: config.logo.clone(),
        navbar: config.navbar.clone(),
        footer: config.footer.clone(),
        integrations: config.integrations.clone(),
        redirects: config.redirects.clone(),
        navigation: Navigation {
            tabs,
            global: config.navigation.global.clone(),
        },
    }
}

fn generate_group(group: &GroupConfig, options: &GenerateOptions) -> Option<Group> {
    let pages = if !group.pages.is_empty() {
        resolve_pages(&group.pages, &group.folder, options)
    } else if options.scan_folders && !group.folder.is_empty() {
        match scan_folder(&group.folder, &group.order, options) {
            Ok(pages) => pages,
            Err(err) => {
                error!("Error scanning folder for group {}: {err}", group.group);
                return None;
            }
        }
    } else {
        debug!("Skipping group {} without pages", group.group);
        return None;
    };

    Some(Group {
        group: group.group.clone(),
        pages,
    })
}
