//! YAML site configuration model.
//!
//! Every field is optional in the YAML so that secondary configuration files can
//! carry nothing but navigation tabs. Types shared verbatim with the JSON output
//! also implement `Serialize`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One YAML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Reference to the JSON schema of the generated config
    pub schema: String,
    pub theme: String,
    pub name: String,
    pub colors: Colors,
    pub favicon: String,
    pub banner: Option<Banner>,
    pub contextual: Option<Contextual>,
    pub logo: Option<Logo>,
    pub navbar: Option<Navbar>,
    pub footer: Option<Footer>,
    pub integrations: Option<Integrations>,
    pub redirects: Vec<Redirect>,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub light: String,
    pub dark: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Banner {
    pub content: String,
    pub dismissible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contextual {
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Logo {
    pub light: String,
    pub dark: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Navbar {
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Footer social links, keyed by network. Sorted on output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Footer {
    pub socials: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga4: Option<Ga4Integration>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ga4Integration {
    #[serde(rename = "measurementId")]
    pub measurement_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Redirect {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub tabs: Vec<TabConfig>,
    pub global: Option<GlobalNav>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    pub tab: String,
    pub icon: String,
    pub groups: Vec<GroupConfig>,
}

/// A navigation group: either an explicit page list or a folder to scan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub group: String,
    /// Folder prefix for pages, and the scan root when no pages are listed
    pub folder: String,
    /// Preferred order of scanned files; unlisted files follow alphabetically
    pub order: Vec<String>,
    pub pages: Vec<PageEntry>,
}

/// An entry of a group's page list.
///
/// Accepts a bare string, a `{ page: ... }` mapping, or a `{ group: ..., pages: [...] }`
/// mapping for nested groups. A mapping with neither key reads as an unnamed
/// group, which resolution skips.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageEntry {
    Path(String),
    Page {
        page: String,
    },
    Group {
        #[serde(default)]
        group: String,
        #[serde(default)]
        pages: Vec<PageEntry>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalNav {
    pub anchors: Vec<Anchor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Anchor {
    pub anchor: String,
    pub href: String,
    pub icon: String,
}
