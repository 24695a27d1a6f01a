//! JSON site configuration emitted by the generator.

use super::site::{
    Banner, Colors, Contextual, Footer, GlobalNav, Integrations, Logo, Navbar, Redirect,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocsJson {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub theme: String,
    pub name: String,
    pub colors: Colors,
    pub favicon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextual: Option<Contextual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navbar: Option<Navbar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Integrations>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<Redirect>,
    pub navigation: Navigation,
}

impl DocsJson {
    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Navigation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<Tab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalNav>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tab {
    pub tab: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    pub group: String,
    pub pages: Vec<NavPage>,
}

/// A resolved navigation entry: a page path or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavPage {
    Page(String),
    Group(Group),
}

impl NavPage {
    pub fn page(path: impl Into<String>) -> Self {
        NavPage::Page(path.into())
    }

    pub fn group(name: impl Into<String>, pages: Vec<NavPage>) -> Self {
        NavPage::Group(Group {
            group: name.into(),
            pages,
        })
    }
}
