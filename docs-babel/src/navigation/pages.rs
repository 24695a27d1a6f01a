//! Resolution of explicit page lists.

use super::docs_json::NavPage;
use super::site::PageEntry;
use super::GenerateOptions;

/// Resolve a group's page list into navigation entries.
///
/// Pages are placed under `folder` unless they already start with it, and the
/// page extension is dropped. Subgroups are resolved recursively against the same
/// folder. Empty pages and subgroups without a name are ignored.
pub fn resolve_pages(entries: &[PageEntry], folder: &str, options: &GenerateOptions) -> Vec<NavPage> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            PageEntry::Path(page) | PageEntry::Page { page } if page.trim().is_empty() => None,
            PageEntry::Path(page) | PageEntry::Page { page } => {
                Some(NavPage::page(page_path(page, folder, &options.page_extension)))
            }
            PageEntry::Group { group, .. } if group.is_empty() => None,
            PageEntry::Group { group, pages } => Some(NavPage::group(
                group.clone(),
                resolve_pages(pages, folder, options),
            )),
        })
        .collect()
}

/// Site-relative page path for `page` listed in a group rooted at `folder`.
///
/// The result is cleaned lexically, so `.` segments disappear and `..` consumes
/// the segment before it.
pub fn page_path(page: &str, folder: &str, extension: &str) -> String {
    let folder = clean_path(folder);
    let page = clean_path(page);
    let path = if folder.is_empty() || page.starts_with(&format!("{folder}/")) {
        page
    } else {
        join_path(&folder, &page)
    };
    strip_page_extension(&path, extension).to_string()
}

/// `folder/name`, cleaned.
pub(crate) fn join_path(folder: &str, name: &str) -> String {
    if folder.is_empty() {
        clean_path(name)
    } else {
        clean_path(&format!("{folder}/{name}"))
    }
}

/// Lexical cleanup of a `/`-separated path. Empty and `.` segments are dropped,
/// `..` pops the previous segment. Leading `..` of a relative path are kept; an
/// absolute path cannot climb above `/`.
pub(crate) fn clean_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }
    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

pub(crate) fn strip_page_extension<'a>(path: &'a str, extension: &str) -> &'a str {
    path.strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(path)
}
