//! Folder scanning for groups without an explicit page list.

use super::docs_json::NavPage;
use super::pages::{clean_path, join_path, strip_page_extension};
use super::GenerateOptions;
use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Build the page list of `folder` from the files it contains.
///
/// Direct page files come first: names listed in `order` (with or without the
/// extension) in that order, then the rest alphabetically. Every immediate
/// subdirectory holding page files follows as a subgroup named after the
/// directory. Deeper levels are not scanned.
pub fn scan_folder(folder: &str, order: &[String], options: &GenerateOptions) -> Result<Vec<NavPage>> {
    let folder = clean_path(folder);
    let mut files = Vec::new();
    let mut subgroups = Vec::new();

    for entry in WalkDir::new(walk_root(&folder))
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        let path = join_path(&folder, &name);
        if entry.file_type().is_dir() {
            let pages = scan_subdirectory(&path, options)?;
            if !pages.is_empty() {
                let pages = pages.into_iter().map(NavPage::Page).collect();
                subgroups.push(NavPage::group(subgroup_name(&name), pages));
            }
        } else if is_page(entry.path(), &options.page_extension) {
            files.push(strip_page_extension(&path, &options.page_extension).to_string());
        }
    }

    let mut pages: Vec<NavPage> = apply_order(files, &folder, order, &options.page_extension)
        .into_iter()
        .map(NavPage::Page)
        .collect();
    pages.extend(subgroups);
    Ok(pages)
}

/// Sorted page paths of the page files directly inside `dir`.
pub fn scan_subdirectory(dir: &str, options: &GenerateOptions) -> Result<Vec<String>> {
    let dir = clean_path(dir);
    let mut files = Vec::new();
    for entry in WalkDir::new(walk_root(&dir)).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && is_page(entry.path(), &options.page_extension) {
            let path = join_path(&dir, &entry.file_name().to_string_lossy());
            files.push(strip_page_extension(&path, &options.page_extension).to_string());
        }
    }
    files.sort();
    Ok(files)
}

/// Display name for a scanned subdirectory: `getting-started` → `Getting started`.
pub fn subgroup_name(dir_name: &str) -> String {
    let spaced = dir_name.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn walk_root(folder: &str) -> &str {
    if folder.is_empty() {
        "."
    } else {
        folder
    }
}

fn is_page(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

fn apply_order(mut files: Vec<String>, folder: &str, order: &[String], extension: &str) -> Vec<String> {
    if order.is_empty() {
        files.sort();
        return files;
    }

    let mut ordered = Vec::with_capacity(files.len());
    for name in order {
        let wanted = join_path(folder, strip_page_extension(name, extension));
        if let Some(position) = files.iter().position(|file| *file == wanted) {
            ordered.push(files.remove(position));
        }
    }
    files.sort();
    ordered.extend(files);
    ordered
}
