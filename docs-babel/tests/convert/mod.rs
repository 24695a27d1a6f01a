//! Directory tree conversion tests.

use crate::common::write_file;
use docs_babel::{convert_tree, ConvertOptions, DocsError};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_tree_is_mirrored_with_new_extension() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("content");
    let dst = dir.path().join("out");
    write_file(&src, "intro.md", "# Intro {#intro}\n");
    write_file(&src, "guides/setup.md", "Run <cmd>.\n");
    write_file(&src, "guides/notes.txt", "not markdown\n");

    let report = convert_tree(&src, &dst, &ConvertOptions::default()).unwrap();

    assert_eq!(report.converted_count(), 2);
    assert_eq!(
        fs::read_to_string(dst.join("intro.mdx")).unwrap(),
        "# Intro\n"
    );
    assert_eq!(
        fs::read_to_string(dst.join("guides/setup.mdx")).unwrap(),
        "Run {\"<\"}cmd{\">\"}.\n"
    );
    assert!(!dst.join("guides/notes.txt").exists());
    assert!(!dst.join("guides/notes.mdx").exists());
}

#[test]
fn test_index_documents_are_skipped() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("content");
    let dst = dir.path().join("out");
    write_file(&src, "_index.md", "root index\n");
    write_file(&src, "section/_index.md", "section index\n");
    write_file(&src, "section/page.md", "page\n");

    let report = convert_tree(&src, &dst, &ConvertOptions::default()).unwrap();

    assert_eq!(report.converted_count(), 1);
    assert_eq!(
        report.skipped,
        vec![PathBuf::from("_index.md"), PathBuf::from("section/_index.md")]
    );
    assert!(dst.join("section/page.mdx").exists());
    assert!(!dst.join("_index.mdx").exists());
}

#[test]
fn test_destination_is_cleaned() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("content");
    let dst = dir.path().join("out");
    write_file(&src, "page.md", "page\n");
    write_file(&dst, "stale.mdx", "old\n");

    convert_tree(&src, &dst, &ConvertOptions::default()).unwrap();

    assert!(!dst.join("stale.mdx").exists());
    assert!(dst.join("page.mdx").exists());
}

#[test]
fn test_destination_kept_when_cleaning_disabled() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("content");
    let dst = dir.path().join("out");
    write_file(&src, "page.md", "page\n");
    write_file(&dst, "stale.mdx", "old\n");

    let options = ConvertOptions {
        clean_destination: false,
        ..ConvertOptions::default()
    };
    convert_tree(&src, &dst, &options).unwrap();

    assert!(dst.join("stale.mdx").exists());
    assert!(dst.join("page.mdx").exists());
}

#[test]
fn test_custom_extensions() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("content");
    let dst = dir.path().join("out");
    write_file(&src, "a.markdown", "a\n");
    write_file(&src, "b.md", "b\n");

    let options = ConvertOptions {
        source_extension: "markdown".to_string(),
        target_extension: "mdx".to_string(),
        ..ConvertOptions::default()
    };
    let report = convert_tree(&src, &dst, &options).unwrap();

    assert_eq!(report.converted_count(), 1);
    assert!(dst.join("a.mdx").exists());
}

#[test]
fn test_refuses_to_clean_source_parent() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("content");
    write_file(&src, "page.md", "page\n");

    let err = convert_tree(&src, dir.path(), &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, DocsError::UnsafeDestination { .. }));
    assert!(src.join("page.md").exists());
}

#[test]
fn test_missing_source_root_is_an_error() {
    let dir = tempdir().unwrap();
    let err = convert_tree(
        &dir.path().join("nope"),
        &dir.path().join("out"),
        &ConvertOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, DocsError::Walk(_)));
}
