use crate::common::write_file;
use docs_babel::navigation::{scan_folder, scan_subdirectory, NavPage};
use docs_babel::GenerateOptions;
use tempfile::tempdir;

#[test]
fn test_scan_lists_files_then_subgroups() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("testfolder");
    write_file(&folder, "file2.mdx", "# File 2");
    write_file(&folder, "file1.mdx", "# File 1");
    write_file(&folder, "sub-folder/subfile2.mdx", "# Subfile 2");
    write_file(&folder, "sub-folder/subfile1.mdx", "# Subfile 1");
    write_file(&folder, "sub-folder/deeper/skipped.mdx", "# Too deep");
    write_file(&folder, "empty/readme.txt", "no pages");
    write_file(&folder, "ignored.txt", "ignored");

    let root = folder.to_str().unwrap();
    let pages = scan_folder(root, &[], &GenerateOptions::default()).unwrap();

    assert_eq!(
        pages,
        vec![
            NavPage::page(format!("{root}/file1")),
            NavPage::page(format!("{root}/file2")),
            NavPage::group(
                "Sub folder",
                vec![
                    NavPage::page(format!("{root}/sub-folder/subfile1")),
                    NavPage::page(format!("{root}/sub-folder/subfile2")),
                ]
            ),
        ]
    );
}

#[test]
fn test_scan_applies_order_then_alphabetical() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("testfolder");
    write_file(&folder, "file1.mdx", "# File 1");
    write_file(&folder, "file2.mdx", "# File 2");
    write_file(&folder, "file3.mdx", "# File 3");

    let root = folder.to_str().unwrap();
    let order = vec!["file3".to_string(), "file1.mdx".to_string()];
    let pages = scan_folder(root, &order, &GenerateOptions::default()).unwrap();

    assert_eq!(
        pages,
        vec![
            NavPage::page(format!("{root}/file3")),
            NavPage::page(format!("{root}/file1")),
            NavPage::page(format!("{root}/file2")),
        ]
    );
}

#[test]
fn test_scan_subdirectory_is_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("subdir");
    write_file(&sub, "b.mdx", "");
    write_file(&sub, "a.mdx", "");
    write_file(&sub, "ignored.txt", "");

    let root = sub.to_str().unwrap();
    let files = scan_subdirectory(root, &GenerateOptions::default()).unwrap();
    assert_eq!(files, vec![format!("{root}/a"), format!("{root}/b")]);
}

#[test]
fn test_scan_of_missing_folder_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    assert!(scan_folder(missing.to_str().unwrap(), &[], &GenerateOptions::default()).is_err());
}

#[test]
fn test_scan_cleans_dot_segments_in_folder() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("testfolder");
    write_file(&folder, "page.mdx", "");
    write_file(&folder, "nested/child.mdx", "");

    let root = folder.to_str().unwrap();
    let dotted = format!("{root}/./nested/../");
    let pages = scan_folder(&dotted, &["./page.mdx".to_string()], &GenerateOptions::default()).unwrap();

    assert_eq!(
        pages,
        vec![
            NavPage::page(format!("{root}/page")),
            NavPage::group("Nested", vec![NavPage::page(format!("{root}/nested/child"))]),
        ]
    );
}
