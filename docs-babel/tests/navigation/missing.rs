use crate::common::write_file;
use docs_babel::navigation::{find_unlisted_pages, SiteConfig};
use docs_babel::GenerateOptions;
use tempfile::tempdir;

const CONFIG: &str = r#"
navigation:
  tabs:
    - tab: Docs
      groups:
        - group: Guides
          folder: ./guides/
        - group: Loose
          pages: [intro]
"#;

#[test]
fn test_reports_pages_outside_configured_folders() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "guides/setup.mdx", "");
    write_file(dir.path(), "guides/deep/more.mdx", "");
    write_file(dir.path(), "reference/api.mdx", "");
    write_file(dir.path(), "intro.mdx", "");
    write_file(dir.path(), "guides-extra/x.mdx", "");
    write_file(dir.path(), "notes.md", "");
    write_file(dir.path(), ".hidden/secret.mdx", "");
    write_file(dir.path(), "reference/.draft.mdx", "");

    let config: SiteConfig = serde_yaml::from_str(CONFIG).unwrap();
    let missing = find_unlisted_pages(&config, dir.path(), &GenerateOptions::default()).unwrap();

    assert_eq!(
        missing,
        vec!["guides-extra/x.mdx", "intro.mdx", "reference/api.mdx"]
    );
}

#[test]
fn test_all_pages_covered() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "guides/setup.mdx", "");

    let config: SiteConfig = serde_yaml::from_str(CONFIG).unwrap();
    let missing = find_unlisted_pages(&config, dir.path(), &GenerateOptions::default()).unwrap();
    assert!(missing.is_empty());
}
