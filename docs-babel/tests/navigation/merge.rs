use crate::common::write_file;
use docs_babel::navigation::merge_configs;
use docs_babel::DocsError;
use tempfile::tempdir;

const BASE: &str = r##"
schema: "https://leaves.mintlify.com/schema/docs.json"
theme: "maple"
name: "Test Docs"
colors:
  primary: "#16A34A"
  light: "#07C983"
  dark: "#FB326E"
favicon: "/favicon.svg"
navigation:
  global:
    anchors:
      - anchor: GitHub
        href: https://github.com/example
        icon: github
  tabs:
    - tab: "Tab1"
      icon: "/icon1.svg"
      groups:
        - group: "Group1"
          folder: "folder1"
"##;

const EXTRA: &str = r#"
name: "Ignored"
navigation:
  tabs:
    - tab: "Tab2"
      icon: "/icon2.svg"
      groups:
        - group: "Group2"
          folder: "folder2"
"#;

#[test]
fn test_first_file_provides_settings_and_tabs_concatenate() {
    let dir = tempdir().unwrap();
    let base = write_file(dir.path(), "config1.yaml", BASE);
    let extra = write_file(dir.path(), "config2.yaml", EXTRA);

    let merged = merge_configs(&[base, extra]).unwrap();

    assert_eq!(merged.schema, "https://leaves.mintlify.com/schema/docs.json");
    assert_eq!(merged.theme, "maple");
    assert_eq!(merged.name, "Test Docs");
    assert_eq!(merged.colors.primary, "#16A34A");
    let tabs: Vec<&str> = merged
        .navigation
        .tabs
        .iter()
        .map(|tab| tab.tab.as_str())
        .collect();
    assert_eq!(tabs, vec!["Tab1", "Tab2"]);
    assert_eq!(merged.navigation.global.unwrap().anchors.len(), 1);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = merge_configs(&["nonexistent.yaml"]).unwrap_err();
    assert!(matches!(err, DocsError::Read { .. }));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let dir = tempdir().unwrap();
    let invalid = write_file(dir.path(), "invalid.yaml", "invalid: yaml: content:");
    let err = merge_configs(&[invalid]).unwrap_err();
    assert!(matches!(err, DocsError::ParseConfig { .. }));
    assert!(err.to_string().contains("invalid.yaml"));
}

#[test]
fn test_empty_secondary_file_contributes_nothing() {
    let dir = tempdir().unwrap();
    let base = write_file(dir.path(), "base.yaml", BASE);
    let empty = write_file(dir.path(), "empty.yaml", "\n");

    let merged = merge_configs(&[base, empty]).unwrap();
    assert_eq!(merged.navigation.tabs.len(), 1);
}
