use crate::common::{doc, write_file};
use docs_babel::{convert_file, convert_str, DocsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_plain_document_is_identical() {
    let md = doc(&[
        "# Title",
        "",
        "Some paragraph with `code` and a [link](https://example.com).",
        "",
        "- item one",
        "- item two",
    ]);
    assert_eq!(convert_str(&md), md);
}

#[test]
fn test_heading_anchor_is_stripped() {
    assert_eq!(convert_str("## Title {#custom-id}\n"), "## Title\n");
}

#[test]
fn test_anchor_syntax_outside_heading_is_kept() {
    let md = "Text with {#not-a-heading}\n";
    assert_eq!(convert_str(md), md);
}

#[test]
fn test_placeholders_are_escaped_and_anchors_kept() {
    assert_eq!(
        convert_str("Use <src-path> here\n"),
        "Use {\"<\"}src-path{\">\"} here\n"
    );
    let anchor = "Use <a href=\"x\">link</a>\n";
    assert_eq!(convert_str(anchor), anchor);
}

#[test]
fn test_unterminated_shortcode_still_becomes_fence() {
    assert_eq!(
        convert_str("{{< highlight yaml >}}\nkey: value\n"),
        "```yaml\nkey: value\n"
    );
}

#[test]
fn test_shortcode_pair_becomes_fenced_block() {
    let md = doc(&[
        "Example:",
        "{{< highlight yaml >}}",
        "proxy:",
        "  port: 8080",
        "{{< /highlight >}}",
    ]);
    assert_eq!(
        convert_str(&md),
        doc(&["Example:", "```yaml", "proxy:", "  port: 8080", "```"])
    );
}

#[test]
fn test_br_in_table_cell() {
    assert_eq!(
        convert_str("| a<br>b | c |\n"),
        "| a<br />b | c |\n"
    );
}

#[test]
fn test_lint_comment_line_is_removed() {
    let md = doc(&["<!-- markdownlint-disable -->", "# Title"]);
    assert_eq!(convert_str(&md), "# Title\n");
}

#[test]
fn test_convert_file_writes_destination() {
    let dir = tempdir().unwrap();
    let src = write_file(dir.path(), "page.md", "# Page {#page}\n\nUse <path>.\n");
    let dst = dir.path().join("page.mdx");

    convert_file(&src, &dst).expect("conversion succeeds");

    let output = fs::read_to_string(&dst).unwrap();
    assert_eq!(output, "# Page\n\nUse {\"<\"}path{\">\"}.\n");
    // The source is left alone.
    assert_eq!(
        fs::read_to_string(&src).unwrap(),
        "# Page {#page}\n\nUse <path>.\n"
    );
}

#[test]
fn test_convert_file_missing_source() {
    let dir = tempdir().unwrap();
    let dst = dir.path().join("out.mdx");
    let err = convert_file(&dir.path().join("missing.md"), &dst).unwrap_err();
    assert!(matches!(err, DocsError::Read { .. }));
    assert!(!dst.exists());
}

#[test]
fn test_convert_file_rejects_invalid_utf8() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("bad.md");
    fs::write(&src, [0x66, 0x6f, 0xff, 0x0a]).unwrap();
    let err = convert_file(&src, &dir.path().join("bad.mdx")).unwrap_err();
    assert!(matches!(err, DocsError::Read { .. }));
}

#[test]
fn test_convert_file_unwritable_destination() {
    let dir = tempdir().unwrap();
    let src = write_file(dir.path(), "page.md", "text\n");
    let dst = dir.path().join("no-such-dir").join("page.mdx");
    let err = convert_file(&src, &dst).unwrap_err();
    assert!(matches!(err, DocsError::Write { .. }));
}
