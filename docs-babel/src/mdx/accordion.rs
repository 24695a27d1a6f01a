//! `<details>` blocks to `<Accordion>` components.
//!
//! Accordions in the source docs mostly live inside table cells, so everything the
//! block contains has to stay valid inline MDX. YAML examples are collapsed into
//! inline code spans instead of fenced blocks.

use super::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// Rewrite a complete accordion span (lines joined with `\n`).
pub(super) fn rewrite(block: &str) -> String {
    let block = block
        .replacen("<details><summary>", "<Accordion title=\"", 1)
        .replacen("</summary>", "\">", 1)
        .replacen("</details>", "</Accordion>", 1);

    inline_highlights(&block).replace("<br>", "<br />")
}

/// Replace every complete highlight region with an inline code span.
///
/// Regions are taken left to right. The first one is inserted as-is and every
/// later one is preceded by `<br />`. An opener with no closer after it ends the
/// scan and stays in the text.
fn inline_highlights(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    let mut blocks = 0usize;

    while let Some(start) = rest.find(HIGHLIGHT_OPEN) {
        let body = &rest[start + HIGHLIGHT_OPEN.len()..];
        let Some(end) = body.find(HIGHLIGHT_CLOSE) else {
            break;
        };

        result.push_str(&rest[..start]);
        if blocks > 0 {
            result.push_str("<br />");
        }
        result.push_str(&inline_code(&body[..end]));
        blocks += 1;
        rest = &body[end + HIGHLIGHT_CLOSE.len()..];
    }

    result.push_str(rest);
    result
}

fn inline_code(code: &str) -> String {
    let escaped = code
        .trim()
        .replace('\n', "\\n")
        .replace('<', "\\<")
        .replace('>', "\\>")
        .replace('|', "\\|");
    format!("`{escaped}`")
}
