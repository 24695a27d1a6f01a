//! Markdown to MDX conversion
//!
//! Rewrites Hugo-flavored Markdown into the MDX dialect consumed by the docs site.
//! The conversion is a single forward pass over the lines of a document with a
//! cursor and one bit of state (whether we are inside the frontmatter).
//!
//! # Rewrite Rules
//!
//! | Source construct                          | Output                                         |
//! |-------------------------------------------|------------------------------------------------|
//! | `---`                                     | unchanged, toggles frontmatter                 |
//! | `description: \|` block (frontmatter)     | `description: '<folded text>'`                 |
//! | `<details><summary>` … `</details>`       | single `<Accordion title="…">` write           |
//! | `{{< highlight yaml >}}` (outside blocks) | ```` ```yaml ````                              |
//! | `{{< /highlight >}}` (outside blocks)     | ```` ``` ````                                  |
//! | `<br>`                                    | `<br />`                                       |
//! | `<!-- markdownlint-disable -->`           | line dropped                                   |
//! | `## Title {#anchor}`                      | `## Title`                                     |
//! | `<placeholder>`                           | `{"<"}placeholder{">"}`                        |
//!
//! # Malformed Input
//!
//! Nothing here fails on bad markup. An accordion without a closing `</details>`
//! is handled as a regular line, and a shortcode opener without a closer is left
//! for the regular line rules (which replace it regardless of pairing).
//!
//! # Output Shape
//!
//! [`convert_lines`] returns one entry per write. Accordion writes keep their
//! internal newlines, so the number of entries can be smaller than the number of
//! physical output lines.

mod accordion;
mod escape;
mod frontmatter;

pub use escape::{escape_angle_placeholders, strip_heading_anchor};

use crate::error::{DocsError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

pub(crate) const HIGHLIGHT_OPEN: &str = "{{< highlight yaml >}}";
pub(crate) const HIGHLIGHT_CLOSE: &str = "{{< /highlight >}}";
const FRONTMATTER_MARKER: &str = "---";
const DESCRIPTION_BLOCK: &str = "description: |";
const DETAILS_OPEN: &str = "<details><summary>";
const DETAILS_CLOSE: &str = "</details>";
const LINT_DISABLE: &str = "<!-- markdownlint-disable -->";

/// Convert a sequence of source lines into MDX writes.
pub fn convert_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    LineRewriter::new(lines).run()
}

/// Convert a whole document held in memory.
///
/// Every write is terminated with a newline, so a document without any special
/// constructs comes back byte-for-byte identical (modulo `\r\n` terminators).
pub fn convert_str(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut output = String::with_capacity(source.len());
    for write in convert_lines(&lines) {
        output.push_str(&write);
        output.push('\n');
    }
    output
}

/// Convert the document at `src` and write the result to `dst`.
///
/// The source is read completely before the destination is created. A failure
/// while writing leaves whatever was already flushed in place.
pub fn convert_file(src: &Path, dst: &Path) -> Result<()> {
    let source = fs::read_to_string(src).map_err(|source| DocsError::Read {
        path: src.to_path_buf(),
        source,
    })?;
    let lines: Vec<&str> = source.lines().collect();

    let write_err = |source: std::io::Error| DocsError::Write {
        path: dst.to_path_buf(),
        source,
    };
    let file = fs::File::create(dst).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for write in convert_lines(&lines) {
        writeln!(writer, "{write}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

/// Cursor-driven rewriter over an immutable slice of lines.
struct LineRewriter<'a, S> {
    lines: &'a [S],
    cursor: usize,
    in_frontmatter: bool,
    output: Vec<String>,
}

impl<'a, S: AsRef<str>> LineRewriter<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        LineRewriter {
            lines,
            cursor: 0,
            in_frontmatter: false,
            output: Vec::with_capacity(lines.len()),
        }
    }

    fn line(&self, index: usize) -> &'a str {
        self.lines[index].as_ref()
    }

    fn run(mut self) -> Vec<String> {
        while self.cursor < self.lines.len() {
            let line = self.line(self.cursor);

            if line == FRONTMATTER_MARKER {
                self.in_frontmatter = !self.in_frontmatter;
                self.output.push(line.to_string());
                self.cursor += 1;
                continue;
            }

            if self.in_frontmatter && line.starts_with(DESCRIPTION_BLOCK) {
                self.fold_description();
                continue;
            }

            if line.contains(DETAILS_OPEN) && self.rewrite_accordion() {
                continue;
            }

            if let Some(rewritten) = rewrite_regular_line(line) {
                self.output.push(rewritten);
            }
            self.cursor += 1;
        }
        self.output
    }

    /// Consume the indented continuation of a `description: |` block.
    fn fold_description(&mut self) {
        self.cursor += 1;
        let start = self.cursor;
        while self.cursor < self.lines.len() && frontmatter::is_continuation(self.line(self.cursor))
        {
            self.cursor += 1;
        }
        let folded = frontmatter::fold_description(&self.lines[start..self.cursor]);
        self.output.push(folded);
    }

    /// Rewrite the accordion starting at the cursor.
    ///
    /// Returns `false` without consuming anything when no line at or after the
    /// cursor closes the block.
    fn rewrite_accordion(&mut self) -> bool {
        let Some(end) =
            (self.cursor..self.lines.len()).find(|&i| self.line(i).contains(DETAILS_CLOSE))
        else {
            return false;
        };
        let block = self.lines[self.cursor..=end]
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");
        self.output.push(accordion::rewrite(&block));
        self.cursor = end + 1;
        true
    }
}

/// Apply the per-line rules. `None` means the line is dropped.
fn rewrite_regular_line(line: &str) -> Option<String> {
    let line = line
        .replace(HIGHLIGHT_OPEN, "```yaml")
        .replace(HIGHLIGHT_CLOSE, "```")
        .replace("<br>", "<br />");

    if line.contains(LINT_DISABLE) {
        return None;
    }

    let line = if line.trim().starts_with('#') {
        strip_heading_anchor(&line)
    } else {
        line
    };

    Some(escape_angle_placeholders(&line))
}
