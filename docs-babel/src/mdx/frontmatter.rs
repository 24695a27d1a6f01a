//! Frontmatter description folding.
//!
//! MDX frontmatter is parsed by a YAML reader that chokes on some block scalars,
//! so `description: |` blocks are folded into one single-quoted scalar.

/// Whether `line` continues an indented block scalar.
pub(super) fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

/// Fold the continuation lines of a description block into one frontmatter line.
///
/// Single quotes are doubled, which is the escape for YAML single-quoted scalars.
pub(super) fn fold_description<S: AsRef<str>>(lines: &[S]) -> String {
    let text = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .collect::<Vec<_>>()
        .join(" ");
    format!("description: '{}'", text.replace('\'', "''"))
}
