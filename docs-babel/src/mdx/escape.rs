//! Per-line escaping helpers.

/// Tag bodies that MDX must keep parsing as markup.
const PRESERVED_PREFIXES: &[&str] = &["a ", "br", "Accordion"];
const PRESERVED_CLOSERS: &[&str] = &["/a", "/br", "/Accordion"];

const ESCAPED_LT: &str = "{\"<\"}";
const ESCAPED_GT: &str = "{\">\"}";

/// Escape `<...>` spans that MDX would otherwise parse as components.
///
/// Anchors, line breaks and accordions are kept as tags; everything else (usually
/// placeholders such as `<src-path>`) is rewritten with JSX string expressions so
/// it renders literally. A `<` without a following `>` is left alone.
///
/// ```ignore
/// assert_eq!(
///     escape_angle_placeholders("Use <src-path> here"),
///     r#"Use {"<"}src-path{">"} here"#
/// );
/// ```
pub fn escape_angle_placeholders(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('>') else {
            break;
        };
        let content = &after_open[..close];

        result.push_str(&rest[..open]);
        if is_preserved_tag(content) {
            result.push('<');
            result.push_str(content);
            result.push('>');
        } else {
            result.push_str(ESCAPED_LT);
            result.push_str(content);
            result.push_str(ESCAPED_GT);
        }
        rest = &after_open[close + 1..];
    }

    result.push_str(rest);
    result
}

fn is_preserved_tag(content: &str) -> bool {
    PRESERVED_PREFIXES
        .iter()
        .any(|prefix| content.starts_with(prefix))
        || PRESERVED_CLOSERS.contains(&content)
}

/// Remove a trailing `{#anchor}` from a heading line.
///
/// The span runs from `{#` through the first `}` after it. The remainder is
/// trimmed. Lines without a complete anchor come back unchanged.
pub fn strip_heading_anchor(line: &str) -> String {
    let Some(start) = line.find("{#") else {
        return line.to_string();
    };
    let Some(len) = line[start..].find('}') else {
        return line.to_string();
    };
    let end = start + len + 1;
    format!("{}{}", &line[..start], &line[end..])
        .trim()
        .to_string()
}
