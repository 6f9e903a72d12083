//! Per-file content transforms: blank-line removal and best-effort
//! comment stripping.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `//` line comments, single-line `/* */` block comments, and `#`
/// line comments. A textual heuristic, not a lexer: it will also eat these
/// patterns inside string literals, and in multiline mode `.` does not
/// cross `\n`, so block comments spanning lines are left alone. Both
/// behaviors are long-standing and kept as-is so existing bundles do not
/// change.
static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)//.*?$|/\*.*?\*/|#.*?$").expect("valid comment regex"));

/// Drop lines that are empty or whitespace-only. Lines are split on `\n`;
/// a lone `\r` counts as whitespace and is dropped, while a trailing `\r`
/// on a non-blank line survives.
pub fn strip_blank_lines(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove comment-looking text. See [`COMMENT_RE`] for the caveats.
pub fn strip_comments(content: &str) -> String {
    COMMENT_RE.replace_all(content, "").into_owned()
}

/// Apply the enabled transforms in their fixed order.
pub fn apply(content: String, remove_blank_lines: bool, remove_comments: bool) -> String {
    let content = if remove_blank_lines { strip_blank_lines(&content) } else { content };
    if remove_comments {
        strip_comments(&content)
    } else {
        content
    }
}
