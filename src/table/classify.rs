//! Line classification: table-shaped rows and alignment separators
//!
//! Purely syntactic. A `|` inside a code fence or an escaped `\|` still makes
//! a line table-shaped.

use crate::util::text::line_span_at;

/// Whether a single line looks like a table row
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('|') && trimmed.split('|').count() >= 2
}

/// Whether the line containing `cursor` looks like a table row
pub fn is_in_table(text: &str, cursor: usize) -> bool {
    line_span_at(text, cursor).is_some_and(|span| is_table_row(span.slice(text)))
}

/// Whether a line is a header alignment separator such as `| :-- | --: |`
///
/// Every non-blank pipe-separated part must be an optional colon, one or
/// more dashes, and an optional colon. A line with no such parts is not an
/// alignment row.
pub fn is_alignment_row(line: &str) -> bool {
    let mut parts = line
        .split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .peekable();

    parts.peek().is_some() && parts.all(is_alignment_marker)
}

/// Matches `^:?-+:?$`
fn is_alignment_marker(part: &str) -> bool {
    let inner = part.strip_prefix(':').unwrap_or(part);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    !inner.is_empty() && inner.bytes().all(|b| b == b'-')
}
