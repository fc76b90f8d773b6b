//! Line bookkeeping over raw document text
//!
//! All offsets are byte offsets into the `&str` they were computed from.
//! Lines are split on `\n` only; a trailing `\r` stays part of the line.
//! Table edits that synthesize a line copy the `\r` of the line next to it.

/// Byte bounds of one line, excluding its `\n` terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// The line's text within `text`
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Inclusive containment: the offset just past the last character
    /// (where the newline sits) still belongs to this line.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// Split `text` into line spans.
///
/// Always yields at least one span; an empty document is one empty line and
/// a trailing `\n` produces a final empty line.
pub fn line_spans(text: &str) -> Vec<LineSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for line in text.split('\n') {
        let end = start + line.len();
        spans.push(LineSpan { start, end });
        start = end + 1;
    }
    spans
}

/// The line containing `offset`, found by scanning outward to the nearest
/// `\n` on each side. `None` past the end of the text.
pub fn line_span_at(text: &str, offset: usize) -> Option<LineSpan> {
    let bytes = text.as_bytes();
    if offset > bytes.len() {
        return None;
    }
    let start = bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |nl| nl + 1);
    let end = bytes[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |nl| offset + nl);
    Some(LineSpan { start, end })
}

/// The line before `span`, if any
pub fn previous_line(text: &str, span: LineSpan) -> Option<LineSpan> {
    if span.start == 0 {
        return None;
    }
    line_span_at(text, span.start - 1)
}

/// The line after `span`, if any
pub fn next_line(text: &str, span: LineSpan) -> Option<LineSpan> {
    if span.end >= text.len() {
        return None;
    }
    line_span_at(text, span.end + 1)
}

/// Convert a 0-indexed (line, column) pair, column counted in chars, to a
/// byte offset. Columns past the end of the line clamp to the line end.
pub fn line_col_to_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    let spans = line_spans(text);
    let span = spans.get(line)?;
    let line_text = span.slice(text);
    let within = line_text
        .char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line_text.len());
    Some(span.start + within)
}
