//! Utility modules

pub mod text;

pub use text::{line_col_to_offset, line_span_at, line_spans, next_line, previous_line, LineSpan};
