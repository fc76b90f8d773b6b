//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pipegrid::config::TableConfig;
use pipegrid::model::{AppModel, Document};
use pipegrid::table::{find_table_at_cursor, TableInfo};

/// Marks the cursor in test fixtures; removed before the text is used
pub const CURSOR: char = '█';

/// Header, alignment row and two data rows
pub const SIMPLE_TABLE: &str = "| Name | Age |\n| --- | --- |\n| Ann | 31 |\n| Bob | 42 |";

/// Split a fixture into its text and the cursor's byte offset
pub fn split_cursor(fixture: &str) -> (String, usize) {
    let cursor = fixture
        .find(CURSOR)
        .unwrap_or_else(|| panic!("fixture has no cursor marker: {:?}", fixture));
    (fixture.replacen(CURSOR, "", 1), cursor)
}

/// Render text with the cursor marker inserted at a byte offset
pub fn with_cursor(text: &str, cursor: usize) -> String {
    let mut out = String::with_capacity(text.len() + CURSOR.len_utf8());
    out.push_str(&text[..cursor]);
    out.push(CURSOR);
    out.push_str(&text[cursor..]);
    out
}

/// Create a test model from a fixture with a cursor marker
pub fn test_model(fixture: &str) -> AppModel {
    test_model_with_config(fixture, TableConfig::default())
}

pub fn test_model_with_config(fixture: &str, config: TableConfig) -> AppModel {
    let (text, cursor) = split_cursor(fixture);
    let mut document = Document::with_text(&text);
    document.set_cursor_byte_offset(cursor);
    AppModel::new(document, config)
}

/// The model's text with its cursor marked
pub fn model_fixture(model: &AppModel) -> String {
    with_cursor(&model.document.text(), model.document.cursor_byte_offset())
}

/// Locate the table at `cursor`, failing the test if there is none
pub fn locate(text: &str, cursor: usize) -> TableInfo {
    find_table_at_cursor(text, cursor)
        .unwrap_or_else(|| panic!("no table at {} in {:?}", cursor, text))
}
