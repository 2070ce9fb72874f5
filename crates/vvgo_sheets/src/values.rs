//! Raw tabular payloads.

use serde_json::Value;

/// A loosely-typed spreadsheet cell.
pub type Cell = Value;

/// One spreadsheet row.
pub type Row = Vec<Cell>;

/// A block of rows as returned by the spreadsheet source.
pub type Values = Vec<Row>;

/// Textual form of a cell.
///
/// Strings are returned as-is, `null` becomes the empty string, and every
/// other value uses its JSON text.
///
/// ```
/// use serde_json::json;
/// use vvgo_sheets::cell_text;
///
/// assert_eq!(cell_text(&json!("Hilda's Healing")), "Hilda's Healing");
/// assert_eq!(cell_text(&json!(true)), "true");
/// assert_eq!(cell_text(&json!(10)), "10");
/// assert_eq!(cell_text(&json!(null)), "");
/// ```
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
