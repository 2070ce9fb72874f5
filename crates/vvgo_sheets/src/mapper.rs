//! Row-to-record binding.
//!
//! A record type declares a table of [`Column`]s once. Each column names
//! its header cell and knows how to store a cell into one field. Mapping is
//! permissive: unknown columns, short rows and unparseable cells leave the
//! field at its default value.

use crate::{Cell, Row, cell_text};
use std::collections::HashMap;
use tracing::debug;

/// Position of each header name within a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    /// Build an index from a header row.
    ///
    /// When a name repeats, the right-most column wins.
    pub fn new(header: &[Cell]) -> Self {
        Self(
            header
                .iter()
                .enumerate()
                .map(|(i, cell)| (cell_text(cell), i))
                .collect(),
        )
    }

    /// Column position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    /// Number of indexed columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the header row was empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

enum Setter<T> {
    Text(fn(&mut T) -> &mut String),
    Flag(fn(&mut T) -> &mut bool),
    Integer(fn(&mut T) -> &mut i64),
}

/// One entry of a record's column table.
pub struct Column<T> {
    name: &'static str,
    setter: Setter<T>,
}

impl<T> Column<T> {
    /// A string field; takes the cell's textual form.
    pub const fn text(name: &'static str, field: fn(&mut T) -> &mut String) -> Self {
        Self {
            name,
            setter: Setter::Text(field),
        }
    }

    /// A boolean field; see [`parse_bool`] for accepted spellings.
    pub const fn flag(name: &'static str, field: fn(&mut T) -> &mut bool) -> Self {
        Self {
            name,
            setter: Setter::Flag(field),
        }
    }

    /// An integer field; parses base-10 text.
    pub const fn integer(name: &'static str, field: fn(&mut T) -> &mut i64) -> Self {
        Self {
            name,
            setter: Setter::Integer(field),
        }
    }

    /// Header name this column reads from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, record: &mut T, cell: &Cell) {
        let text = cell_text(cell);
        match self.setter {
            Setter::Text(field) => *field(record) = text,
            Setter::Flag(field) => match parse_bool(&text) {
                Some(value) => *field(record) = value,
                None => debug!(column = self.name, value = %text, "not a boolean, using default"),
            },
            Setter::Integer(field) => match text.parse::<i64>() {
                Ok(value) => *field(record) = value,
                Err(_) => debug!(column = self.name, value = %text, "not an integer, using default"),
            },
        }
    }
}

/// Records that can be built from a spreadsheet row.
pub trait FromRow: Default + 'static {
    /// The column table for this record type.
    fn columns() -> &'static [Column<Self>];

    /// Build one record from `row`, looking columns up in `index`.
    fn from_row(row: &[Cell], index: &HeaderIndex) -> Self {
        let mut record = Self::default();
        for column in Self::columns() {
            let Some(position) = index.position(column.name) else {
                continue;
            };
            if let Some(cell) = row.get(position) {
                column.apply(&mut record, cell);
            }
        }
        record
    }
}

/// Map a block of rows into records.
///
/// The first row is the header; every following row produces one record.
pub fn map_rows<T: FromRow>(values: &[Row]) -> Vec<T> {
    let Some((header, rows)) = values.split_first() else {
        return Vec::new();
    };
    let index = HeaderIndex::new(header);
    rows.iter().map(|row| T::from_row(row, &index)).collect()
}

/// Parse the boolean spellings a spreadsheet export may contain.
///
/// ```
/// use vvgo_sheets::parse_bool;
///
/// assert_eq!(parse_bool("TRUE"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
