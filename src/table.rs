use serde::Serialize;
use std::fmt;

/// A single cell of a [`RecordTable`].
///
/// Cells start out as the raw text read from the file. The normalizer
/// replaces recognized labels with their integer code; everything else keeps
/// its original text, including casing, whitespace and accents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Code(i64),
}

impl Cell {
    /// A missing value is an empty text cell.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Text(s) if s.is_empty())
    }

    pub fn as_code(&self) -> Option<i64> {
        match self {
            Cell::Code(c) => Some(*c),
            Cell::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Code(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(c: i64) -> Self {
        Cell::Code(c)
    }
}

/// Ordered rows under a fixed, ordered set of named columns.
///
/// Every row holds exactly one cell per column, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RecordTable {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Returns `false` and leaves the table untouched when the
    /// row width does not match the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> bool {
        if row.len() != self.columns.len() {
            return false;
        }
        self.rows.push(row);
        true
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` under column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&Cell> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |r| &r[idx])
    }

    /// Apply `f` to every cell of column `idx`, in row order.
    pub fn map_column<F>(&mut self, idx: usize, mut f: F)
    where
        F: FnMut(&Cell) -> Cell,
    {
        for row in &mut self.rows {
            row[idx] = f(&row[idx]);
        }
    }

    /// Drop column `idx` from the header and every row.
    pub fn remove_column(&mut self, idx: usize) -> String {
        for row in &mut self.rows {
            row.remove(idx);
        }
        self.columns.remove(idx)
    }

    /// The first `n` rows, keeping all columns.
    pub fn head(&self, n: usize) -> RecordTable {
        RecordTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
