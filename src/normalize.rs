//! Categorical normalizer.
//!
//! Each [`ColumnRule`] ties a column name to a [`LookupTable`]. Normalizing a
//! table rewrites matching cells of those columns into integer codes and
//! leaves every other cell, column and row exactly as it was.

use tracing::debug;

use crate::config::HeaderMatch;
use crate::lookup::{standard_tables, LookupTable};
use crate::table::{Cell, RecordTable};

/// A recognized column and the table used to encode it.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule<'a> {
    pub column: &'a str,
    pub table: &'a LookupTable,
}

impl<'a> ColumnRule<'a> {
    pub fn new(column: &'a str, table: &'a LookupTable) -> Self {
        Self { column, table }
    }
}

/// Counters gathered while normalizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Table columns that matched a rule, in table order.
    pub columns_normalized: Vec<String>,
    /// Cells replaced by a code.
    pub cells_mapped: usize,
    /// Non-empty text cells left as they were.
    pub cells_unmatched: usize,
}

#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    rules: Vec<ColumnRule<'a>>,
    header_match: HeaderMatch,
}

impl Normalizer<'static> {
    /// Normalizer for `communication_type`, `occurrence_types` and
    /// `occurrence_status` using the built-in tables.
    pub fn standard() -> Self {
        let rules = standard_tables()
            .into_iter()
            .map(|t| ColumnRule::new(t.column(), t))
            .collect();
        Self::new(rules)
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(rules: Vec<ColumnRule<'a>>) -> Self {
        Self {
            rules,
            header_match: HeaderMatch::default(),
        }
    }

    pub fn with_header_match(mut self, header_match: HeaderMatch) -> Self {
        self.header_match = header_match;
        self
    }

    pub fn rules(&self) -> &[ColumnRule<'a>] {
        &self.rules
    }

    /// Return a normalized copy of `input`; `input` itself is not touched.
    pub fn normalize(&self, input: &RecordTable) -> RecordTable {
        self.normalize_with_report(input).0
    }

    pub fn normalize_with_report(&self, input: &RecordTable) -> (RecordTable, NormalizeReport) {
        let mut output = input.clone();
        let mut report = NormalizeReport::default();

        for (idx, name) in input.columns().iter().enumerate() {
            let Some(rule) = self
                .rules
                .iter()
                .find(|r| self.header_match.matches(name, r.column))
            else {
                continue;
            };
            report.columns_normalized.push(name.clone());
            output.map_column(idx, |cell| {
                let mapped = map_cell(cell, rule.table);
                if mapped != *cell {
                    report.cells_mapped += 1;
                } else if !cell.is_missing() && cell.as_code().is_none() {
                    report.cells_unmatched += 1;
                }
                mapped
            });
        }

        debug!(
            columns = report.columns_normalized.len(),
            mapped = report.cells_mapped,
            unmatched = report.cells_unmatched,
            "normalized table"
        );
        (output, report)
    }
}

/// Encode a single cell. Codes and missing cells pass through; text is
/// replaced only when its normalized key is in `table`.
pub fn map_cell(cell: &Cell, table: &LookupTable) -> Cell {
    match cell {
        Cell::Text(text) if !text.is_empty() => match table.get(text) {
            Some(code) => Cell::Code(code),
            None => cell.clone(),
        },
        _ => cell.clone(),
    }
}
