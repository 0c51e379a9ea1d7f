//! Tabular loader: raw bytes in, [`RecordTable`] out.
//!
//! Parsing is lossy on purpose. Rows whose width disagrees with the header
//! are skipped, and columns that end up with no value at all are removed.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::table::{Cell, RecordTable};
use crate::tokenize::split_fields;

const UTF8_BOM: char = '\u{feff}';

/// Bookkeeping produced while loading a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data lines seen after the header, blank lines excluded.
    pub rows_read: usize,
    /// Data lines discarded as malformed.
    pub rows_dropped: usize,
    /// Columns removed because every value was missing.
    pub columns_dropped: Vec<String>,
}

/// Load a table, discarding the load report.
pub fn load_table(raw: &[u8]) -> Result<RecordTable, ParseError> {
    load_table_with_report(raw).map(|(table, _)| table)
}

/// Decode `raw` as UTF-8 text and parse it into a table.
pub fn load_table_with_report(raw: &[u8]) -> Result<(RecordTable, LoadReport), ParseError> {
    let text = std::str::from_utf8(raw).map_err(|e| ParseError::Decode(e.to_string()))?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(ParseError::Empty)?;
    let header = split_fields(header_line).map_err(|e| ParseError::Header(e.to_string()))?;
    let blank_header: Vec<bool> = header.iter().map(|h| h.trim().is_empty()).collect();
    let mut table = RecordTable::new(column_names(header));
    let mut report = LoadReport::default();

    for (line_no, line) in lines {
        report.rows_read += 1;
        let accepted = match split_fields(line) {
            Ok(fields) => table.push_row(fields.into_iter().map(Cell::Text).collect()),
            Err(_) => false,
        };
        if !accepted {
            trace!(line = line_no, "skipping malformed row");
            report.rows_dropped += 1;
        }
    }

    report.columns_dropped = drop_empty_columns(&mut table, &blank_header);
    debug!(
        columns = table.columns().len(),
        rows = table.len(),
        dropped_rows = report.rows_dropped,
        dropped_columns = report.columns_dropped.len(),
        "loaded table"
    );
    Ok((table, report))
}

/// Trim header names, name blank ones `Unnamed: <index>` and make duplicates
/// unique by suffixing `.1`, `.2`, ...
fn column_names(raw: Vec<String>) -> Vec<String> {
    let mut taken = HashSet::new();
    let mut names = Vec::with_capacity(raw.len());
    for (idx, name) in raw.into_iter().enumerate() {
        let base = match name.trim() {
            "" => format!("Unnamed: {idx}"),
            trimmed => trimmed.to_string(),
        };
        let mut candidate = base.clone();
        let mut suffix = 0;
        while taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}.{suffix}");
        }
        taken.insert(candidate.clone());
        names.push(candidate);
    }
    names
}

/// Remove every column whose cells are all missing. Without data rows only
/// the columns with a blank header name (trailing delimiters) are removed.
fn drop_empty_columns(table: &mut RecordTable, blank_header: &[bool]) -> Vec<String> {
    let no_rows = table.is_empty();
    let mut dropped = Vec::new();
    for idx in (0..table.columns().len()).rev() {
        let empty = if no_rows {
            blank_header[idx]
        } else {
            table.column(idx).all(Cell::is_missing)
        };
        if empty {
            dropped.push(table.remove_column(idx));
        }
    }
    dropped.reverse();
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_and_blank_headers_get_unique_names() {
        let names = column_names(vec![
            " a ".into(),
            "a".into(),
            "".into(),
            "a.1".into(),
        ]);
        assert_eq!(names, vec!["a", "a.1", "Unnamed: 2", "a.1.1"]);
    }

    #[test]
    fn header_only_keeps_named_columns() {
        let (table, report) = load_table_with_report(b"a;b;\n").unwrap();
        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(report.columns_dropped, vec!["Unnamed: 2"]);
        assert!(table.is_empty());
    }

    #[test]
    fn blank_header_with_values_is_kept() {
        let table = load_table(b"a;\n1;x\n").unwrap();
        assert_eq!(table.columns(), ["a", "Unnamed: 1"]);
    }

    #[test]
    fn bom_is_stripped() {
        let table = load_table("\u{feff}a,b\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.columns(), ["a", "b"]);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let (table, report) =
            load_table_with_report(b"\r\na,b\r\n\r\n1,2\r\n  \r\n3,4\r\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(report.rows_read, 2);
        assert_eq!(table.get(1, "b"), Some(&Cell::from("4")));
    }

    #[test]
    fn unterminated_quote_drops_row() {
        let (table, report) = load_table_with_report(b"a,b\n\"x,1\n2,3\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(report.rows_dropped, 1);
    }

    #[test]
    fn unterminated_quote_in_header_fails() {
        assert!(matches!(
            load_table(b"\"a,b\n1,2\n"),
            Err(ParseError::Header(_))
        ));
    }
}
