//! `ConversionStats` summarizes one conversion for the user: how much was
//! read, what was skipped and how many labels were encoded.

use serde::Serialize;

use crate::loader::LoadReport;
use crate::normalize::NormalizeReport;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub columns_dropped: Vec<String>,
    pub columns_normalized: Vec<String>,
    pub cells_mapped: usize,
    pub cells_unmatched: usize,
}

impl ConversionStats {
    pub fn new(load: LoadReport, normalize: NormalizeReport) -> Self {
        Self {
            rows_read: load.rows_read,
            rows_dropped: load.rows_dropped,
            columns_dropped: load.columns_dropped,
            columns_normalized: normalize.columns_normalized,
            cells_mapped: normalize.cells_mapped,
            cells_unmatched: normalize.cells_unmatched,
            ..Self::default()
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_read - self.rows_dropped
    }

    pub fn report(&self) {
        eprintln!(
            "Converted {} of {} rows ({} dropped), {} labels encoded, {} left as text",
            self.rows_written(),
            self.rows_read,
            self.rows_dropped,
            self.cells_mapped,
            self.cells_unmatched
        );
        if !self.columns_dropped.is_empty() {
            eprintln!("Removed empty columns: {}", self.columns_dropped.join(", "));
        }
    }
}
