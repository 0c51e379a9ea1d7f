//! Rewrites categorical labels in occurrence CSV exports into the numeric
//! codes expected by the occurrence database.
//!
//! The pipeline is `bytes → load_table → Normalizer → write_table → bytes`.
//! Input may be comma or semicolon separated; output is always comma
//! separated UTF-8.

pub mod config;
pub mod error;
pub mod io_utils;
pub mod loader;
pub mod lookup;
pub mod normalize;
pub mod preview;
pub mod serialize;
pub mod stats;
pub mod table;
pub mod tokenize;

pub use config::{Config, HeaderMatch};
pub use error::{ConvertError, ParseError};
pub use loader::{load_table, load_table_with_report, LoadReport};
pub use lookup::{
    normalize_key, LookupTable, COMMUNICATION_TYPE, COMMUNICATION_TYPE_COLUMN, OCCURRENCE_STATUS,
    OCCURRENCE_STATUS_COLUMN, OCCURRENCE_TYPES, OCCURRENCE_TYPES_COLUMN,
};
pub use normalize::{map_cell, ColumnRule, NormalizeReport, Normalizer};
pub use serialize::write_table;
pub use stats::ConversionStats;
pub use table::{Cell, RecordTable};

use tracing::info;

/// Everything produced by one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Table as loaded, before any label was encoded.
    pub original: RecordTable,
    pub converted: RecordTable,
    /// Comma separated output bytes.
    pub output: Vec<u8>,
    pub stats: ConversionStats,
}

/// Convert an uploaded file with the default configuration.
pub fn convert(raw: &[u8]) -> Result<Vec<u8>, ConvertError> {
    convert_with(raw, &Config::default()).map(|c| c.output)
}

/// Load, normalize and serialize `raw` according to `config`.
///
/// Nothing is returned unless every stage succeeds.
pub fn convert_with(raw: &[u8], config: &Config) -> Result<Conversion, ConvertError> {
    let (original, load_report) = load_table_with_report(raw)?;
    let normalizer = Normalizer::standard().with_header_match(config.header_match);
    let (converted, normalize_report) = normalizer.normalize_with_report(&original);
    let output = write_table(&converted)?;

    let mut stats = ConversionStats::new(load_report, normalize_report);
    stats.input_bytes = raw.len();
    stats.output_bytes = output.len();
    info!(
        rows = converted.len(),
        mapped = stats.cells_mapped,
        "conversion complete"
    );
    Ok(Conversion {
        original,
        converted,
        output,
        stats,
    })
}
