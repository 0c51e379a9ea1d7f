use crate::error::ConvertError;

/// How header names are compared against the recognized column names.
///
/// Names are always trimmed by the loader; this only controls case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMatch {
    /// `communication_type` matches only `communication_type`.
    #[default]
    Exact,
    /// `COMMUNICATION_TYPE` is recognized as well.
    IgnoreCase,
}

impl HeaderMatch {
    pub fn matches(self, header: &str, column: &str) -> bool {
        match self {
            HeaderMatch::Exact => header == column,
            HeaderMatch::IgnoreCase => header.to_lowercase() == column.to_lowercase(),
        }
    }
}

/// Runtime configuration for a single conversion.
#[derive(Debug, Clone)]
pub struct Config {
    /// Header comparison mode used by the normalizer.
    pub header_match: HeaderMatch,
    /// Number of rows shown by table previews.
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_match: HeaderMatch::Exact,
            preview_rows: 5,
        }
    }
}

impl Config {
    /// Reject settings the CLI cannot act on.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.preview_rows == 0 {
            return Err(ConvertError::Config("preview rows must be at least 1".into()));
        }
        Ok(())
    }
}
