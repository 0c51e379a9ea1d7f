use thiserror::Error;

/// Failure to turn the uploaded bytes into a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No header line could be found.
    #[error("no columns to parse from file")]
    Empty,
    /// The bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 text: {0}")]
    Decode(String),
    /// The header line itself could not be tokenized.
    #[error("malformed header line: {0}")]
    Header(String),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input could not be loaded as a table.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Output serialization failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}
