//! User-facing error messages for the command line tools.

use std::fmt;
use std::io;
use std::path::Path;

use crate::error::{ConvertError, ParseError};

/// Error shown to the user by the CLI, optionally wrapping its cause.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: None,
        }
    }

    fn caused_by(mut self, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(err));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// What the user can do about a failed read or write of a CSV file.
fn io_suggestion(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check that the file is not open in another program.",
        _ => "Try exporting the file again.",
    }
}

/// I/O failure on `path` while doing `operation` ("reading input file", ...).
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    let msg = format!(
        "Error {operation} '{}': {err}. {}",
        path.display(),
        io_suggestion(&err)
    );
    CliError::new(msg).caused_by(err)
}

pub fn simple_cli_error(msg: &str) -> CliError {
    CliError::new(msg)
}

/// The input is not a `.csv` file.
pub fn extension_error(path: &Path) -> CliError {
    CliError::new(format!(
        "Invalid file extension for '{}'. Expected a .csv export.",
        path.display()
    ))
}

/// Wrap a conversion failure with `context` and a hint from [`cli_hint`].
pub fn convert_cli_error(context: &str, err: ConvertError) -> CliError {
    CliError::new(format!("{context}: {}", cli_hint(&err))).caused_by(err)
}

/// The error message followed by an actionable hint.
pub fn cli_hint(err: &ConvertError) -> String {
    match err {
        ConvertError::Parse(ParseError::Empty) => {
            format!("{err}. The file has no header line.")
        }
        ConvertError::Parse(ParseError::Decode(_)) => {
            format!("{err}. Save the file as UTF-8 and try again.")
        }
        ConvertError::Parse(ParseError::Header(_)) => {
            format!("{err}. Check the quotes in the first line.")
        }
        ConvertError::Csv(e) => format!("{e}. Output could not be written."),
        ConvertError::Io(io) => format!("{io}"),
        ConvertError::Config(msg) => format!("{msg}. Invalid configuration."),
    }
}
