//! Top-level error type for the command-line tools
//!
//! [`HistorianError`] wraps every failure a tool can hit between reading its
//! arguments and printing its result. [`ErrorClass`] groups them into the
//! four ways a failure is reported to the user.

use crate::interpreter::errors::ScanError;
use crate::puzzles::ParseError;
use std::fmt;
use std::io;

/// How a failure is reported on standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Wrong argument count
    Usage,
    /// Input file does not exist
    NotFound,
    /// Input could not be converted into values
    InvalidData,
    /// Anything else
    Unexpected,
}

#[derive(Debug)]
pub enum HistorianError {
    /// Wrong number of command-line arguments
    Usage { program: String },

    /// Input file does not exist
    NotFound { path: String },

    /// Reading the input file failed for another reason
    Io { path: String, source: io::Error },

    /// A puzzle input held something other than integers
    Parse(ParseError),

    /// Scanning or evaluating the memory blob failed
    Scan(ScanError),

    /// Terminal setup or drawing failed
    Terminal(io::Error),
}

impl HistorianError {
    pub fn class(&self) -> ErrorClass {
        match self {
            HistorianError::Usage { .. } => ErrorClass::Usage,
            HistorianError::NotFound { .. } => ErrorClass::NotFound,
            HistorianError::Io { source, .. } if source.kind() == io::ErrorKind::InvalidData => {
                ErrorClass::InvalidData
            }
            HistorianError::Parse(_) => ErrorClass::InvalidData,
            HistorianError::Io { .. } | HistorianError::Scan(_) | HistorianError::Terminal(_) => {
                ErrorClass::Unexpected
            }
        }
    }

    /// The single line printed for this failure
    pub fn user_message(&self) -> String {
        match (self.class(), self) {
            (_, HistorianError::Usage { program }) => {
                format!("Usage: {} <file_path>", program)
            }
            (_, HistorianError::NotFound { path }) => {
                format!("Error: File '{}' not found.", path)
            }
            (ErrorClass::InvalidData, _) => "Error: File contains invalid data.".to_string(),
            (_, err) => format!("An unexpected error occurred: {}", err),
        }
    }
}

impl fmt::Display for HistorianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistorianError::Usage { program } => {
                write!(f, "{} expects exactly one file path", program)
            }
            HistorianError::NotFound { path } => write!(f, "File '{}' not found", path),
            HistorianError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            HistorianError::Parse(err) => write!(f, "{}", err),
            HistorianError::Scan(err) => write!(f, "{}", err),
            HistorianError::Terminal(err) => write!(f, "Terminal error: {}", err),
        }
    }
}

impl std::error::Error for HistorianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistorianError::Io { source, .. } => Some(source),
            HistorianError::Parse(err) => Some(err),
            HistorianError::Scan(err) => Some(err),
            HistorianError::Terminal(err) => Some(err),
            HistorianError::Usage { .. } | HistorianError::NotFound { .. } => None,
        }
    }
}

impl From<ParseError> for HistorianError {
    fn from(err: ParseError) -> Self {
        HistorianError::Parse(err)
    }
}

impl From<ScanError> for HistorianError {
    fn from(err: ScanError) -> Self {
        HistorianError::Scan(err)
    }
}

impl From<io::Error> for HistorianError {
    fn from(err: io::Error) -> Self {
        HistorianError::Terminal(err)
    }
}
