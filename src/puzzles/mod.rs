//! Sibling puzzles that read whitespace-separated integers
//!
//! - [`lists`]: distance and similarity between two location columns
//! - [`reports`]: reactor report safety, with and without the Problem Dampener
//!
//! Both parsers report the first field that is not an integer as a
//! [`ParseError`]; nothing is computed from a partially parsed file.

pub mod lists;
pub mod reports;

use std::fmt;

/// Parse error for line-oriented puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse one whitespace-separated field as an integer
pub(crate) fn parse_field(field: &str, line: usize) -> Result<i64, ParseError> {
    field.parse::<i64>().map_err(|_| ParseError {
        line,
        message: format!("Invalid integer: {}", field),
    })
}
