//! Scan error types for the instruction evaluator
//!
//! This module defines [`ScanError`], which represents the errors that can
//! occur while recording a scan history and navigating it. Plain evaluation
//! never fails.

use crate::scanner::instruction::SourceLocation;
use std::fmt;

/// Errors that can occur during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History navigation failed (already at start/end, missing snapshot)
    Generic {
        message: String,
        location: SourceLocation,
    },
}

impl ScanError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            ScanError::Generic { location, .. } => Some(location),
            ScanError::SnapshotLimitExceeded { .. } => None,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            ScanError::Generic { message, location } => {
                write!(f, "{} at line {}", message, location.line)
            }
        }
    }
}

impl std::error::Error for ScanError {}
