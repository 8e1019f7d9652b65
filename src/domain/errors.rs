//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

/// Failure reported by a `PartitionLoader`.
///
/// Kept distinct from an empty partition so callers can tell
/// "the table could not be obtained" apart from "the table has no entries".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The partition does not exist in the backing store
    NotFound(String),
    /// I/O or network failure while fetching
    Transport(String),
    /// The partition was fetched but is not a valid entry array
    Malformed(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::NotFound(what) => write!(f, "Cutter table not found: {}", what),
            LoaderError::Transport(msg) => write!(f, "Transport error: {}", msg),
            LoaderError::Malformed(msg) => write!(f, "Malformed cutter table: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Name was empty or whitespace-only
    EmptyInput,
    /// The partition holds no entry for this letter group
    NoEntriesForLetter(String),
    /// The partition could not be loaded
    TableUnavailable {
        partition: String,
        source: LoaderError,
    },
    /// The request cannot be turned into a call number
    NotClassifiable(String),
}

impl ResolutionError {
    /// Underlying transport text, kept for diagnostics
    pub fn details(&self) -> Option<String> {
        match self {
            ResolutionError::TableUnavailable { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::EmptyInput => {
                write!(f, "Please enter a name to generate a cutter number")
            }
            ResolutionError::NoEntriesForLetter(letter) => {
                write!(f, "No entries found for letter \"{}\"", letter)
            }
            ResolutionError::TableUnavailable { partition, source } => write!(
                f,
                "Failed to load cutter table data for partition \"{}\": {}",
                partition, source
            ),
            ResolutionError::NotClassifiable(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolutionError::TableUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
