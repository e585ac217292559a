//! Unified error handling for route cleaning.
//!
//! The classifier itself is total and never fails; every error here comes
//! from the I/O adapters around it.

use thiserror::Error;

/// Errors that can occur while reading or writing fix records.
#[derive(Debug, Error)]
pub enum RouteCleanError {
    /// A record could not be parsed into a (latitude, longitude, timestamp)
    /// triple, or its coordinates are out of range. Malformed records fail
    /// the read rather than being coerced to zero.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Underlying CSV layer failure (I/O or framing).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Plain I/O failure (e.g. flushing the output stream).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteCleanError>;
