//! Domain error types

use thiserror::Error;

/// Error when parsing an interval string
#[derive(Debug, Clone, Error)]
#[error("Invalid interval format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 2s, 1m, 1m30s)")]
pub struct IntervalParseError {
    pub input: String,
}
