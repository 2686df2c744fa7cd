//! Error types shared across the workspace.
//!
//! `RatesError` unifies the failure cases of loading and querying a rate table:
//! structural JSON errors, lookup misses, and I/O while reading a rates
//! document. `LookupError` is the narrower error returned by rate lookups.
use std::io;

use thiserror::Error;

/// Failure to resolve a conversion pair in a rate table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The table holds no conversions at all.
    #[error("currency: rates are nil")]
    RatesNil,

    /// No rates are stored for the source currency.
    #[error("currency: no rate for source {from}")]
    UnknownSource {
        /// Source currency code that missed.
        from: String,
    },

    /// The source currency is known but has no rate to the target.
    #[error("currency: no rate for target {to} from source {from}")]
    UnknownTarget {
        /// Source currency code.
        from: String,
        /// Target currency code that missed.
        to: String,
    },
}

/// Unified error type for the rate table and its hosts.
#[derive(Error, Debug)]
pub enum RatesError {
    /// Structural violation in a rates JSON document.
    #[error("JSON serialization/deserialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A conversion pair could not be resolved.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// I/O error while reading a rates document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
