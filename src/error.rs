//! Error types for the lipi-convert library.
//!
//! Two distinct kinds of failure exist, and they travel differently:
//!
//! * [`LipiError`]: **Fatal** to the call that produced it: an encoding id
//!   that is not registered, a registration conflict at startup, a malformed
//!   external mapping file, or a sample too short to analyse. Returned as
//!   `Err(LipiError)`.
//!
//! * Quality warnings: **Non-fatal**: unmapped characters
//!   ([`crate::output::UnmappedChar`]) and detection caveats
//!   ([`crate::output::DetectionWarning`]). These are data, stored inside the
//!   successful result so the caller can decide whether to proceed, warn the
//!   user, or ask for a manual encoding override.
//!
//! Nothing in this crate retries. A legacy document that mixes encodings or
//! carries stray control bytes still converts; the warnings say where.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LipiError>;

/// All fatal errors returned by the lipi-convert library.
#[derive(Debug, Error)]
pub enum LipiError {
    // ── Registry errors ───────────────────────────────────────────────────
    /// The requested encoding id is not registered.
    #[error(
        "Unknown encoding '{encoding_id}'\nCall list_encodings() to see the registered ids."
    )]
    UnknownEncoding { encoding_id: String },

    /// A table with this id is already registered and no override was requested.
    #[error(
        "Encoding '{encoding_id}' is already registered\nPass OnConflict::Replace to override it."
    )]
    DuplicateEncoding { encoding_id: String },

    // ── Detection errors ──────────────────────────────────────────────────
    /// The heuristic detector was given too little text to analyse.
    ///
    /// Recoverable: retry with a longer sample, or rely on font-name evidence.
    #[error("Sample too short for heuristic detection: {len} chars (minimum {min})")]
    InsufficientSample { len: usize, min: usize },

    // ── Mapping table errors ──────────────────────────────────────────────
    /// A mapping table failed validation.
    ///
    /// `source_name` is the file the table came from, or `<builtin>` / `<memory>`.
    #[error("Invalid mapping table '{source_name}': field '{field}': {reason}")]
    InvalidTable {
        source_name: String,
        field: String,
        reason: String,
    },

    /// An external mapping file could not be read.
    #[error("Failed to read mapping file '{path}': {source}")]
    TableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external JSON mapping file is malformed or does not match the table shape.
    #[error(
        "Malformed mapping file '{path}' at line {line}, column {column}: {source}\nExpected one MappingTable object per file."
    )]
    TableParse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An external YAML mapping file is malformed or does not match the table shape.
    ///
    /// `line` and `column` are 0 when the parser reports no location.
    #[error(
        "Malformed mapping file '{path}' at line {line}, column {column}: {source}\nExpected one MappingTable object per file."
    )]
    TableYaml {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_yaml::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LipiError {
    pub(crate) fn unknown(encoding_id: impl Into<String>) -> Self {
        LipiError::UnknownEncoding {
            encoding_id: encoding_id.into(),
        }
    }

    pub(crate) fn invalid_table(
        source_name: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LipiError::InvalidTable {
            source_name: source_name.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
