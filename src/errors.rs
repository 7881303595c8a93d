//! Unified error types for the backup subsystem and its surrounding plumbing.
//!
//! Backup rejections carry an HTTP-style status and a machine-readable code so
//! a transport layer can surface them unchanged; everything else maps to a
//! generic 500-class failure.

use thiserror::Error;

/// Machine-readable code for a backup declaring an unsupported schema version.
pub const CODE_UNSUPPORTED_VERSION: &str = "BACKUP_UNSUPPORTED_VERSION";
/// Machine-readable code for a structurally malformed backup document.
pub const CODE_INVALID_SCHEMA: &str = "BACKUP_INVALID_SCHEMA";
/// Machine-readable code for a backup whose cross-references do not resolve.
pub const CODE_INVALID_REFERENCE: &str = "BACKUP_INVALID_REFERENCE";

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The document declares a `schemaVersion` this build cannot restore.
    /// Versions are never coerced or auto-migrated.
    #[error("unsupported backup schema version: {found}")]
    UnsupportedVersion {
        /// JSON rendering of the declared version, or `missing`.
        found: String,
    },

    /// The payload is not shaped like a backup document (missing array field,
    /// wrong top-level type, malformed record).
    #[error("invalid backup document: {detail}")]
    InvalidSchema {
        /// Which field or record failed, and how.
        detail: String,
    },

    /// A foreign-key-shaped field points at an id that is absent from the
    /// corresponding entity array of the same document.
    #[error("{entity} `{name}` references unknown {field} {id}")]
    InvalidReference {
        /// Entity kind carrying the bad reference.
        entity: &'static str,
        /// Human-readable label of the offending record.
        name: String,
        /// Wire name of the offending field.
        field: &'static str,
        /// The dangling id.
        id: i64,
    },

    /// An id passed referential validation but had no entry in the old-to-new
    /// id map when a later insertion step needed it. Indicates an ordering bug
    /// in the importer, never bad user input.
    #[error("no remapped id recorded for {entity} {id}")]
    MissingRemap {
        /// Entity kind the map belongs to.
        entity: &'static str,
        /// The id that was never remapped.
        id: i64,
    },

    /// Database error from `SeaORM`.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error reading or writing a backup file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error outside of document validation.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP-style status for this error: 400 for rejected documents,
    /// 500 for everything else.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::UnsupportedVersion { .. }
            | Self::InvalidSchema { .. }
            | Self::InvalidReference { .. } => 400,
            _ => 500,
        }
    }

    /// Machine-readable code for document rejections, `None` for internal
    /// failures that callers should not branch on.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedVersion { .. } => Some(CODE_UNSUPPORTED_VERSION),
            Self::InvalidSchema { .. } => Some(CODE_INVALID_SCHEMA),
            Self::InvalidReference { .. } => Some(CODE_INVALID_REFERENCE),
            _ => None,
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
