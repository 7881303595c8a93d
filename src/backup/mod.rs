//! Portable backup of a user's budget data.
//!
//! A backup is one versioned JSON document holding every row the user/budget
//! pair owns. [`export_backup`] assembles it, [`validate_backup_payload`]
//! checks an incoming payload without touching the database, and
//! [`import_backup`] restores one transactionally, remapping every id.

pub mod document;
pub mod export;
pub mod import;
pub mod validate;

pub use document::{BACKUP_SCHEMA_VERSION, BackupDocument, ImportSummary};
pub use export::export_backup;
pub use import::import_backup;
pub use validate::validate_backup_payload;
