//! Command-line interface.
//!
//! Three subcommands cover the backup lifecycle: `export` writes a user's
//! budget to a JSON document, `validate` checks a document without a
//! database, and `import` restores one transactionally. The database URL
//! comes from `--database-url`, the `DATABASE_URL` environment variable, or
//! the built-in default, in that order.

use crate::backup::{export_backup, import_backup, validate_backup_payload};
use crate::config::database::{self, DEFAULT_DATABASE_URL};
use crate::errors::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level argument parser.
#[derive(Debug, Parser)]
#[command(
    name = "tirelire",
    version,
    about = "Backup tooling for tirelire budgets",
    long_about = "Exports a user's complete budget to a portable JSON document, \
                  validates documents offline, and restores them into a database \
                  transactionally with full id remapping."
)]
pub struct Cli {
    /// Database to operate on
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL,
        global = true
    )]
    pub database_url: String,

    /// Requested operation
    #[command(subcommand)]
    pub command: Command,
}

/// The backup lifecycle operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export one user/budget pair to a backup document
    Export {
        /// Owner of the payment methods
        #[arg(long)]
        user: i64,

        /// Budget to export
        #[arg(long)]
        budget: i64,

        /// Write the document to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a backup document without touching any database
    Validate {
        /// Path to the document
        input: PathBuf,
    },

    /// Restore a backup document into one user/budget pair, replacing its
    /// current data
    Import {
        /// Owner of the payment methods
        #[arg(long)]
        user: i64,

        /// Budget to restore into
        #[arg(long)]
        budget: i64,

        /// Path to the document
        input: PathBuf,
    },
}

/// Executes the parsed command.
///
/// # Errors
/// Connection and statement failures surface as [`crate::errors::Error`],
/// as do rejected documents and file IO problems.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export {
            user,
            budget,
            output,
        } => {
            let db = database::connect(&cli.database_url).await?;
            database::create_tables(&db).await?;
            let document = export_backup(&db, user, budget).await?;
            let rendered = serde_json::to_string_pretty(&document)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!(path = %path.display(), "backup written");
                }
                None => println!("{rendered}"),
            }
        }
        Command::Validate { input } => {
            let payload = read_payload(&input)?;
            let document = validate_backup_payload(&payload)?;
            println!(
                "valid backup document: schema version {}, {} budget years, {} transactions",
                document.schema_version,
                document.budget_years.len(),
                document.transactions.len()
            );
        }
        Command::Import {
            user,
            budget,
            input,
        } => {
            let db = database::connect(&cli.database_url).await?;
            database::create_tables(&db).await?;
            let payload = read_payload(&input)?;
            let summary = import_backup(&db, user, budget, &payload).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn read_payload(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
