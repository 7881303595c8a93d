//! Database configuration module.
//!
//! Handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! struct definitions without manual SQL. Statements run with `IF NOT EXISTS`
//! so startup is idempotent against an existing database file.

use crate::entities::{
    AccountBalance, Asset, AssetValue, BudgetGroup, BudgetItem, BudgetYear, MonthlyValue,
    PaymentMethod, Transaction, Transfer,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default connection string when `DATABASE_URL` is not configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/tirelire.sqlite?mode=rwc";

/// Establishes a connection to the database at the given URL.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all database tables from the entity definitions.
///
/// Tables are created parents-first so every foreign key refers to an
/// already-declared table. Calling this against an initialized database is a
/// no-op.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let statements = [
        schema.create_table_from_entity(PaymentMethod),
        schema.create_table_from_entity(BudgetYear),
        schema.create_table_from_entity(BudgetGroup),
        schema.create_table_from_entity(BudgetItem),
        schema.create_table_from_entity(MonthlyValue),
        schema.create_table_from_entity(Transaction),
        schema.create_table_from_entity(Asset),
        schema.create_table_from_entity(AssetValue),
        schema.create_table_from_entity(Transfer),
        schema.create_table_from_entity(AccountBalance),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(builder.build(&statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        asset::Model as AssetModel, budget_year::Model as BudgetYearModel,
        payment_method::Model as PaymentMethodModel, transaction::Model as TransactionModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<PaymentMethodModel> = PaymentMethod::find().limit(1).all(&db).await?;
        let _: Vec<BudgetYearModel> = BudgetYear::find().limit(1).all(&db).await?;
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;
        let _: Vec<AssetModel> = Asset::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<BudgetYearModel> = BudgetYear::find().limit(1).all(&db).await?;
        Ok(())
    }
}
