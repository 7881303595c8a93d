//! Budget year entity - One fiscal year's worth of budget data.
//!
//! Years scope budget items, transactions, transfers, asset values, and
//! account balances; deleting a year's budget cascades through the importer's
//! children-before-parents ordering rather than through database triggers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget year database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_years")]
pub struct Model {
    /// Unique identifier for the year
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning budget
    pub budget_id: i64,
    /// Calendar year (e.g., 2024)
    pub year: i32,
    /// Balance carried into January 1st
    pub initial_balance: f64,
}

/// Defines relationships between BudgetYear and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One year has many budget items
    #[sea_orm(has_many = "super::budget_item::Entity")]
    BudgetItems,
    /// One year has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
    /// One year has many asset valuations
    #[sea_orm(has_many = "super::asset_value::Entity")]
    AssetValues,
    /// One year has many transfers
    #[sea_orm(has_many = "super::transfer::Entity")]
    Transfers,
    /// One year has many per-account opening balances
    #[sea_orm(has_many = "super::account_balance::Entity")]
    AccountBalances,
}

impl Related<super::budget_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItems.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::asset_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetValues.def()
    }
}

impl Related<super::transfer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transfers.def()
    }
}

impl Related<super::account_balance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountBalances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
