//! Transfer entity - A movement of funds between two payment methods.
//!
//! Transfers are not budget transactions; they never touch a budget item.
//! Source and destination are both payment methods of the same user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transfer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transfers")]
pub struct Model {
    /// Unique identifier for the transfer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Year this transfer belongs to
    pub year_id: i64,
    /// Calendar date of the transfer
    pub date: Date,
    /// Amount moved (always from source to destination)
    pub amount: f64,
    /// Human-readable description
    pub description: String,
    /// Payment method the money left
    pub source_account_id: i64,
    /// Payment method the money arrived on
    pub destination_account_id: i64,
    /// Month the transfer is accounted in, 1-12
    pub accounting_month: i32,
    /// Year the transfer is accounted in
    pub accounting_year: i32,
}

/// Defines relationships between Transfer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transfer belongs to one budget year
    #[sea_orm(
        belongs_to = "super::budget_year::Entity",
        from = "Column::YearId",
        to = "super::budget_year::Column::Id"
    )]
    BudgetYear,
    /// Payment method the money left
    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::SourceAccountId",
        to = "super::payment_method::Column::Id"
    )]
    SourceAccount,
    /// Payment method the money arrived on
    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::DestinationAccountId",
        to = "super::payment_method::Column::Id"
    )]
    DestinationAccount,
}

impl Related<super::budget_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetYear.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
