//! Transaction entity - A single dated movement of money.
//!
//! Transactions belong to a year and a payment method, optionally to a budget
//! item. The accounting month/year may differ from the calendar date for
//! deferred-debit cards, and `warning` flags rows the user wants to revisit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Year this transaction belongs to
    pub year_id: i64,
    /// Budget item this transaction is booked against, if any
    pub item_id: Option<i64>,
    /// Calendar date of the transaction
    pub date: Date,
    /// Human-readable description
    pub description: String,
    /// Free-form note, if any
    pub comment: Option<String>,
    /// Counterparty (merchant, employer), if recorded
    pub third_party: Option<String>,
    /// Payment method the money moved through
    pub payment_method_id: i64,
    /// Amount (positive for income, negative for spending)
    pub amount: f64,
    /// Month the amount is accounted in, 1-12
    pub accounting_month: i32,
    /// Year the amount is accounted in
    pub accounting_year: i32,
    /// Whether the row is flagged for review
    pub warning: bool,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one budget year
    #[sea_orm(
        belongs_to = "super::budget_year::Entity",
        from = "Column::YearId",
        to = "super::budget_year::Column::Id"
    )]
    BudgetYear,
    /// Each transaction optionally belongs to one budget item
    #[sea_orm(
        belongs_to = "super::budget_item::Entity",
        from = "Column::ItemId",
        to = "super::budget_item::Column::Id"
    )]
    BudgetItem,
    /// Each transaction moved through one payment method
    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::PaymentMethodId",
        to = "super::payment_method::Column::Id"
    )]
    PaymentMethod,
}

impl Related<super::budget_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetYear.def()
    }
}

impl Related<super::budget_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItem.def()
    }
}

impl Related<super::payment_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMethod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
