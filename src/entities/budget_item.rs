//! Budget item entity - An individual budget line within a year.
//!
//! Each item (e.g., "Loyer") belongs to a year, optionally to a group, and
//! carries a yearly lump-sum budget alongside its twelve monthly values.
//! Savings items may point at the payment method the money lands on.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Year this item belongs to
    pub year_id: i64,
    /// Group this item is categorized under, if any
    pub group_id: Option<i64>,
    /// Human-readable name of the item
    pub name: String,
    /// URL-friendly identifier derived from the name
    pub slug: String,
    /// Display position within the group
    pub sort_order: i32,
    /// Lump-sum budget for the whole year
    pub yearly_budget: f64,
    /// Savings account receiving this item's amounts, if it is a savings line
    pub savings_account_id: Option<i64>,
}

/// Defines relationships between BudgetItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one budget year
    #[sea_orm(
        belongs_to = "super::budget_year::Entity",
        from = "Column::YearId",
        to = "super::budget_year::Column::Id"
    )]
    BudgetYear,
    /// Each item optionally belongs to one budget group
    #[sea_orm(
        belongs_to = "super::budget_group::Entity",
        from = "Column::GroupId",
        to = "super::budget_group::Column::Id"
    )]
    BudgetGroup,
    /// Optional link to the savings account fed by this item
    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::SavingsAccountId",
        to = "super::payment_method::Column::Id"
    )]
    SavingsAccount,
    /// One item has twelve monthly budget/actual pairs at most
    #[sea_orm(has_many = "super::monthly_value::Entity")]
    MonthlyValues,
    /// One item has many transactions booked against it
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::budget_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetYear.def()
    }
}

impl Related<super::budget_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetGroup.def()
    }
}

impl Related<super::monthly_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyValues.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
