//! Monthly value entity - One month's budget/actual pair for a budget item.
//!
//! Keyed by (item, month); there is no independent id. Month runs 1-12.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Monthly value database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_values")]
pub struct Model {
    /// Budget item this value belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i64,
    /// Month of the year, 1-12
    #[sea_orm(primary_key, auto_increment = false)]
    pub month: i32,
    /// Budgeted amount for the month
    pub budget: f64,
    /// Actually spent/received amount for the month
    pub actual: f64,
}

/// Defines relationships between MonthlyValue and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each monthly value belongs to one budget item
    #[sea_orm(
        belongs_to = "super::budget_item::Entity",
        from = "Column::ItemId",
        to = "super::budget_item::Column::Id"
    )]
    BudgetItem,
}

impl Related<super::budget_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
