//! Budget group entity - A named category bucket for budget items.
//!
//! Groups (e.g., "Logement", "Courses") are typed income/expense/savings and
//! span years: items of several years may share one group.

use crate::entities::types::GroupType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget group database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_groups")]
pub struct Model {
    /// Unique identifier for the group
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning budget
    pub budget_id: i64,
    /// Human-readable name of the group
    pub name: String,
    /// URL-friendly identifier derived from the name
    pub slug: String,
    /// Whether the group holds income, expenses, or savings
    pub group_type: GroupType,
    /// Display position within the budget
    pub sort_order: i32,
}

/// Defines relationships between BudgetGroup and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One group has many budget items
    #[sea_orm(has_many = "super::budget_item::Entity")]
    BudgetItems,
}

impl Related<super::budget_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
