//! Asset entity - A node in the net-worth tracking tree.
//!
//! Assets may nest under a parent asset (e.g., individual accounts under a
//! "Banque" node), may be flagged as debts, and system assets are created by
//! the application itself rather than the user.

use crate::entities::types::SavingsType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    /// Unique identifier for the asset
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning budget
    pub budget_id: i64,
    /// Human-readable name of the asset
    pub name: String,
    /// Display position within the tree level
    pub sort_order: i32,
    /// Whether the asset is maintained by the application itself
    pub is_system: bool,
    /// Whether the asset counts against net worth
    pub is_debt: bool,
    /// Parent node in the asset tree (self-reference)
    pub parent_asset_id: Option<i64>,
    /// Savings bucket this asset is attributed to, if any
    pub savings_type: Option<SavingsType>,
}

/// Defines relationships between Asset and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Optional link to the parent node in the asset tree
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentAssetId", to = "Column::Id")]
    ParentAsset,
    /// One asset has one valuation per tracked year
    #[sea_orm(has_many = "super::asset_value::Entity")]
    AssetValues,
}

impl Related<super::asset_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetValues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
