//! Asset value entity - One asset's valuation for one year.
//!
//! Keyed by (asset, year); there is no independent id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset value database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_values")]
pub struct Model {
    /// Asset being valued
    #[sea_orm(primary_key, auto_increment = false)]
    pub asset_id: i64,
    /// Year the valuation applies to
    #[sea_orm(primary_key, auto_increment = false)]
    pub year_id: i64,
    /// Value of the asset at that year's snapshot
    pub value: f64,
}

/// Defines relationships between AssetValue and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each valuation belongs to one asset
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id"
    )]
    Asset,
    /// Each valuation belongs to one budget year
    #[sea_orm(
        belongs_to = "super::budget_year::Entity",
        from = "Column::YearId",
        to = "super::budget_year::Column::Id"
    )]
    BudgetYear,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::budget_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetYear.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
