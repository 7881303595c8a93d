//! Account balance entity - One payment method's opening balance for a year.
//!
//! Keyed by (year, payment method); there is no independent id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account balance database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account_balances")]
pub struct Model {
    /// Year the balance applies to
    #[sea_orm(primary_key, auto_increment = false)]
    pub year_id: i64,
    /// Payment method the balance belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub payment_method_id: i64,
    /// Balance carried into January 1st of that year
    pub initial_balance: f64,
}

/// Defines relationships between AccountBalance and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each balance belongs to one budget year
    #[sea_orm(
        belongs_to = "super::budget_year::Entity",
        from = "Column::YearId",
        to = "super::budget_year::Column::Id"
    )]
    BudgetYear,
    /// Each balance belongs to one payment method
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

impl Related<super::payment_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMethod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
