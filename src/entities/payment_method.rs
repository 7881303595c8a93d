//! Payment method entity - Represents a user's accounts and cards.
//!
//! A payment method may double as a trackable savings account
//! (`is_savings_account` + `savings_type`) and may link to another payment
//! method, e.g. a deferred-debit card linked to the checking account that
//! settles it.

use crate::entities::types::SavingsType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment method database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_methods")]
pub struct Model {
    /// Unique identifier for the payment method
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Human-readable name (e.g., "Carte Visa", "Compte courant")
    pub name: String,
    /// Bank or institution holding the account, if any
    pub institution: Option<String>,
    /// Display position within the user's list
    pub sort_order: i32,
    /// Whether this method is tracked as a savings account
    pub is_savings_account: bool,
    /// Savings bucket this account belongs to, when it is a savings account
    pub savings_type: Option<SavingsType>,
    /// Day of month a deferred-debit card settles, if applicable
    pub settlement_day: Option<i32>,
    /// Payment method this one settles to (self-reference)
    pub linked_payment_method_id: Option<i64>,
}

/// Defines relationships between PaymentMethod and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Optional link to the payment method this one settles to
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::LinkedPaymentMethodId",
        to = "Column::Id"
    )]
    LinkedPaymentMethod,
    /// One payment method has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
    /// One payment method has many per-year opening balances
    #[sea_orm(has_many = "super::account_balance::Entity")]
    AccountBalances,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::account_balance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountBalances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
