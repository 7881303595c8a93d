//! Enum column types shared by several entities.
//!
//! Both enums are stored as plain strings so the database stays readable and
//! the values match the backup document's wire format exactly.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Kind of savings vehicle a payment method or asset is earmarked as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum SavingsType {
    /// Ordinary savings (rainy-day funds, livret-style accounts).
    #[sea_orm(string_value = "epargne")]
    Epargne,
    /// Contingency/provision savings set aside for known future expenses.
    #[sea_orm(string_value = "prevoyance")]
    Prevoyance,
    /// Investment accounts (brokerage, retirement).
    #[sea_orm(string_value = "investissements")]
    Investissements,
}

/// Category of a budget group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Money coming in (salary, benefits).
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out (rent, groceries).
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Money moved into savings rather than spent.
    #[sea_orm(string_value = "savings")]
    Savings,
}
