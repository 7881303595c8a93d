//! Backup document types - the portable wire format for a full budget.
//!
//! A backup is a single JSON object: a `schemaVersion` tag, an informational
//! `exportedAt` timestamp, and ten arrays of plain records, one per entity
//! kind. Records keep the *original* database ids of payment methods, years,
//! groups, items, and assets so cross-references stay resolvable inside the
//! document; those ids are remapped on import, never reused. Monetary fields
//! travel as decimal strings (`"100.00"`) but numbers are accepted on input.

use crate::entities::{
    account_balance, asset, asset_value, budget_group, budget_item, budget_year, monthly_value,
    payment_method, transaction, transfer,
};
use crate::entities::{GroupType, SavingsType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// The single backup document revision this build can produce and restore.
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// Top-level array fields of a backup document, in canonical order.
pub(crate) const ARRAY_FIELDS: [&str; 10] = [
    "paymentMethods",
    "budgetYears",
    "budgetGroups",
    "budgetItems",
    "monthlyValues",
    "transactions",
    "assets",
    "assetValues",
    "transfers",
    "accountBalances",
];

/// A complete, self-contained backup of one user/budget pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    /// Document revision; must equal [`BACKUP_SCHEMA_VERSION`].
    pub schema_version: u32,
    /// RFC 3339 timestamp of the export. Informational only, never validated.
    pub exported_at: Option<String>,
    /// The user's payment methods.
    pub payment_methods: Vec<PaymentMethodRecord>,
    /// The budget's years.
    pub budget_years: Vec<BudgetYearRecord>,
    /// The budget's category groups.
    pub budget_groups: Vec<BudgetGroupRecord>,
    /// Budget lines across all exported years.
    pub budget_items: Vec<BudgetItemRecord>,
    /// Monthly budget/actual pairs across all exported items.
    pub monthly_values: Vec<MonthlyValueRecord>,
    /// Transactions across all exported years.
    pub transactions: Vec<TransactionRecord>,
    /// The budget's asset tree.
    pub assets: Vec<AssetRecord>,
    /// Per-year asset valuations.
    pub asset_values: Vec<AssetValueRecord>,
    /// Transfers across all exported years.
    pub transfers: Vec<TransferRecord>,
    /// Per-year account opening balances.
    pub account_balances: Vec<AccountBalanceRecord>,
}

/// One payment method, keyed by its original id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRecord {
    /// Original database id, used only for in-document references.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Holding institution, if any.
    pub institution: Option<String>,
    /// Display position.
    pub sort_order: i32,
    /// Whether this method is tracked as a savings account.
    pub is_savings_account: bool,
    /// Savings bucket, when it is a savings account.
    pub savings_type: Option<SavingsType>,
    /// Settlement day of month for deferred-debit cards.
    pub settlement_day: Option<i32>,
    /// Original id of the payment method this one settles to.
    pub linked_payment_method_id: Option<i64>,
}

/// One budget year, keyed by its original id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetYearRecord {
    /// Original database id, used only for in-document references.
    pub id: i64,
    /// Calendar year.
    pub year: i32,
    /// Opening balance carried into the year.
    pub initial_balance: Decimal,
}

/// One budget group, keyed by its original id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGroupRecord {
    /// Original database id, used only for in-document references.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-friendly identifier.
    pub slug: String,
    /// Income, expense, or savings.
    #[serde(rename = "type")]
    pub group_type: GroupType,
    /// Display position.
    pub sort_order: i32,
}

/// One budget line, keyed by its original id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItemRecord {
    /// Original database id, used only for in-document references.
    pub id: i64,
    /// Original id of the owning year.
    pub year_id: i64,
    /// Original id of the owning group, if any.
    pub group_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// URL-friendly identifier.
    pub slug: String,
    /// Display position.
    pub sort_order: i32,
    /// Lump-sum budget for the whole year.
    pub yearly_budget: Decimal,
    /// Original id of the savings account fed by this line, if any.
    pub savings_account_id: Option<i64>,
}

/// One month's budget/actual pair; identified by (item, month).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyValueRecord {
    /// Original id of the owning item.
    pub item_id: i64,
    /// Month of the year, 1-12.
    pub month: i32,
    /// Budgeted amount.
    pub budget: Decimal,
    /// Actual amount.
    pub actual: Decimal,
}

/// One transaction; carries no id of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Original id of the owning year.
    pub year_id: i64,
    /// Original id of the budget item it is booked against, if any.
    pub item_id: Option<i64>,
    /// Calendar date.
    pub date: NaiveDate,
    /// Display description.
    pub description: String,
    /// Free-form note, if any.
    pub comment: Option<String>,
    /// Counterparty, if recorded.
    pub third_party: Option<String>,
    /// Original id of the payment method used.
    pub payment_method_id: i64,
    /// Signed amount.
    pub amount: Decimal,
    /// Accounting month, 1-12.
    pub accounting_month: i32,
    /// Accounting year.
    pub accounting_year: i32,
    /// Flagged-for-review marker.
    pub warning: bool,
}

/// One asset node, keyed by its original id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Original database id, used only for in-document references.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Display position.
    pub sort_order: i32,
    /// Whether the application maintains this asset itself.
    pub is_system: bool,
    /// Whether the asset counts against net worth.
    pub is_debt: bool,
    /// Original id of the parent node, if any.
    pub parent_asset_id: Option<i64>,
    /// Savings bucket attribution, if any.
    pub savings_type: Option<SavingsType>,
}

/// One asset valuation; identified by (asset, year).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValueRecord {
    /// Original id of the valued asset.
    pub asset_id: i64,
    /// Original id of the year the valuation applies to.
    pub year_id: i64,
    /// Value at that year's snapshot.
    pub value: Decimal,
}

/// One transfer between accounts; carries no id of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    /// Original id of the owning year.
    pub year_id: i64,
    /// Calendar date.
    pub date: NaiveDate,
    /// Amount moved from source to destination.
    pub amount: Decimal,
    /// Display description.
    pub description: String,
    /// Original id of the source payment method.
    pub source_account_id: i64,
    /// Original id of the destination payment method.
    pub destination_account_id: i64,
    /// Accounting month, 1-12.
    pub accounting_month: i32,
    /// Accounting year.
    pub accounting_year: i32,
}

/// One account opening balance; identified by (year, payment method).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalanceRecord {
    /// Original id of the year.
    pub year_id: i64,
    /// Original id of the payment method.
    pub payment_method_id: i64,
    /// Balance carried into January 1st of that year.
    pub initial_balance: Decimal,
}

/// Per-entity-kind count of rows inserted by an import, taken from the
/// document itself rather than re-queried from the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Payment methods inserted.
    pub payment_methods: usize,
    /// Budget years inserted.
    pub budget_years: usize,
    /// Budget groups inserted.
    pub budget_groups: usize,
    /// Budget items inserted.
    pub budget_items: usize,
    /// Monthly values inserted.
    pub monthly_values: usize,
    /// Transactions inserted.
    pub transactions: usize,
    /// Assets inserted.
    pub assets: usize,
    /// Asset values inserted.
    pub asset_values: usize,
    /// Transfers inserted.
    pub transfers: usize,
    /// Account balances inserted.
    pub account_balances: usize,
}

impl ImportSummary {
    /// Builds the summary from a document's array lengths.
    #[must_use]
    pub fn from_document(document: &BackupDocument) -> Self {
        Self {
            payment_methods: document.payment_methods.len(),
            budget_years: document.budget_years.len(),
            budget_groups: document.budget_groups.len(),
            budget_items: document.budget_items.len(),
            monthly_values: document.monthly_values.len(),
            transactions: document.transactions.len(),
            assets: document.assets.len(),
            asset_values: document.asset_values.len(),
            transfers: document.transfers.len(),
            account_balances: document.account_balances.len(),
        }
    }
}

/// Converts a stored monetary amount to its wire representation.
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Converts a wire monetary amount to the stored representation.
pub(crate) fn to_stored(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

impl From<payment_method::Model> for PaymentMethodRecord {
    fn from(model: payment_method::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            institution: model.institution,
            sort_order: model.sort_order,
            is_savings_account: model.is_savings_account,
            savings_type: model.savings_type,
            settlement_day: model.settlement_day,
            linked_payment_method_id: model.linked_payment_method_id,
        }
    }
}

impl From<budget_year::Model> for BudgetYearRecord {
    fn from(model: budget_year::Model) -> Self {
        Self {
            id: model.id,
            year: model.year,
            initial_balance: to_decimal(model.initial_balance),
        }
    }
}

impl From<budget_group::Model> for BudgetGroupRecord {
    fn from(model: budget_group::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            group_type: model.group_type,
            sort_order: model.sort_order,
        }
    }
}

impl From<budget_item::Model> for BudgetItemRecord {
    fn from(model: budget_item::Model) -> Self {
        Self {
            id: model.id,
            year_id: model.year_id,
            group_id: model.group_id,
            name: model.name,
            slug: model.slug,
            sort_order: model.sort_order,
            yearly_budget: to_decimal(model.yearly_budget),
            savings_account_id: model.savings_account_id,
        }
    }
}

impl From<monthly_value::Model> for MonthlyValueRecord {
    fn from(model: monthly_value::Model) -> Self {
        Self {
            item_id: model.item_id,
            month: model.month,
            budget: to_decimal(model.budget),
            actual: to_decimal(model.actual),
        }
    }
}

impl From<transaction::Model> for TransactionRecord {
    fn from(model: transaction::Model) -> Self {
        Self {
            year_id: model.year_id,
            item_id: model.item_id,
            date: model.date,
            description: model.description,
            comment: model.comment,
            third_party: model.third_party,
            payment_method_id: model.payment_method_id,
            amount: to_decimal(model.amount),
            accounting_month: model.accounting_month,
            accounting_year: model.accounting_year,
            warning: model.warning,
        }
    }
}

impl From<asset::Model> for AssetRecord {
    fn from(model: asset::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            sort_order: model.sort_order,
            is_system: model.is_system,
            is_debt: model.is_debt,
            parent_asset_id: model.parent_asset_id,
            savings_type: model.savings_type,
        }
    }
}

impl From<asset_value::Model> for AssetValueRecord {
    fn from(model: asset_value::Model) -> Self {
        Self {
            asset_id: model.asset_id,
            year_id: model.year_id,
            value: to_decimal(model.value),
        }
    }
}

impl From<transfer::Model> for TransferRecord {
    fn from(model: transfer::Model) -> Self {
        Self {
            year_id: model.year_id,
            date: model.date,
            amount: to_decimal(model.amount),
            description: model.description,
            source_account_id: model.source_account_id,
            destination_account_id: model.destination_account_id,
            accounting_month: model.accounting_month,
            accounting_year: model.accounting_year,
        }
    }
}

impl From<account_balance::Model> for AccountBalanceRecord {
    fn from(model: account_balance::Model) -> Self {
        Self {
            year_id: model.year_id,
            payment_method_id: model.payment_method_id,
            initial_balance: to_decimal(model.initial_balance),
        }
    }
}
