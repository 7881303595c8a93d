//! Backup export.
//!
//! Reads every row belonging to one user/budget pair across the ten tables
//! and assembles the portable document. The reads run inside a single
//! transaction so the document is a consistent snapshot even when something
//! else writes to the budget mid-export. Export never mutates state.

use crate::backup::document::{BACKUP_SCHEMA_VERSION, BackupDocument};
use crate::entities::{
    AccountBalance, Asset, AssetValue, BudgetGroup, BudgetItem, BudgetYear, MonthlyValue,
    PaymentMethod, Transaction, Transfer, account_balance, asset, asset_value, budget_group,
    budget_item, budget_year, monthly_value, payment_method, transaction, transfer,
};
use crate::errors::Result;
use sea_orm::{QueryOrder, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// Exports the full entity graph of one user/budget pair as a backup
/// document tagged with the current schema version.
///
/// Strongly-ordered tables come back by their natural sort key (payment
/// methods, groups, items, and assets by `sort_order`, years by `year`);
/// the rest keep insertion order. Tables scoped through an id set skip their
/// query entirely when the set is empty.
#[instrument(skip(db))]
pub async fn export_backup(
    db: &DatabaseConnection,
    user_id: i64,
    budget_id: i64,
) -> Result<BackupDocument> {
    let txn = db.begin().await?;

    let payment_methods = PaymentMethod::find()
        .filter(payment_method::Column::UserId.eq(user_id))
        .order_by_asc(payment_method::Column::SortOrder)
        .all(&txn)
        .await?;

    let years = BudgetYear::find()
        .filter(budget_year::Column::BudgetId.eq(budget_id))
        .order_by_asc(budget_year::Column::Year)
        .all(&txn)
        .await?;
    let year_ids: Vec<i64> = years.iter().map(|year| year.id).collect();

    let groups = BudgetGroup::find()
        .filter(budget_group::Column::BudgetId.eq(budget_id))
        .order_by_asc(budget_group::Column::SortOrder)
        .all(&txn)
        .await?;

    let items = if year_ids.is_empty() {
        Vec::new()
    } else {
        BudgetItem::find()
            .filter(budget_item::Column::YearId.is_in(year_ids.clone()))
            .order_by_asc(budget_item::Column::SortOrder)
            .all(&txn)
            .await?
    };
    let item_ids: Vec<i64> = items.iter().map(|item| item.id).collect();

    let monthly_values = if item_ids.is_empty() {
        Vec::new()
    } else {
        MonthlyValue::find()
            .filter(monthly_value::Column::ItemId.is_in(item_ids))
            .all(&txn)
            .await?
    };

    let transactions = if year_ids.is_empty() {
        Vec::new()
    } else {
        Transaction::find()
            .filter(transaction::Column::YearId.is_in(year_ids.clone()))
            .all(&txn)
            .await?
    };

    let assets = Asset::find()
        .filter(asset::Column::BudgetId.eq(budget_id))
        .order_by_asc(asset::Column::SortOrder)
        .all(&txn)
        .await?;
    let asset_ids: Vec<i64> = assets.iter().map(|asset| asset.id).collect();

    let asset_values = if asset_ids.is_empty() {
        Vec::new()
    } else {
        AssetValue::find()
            .filter(asset_value::Column::AssetId.is_in(asset_ids))
            .all(&txn)
            .await?
    };

    let transfers = if year_ids.is_empty() {
        Vec::new()
    } else {
        Transfer::find()
            .filter(transfer::Column::YearId.is_in(year_ids.clone()))
            .all(&txn)
            .await?
    };

    let account_balances = if year_ids.is_empty() {
        Vec::new()
    } else {
        AccountBalance::find()
            .filter(account_balance::Column::YearId.is_in(year_ids))
            .all(&txn)
            .await?
    };

    txn.commit().await?;

    debug!(
        payment_methods = payment_methods.len(),
        budget_years = years.len(),
        budget_items = items.len(),
        transactions = transactions.len(),
        "assembled backup document"
    );

    Ok(BackupDocument {
        schema_version: BACKUP_SCHEMA_VERSION,
        exported_at: Some(chrono::Utc::now().to_rfc3339()),
        payment_methods: payment_methods.into_iter().map(Into::into).collect(),
        budget_years: years.into_iter().map(Into::into).collect(),
        budget_groups: groups.into_iter().map(Into::into).collect(),
        budget_items: items.into_iter().map(Into::into).collect(),
        monthly_values: monthly_values.into_iter().map(Into::into).collect(),
        transactions: transactions.into_iter().map(Into::into).collect(),
        assets: assets.into_iter().map(Into::into).collect(),
        asset_values: asset_values.into_iter().map(Into::into).collect(),
        transfers: transfers.into_iter().map(Into::into).collect(),
        account_balances: account_balances.into_iter().map(Into::into).collect(),
    })
}
