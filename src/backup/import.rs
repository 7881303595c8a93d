//! Backup import.
//!
//! Restores a backup document into a user/budget pair: the payload is
//! validated first, then a single database transaction removes everything the
//! target currently owns (children before parents) and replays the document
//! parents-first. Every row receives a fresh primary key; the document's
//! original ids are resolved through per-kind old-to-new maps and never
//! reused. Payment methods and assets may reference rows that appear later in
//! their own arrays, so those two kinds insert in two passes: rows first with
//! the self-reference left empty, links patched in once every id is known.

use crate::backup::document::{
    AccountBalanceRecord, AssetRecord, AssetValueRecord, BackupDocument, BudgetGroupRecord,
    BudgetItemRecord, BudgetYearRecord, ImportSummary, MonthlyValueRecord, PaymentMethodRecord,
    TransactionRecord, TransferRecord, to_stored,
};
use crate::backup::validate::validate_backup_payload;
use crate::entities::{
    AccountBalance, Asset, AssetValue, BudgetGroup, BudgetItem, BudgetYear, MonthlyValue,
    PaymentMethod, Transaction, Transfer, account_balance, asset, asset_value, budget_group,
    budget_item, budget_year, monthly_value, payment_method, transaction, transfer,
};
use crate::errors::{Error, Result};
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, Set, TransactionTrait, prelude::*};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Rows per bulk `INSERT`, kept well below `SQLite`'s bound-parameter limit
/// even for the widest table.
const INSERT_CHUNK_SIZE: usize = 500;

/// Validates `payload` and restores it into `user_id`/`budget_id`, replacing
/// whatever the pair currently owns. Runs in a single transaction: if any
/// step fails the target is left exactly as it was.
///
/// The returned summary counts the document's records, which after a
/// successful commit is also the number of rows inserted per kind.
///
/// # Errors
/// Any [`Error`] from [`validate_backup_payload`], raised before the database
/// is touched, or [`Error::Database`] if a statement inside the transaction
/// fails.
#[instrument(skip(db, payload))]
pub async fn import_backup(
    db: &DatabaseConnection,
    user_id: i64,
    budget_id: i64,
    payload: &Value,
) -> Result<ImportSummary> {
    let document = validate_backup_payload(payload)?;

    let txn = db.begin().await?;
    clear_existing_data(&txn, user_id, budget_id).await?;
    insert_document(&txn, user_id, budget_id, &document).await?;
    txn.commit().await?;

    let summary = ImportSummary::from_document(&document);
    info!(
        payment_methods = summary.payment_methods,
        budget_years = summary.budget_years,
        transactions = summary.transactions,
        "backup imported"
    );
    Ok(summary)
}

/// Deletes every row the target user/budget owns, children before parents so
/// no foreign key dangles mid-phase. Self-references are cleared ahead of
/// their bulk deletes because the store checks keys row by row.
async fn clear_existing_data<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    budget_id: i64,
) -> Result<()> {
    let year_ids: Vec<i64> = BudgetYear::find()
        .filter(budget_year::Column::BudgetId.eq(budget_id))
        .all(db)
        .await?
        .into_iter()
        .map(|year| year.id)
        .collect();

    if !year_ids.is_empty() {
        Transfer::delete_many()
            .filter(transfer::Column::YearId.is_in(year_ids.clone()))
            .exec(db)
            .await?;
        AccountBalance::delete_many()
            .filter(account_balance::Column::YearId.is_in(year_ids.clone()))
            .exec(db)
            .await?;
        Transaction::delete_many()
            .filter(transaction::Column::YearId.is_in(year_ids.clone()))
            .exec(db)
            .await?;

        let item_ids: Vec<i64> = BudgetItem::find()
            .filter(budget_item::Column::YearId.is_in(year_ids.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|item| item.id)
            .collect();
        if !item_ids.is_empty() {
            MonthlyValue::delete_many()
                .filter(monthly_value::Column::ItemId.is_in(item_ids))
                .exec(db)
                .await?;
        }
        BudgetItem::delete_many()
            .filter(budget_item::Column::YearId.is_in(year_ids))
            .exec(db)
            .await?;
    }

    // Asset valuations reference both assets and years, so the whole asset
    // subtree goes before the years do.
    let asset_ids: Vec<i64> = Asset::find()
        .filter(asset::Column::BudgetId.eq(budget_id))
        .all(db)
        .await?
        .into_iter()
        .map(|asset| asset.id)
        .collect();
    if !asset_ids.is_empty() {
        AssetValue::delete_many()
            .filter(asset_value::Column::AssetId.is_in(asset_ids))
            .exec(db)
            .await?;
        Asset::update_many()
            .col_expr(asset::Column::ParentAssetId, Expr::value(None::<i64>))
            .filter(asset::Column::BudgetId.eq(budget_id))
            .exec(db)
            .await?;
        Asset::delete_many()
            .filter(asset::Column::BudgetId.eq(budget_id))
            .exec(db)
            .await?;
    }

    BudgetGroup::delete_many()
        .filter(budget_group::Column::BudgetId.eq(budget_id))
        .exec(db)
        .await?;
    BudgetYear::delete_many()
        .filter(budget_year::Column::BudgetId.eq(budget_id))
        .exec(db)
        .await?;

    PaymentMethod::update_many()
        .col_expr(
            payment_method::Column::LinkedPaymentMethodId,
            Expr::value(None::<i64>),
        )
        .filter(payment_method::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    PaymentMethod::delete_many()
        .filter(payment_method::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    debug!("existing rows removed");
    Ok(())
}

/// Replays the document into the store, parents before children.
async fn insert_document<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    budget_id: i64,
    document: &BackupDocument,
) -> Result<()> {
    let payment_methods =
        insert_payment_methods(db, user_id, &document.payment_methods).await?;
    let years = insert_budget_years(db, budget_id, &document.budget_years).await?;
    let groups = insert_budget_groups(db, budget_id, &document.budget_groups).await?;
    let items =
        insert_budget_items(db, &document.budget_items, &years, &groups, &payment_methods)
            .await?;
    insert_monthly_values(db, &document.monthly_values, &items).await?;
    insert_transactions(db, &document.transactions, &years, &items, &payment_methods).await?;
    let assets = insert_assets(db, budget_id, &document.assets).await?;
    insert_asset_values(db, &document.asset_values, &assets, &years).await?;
    insert_account_balances(db, &document.account_balances, &years, &payment_methods).await?;
    insert_transfers(db, &document.transfers, &years, &payment_methods).await?;
    Ok(())
}

/// First pass inserts every method with its link left empty; the second pass
/// patches links once the whole old-to-new map exists, so a link may point
/// anywhere in the array.
async fn insert_payment_methods<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    records: &[PaymentMethodRecord],
) -> Result<HashMap<i64, i64>> {
    let mut ids = HashMap::with_capacity(records.len());
    for record in records {
        let inserted = payment_method::ActiveModel {
            user_id: Set(user_id),
            name: Set(record.name.clone()),
            institution: Set(record.institution.clone()),
            sort_order: Set(record.sort_order),
            is_savings_account: Set(record.is_savings_account),
            savings_type: Set(record.savings_type),
            settlement_day: Set(record.settlement_day),
            linked_payment_method_id: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(record.id, inserted.id);
    }

    for record in records {
        if let Some(linked) = record.linked_payment_method_id {
            let owner = remap(&ids, record.id, "payment method")?;
            let target = remap(&ids, linked, "payment method")?;
            PaymentMethod::update_many()
                .col_expr(
                    payment_method::Column::LinkedPaymentMethodId,
                    Expr::value(Some(target)),
                )
                .filter(payment_method::Column::Id.eq(owner))
                .exec(db)
                .await?;
        }
    }
    Ok(ids)
}

async fn insert_budget_years<C: ConnectionTrait>(
    db: &C,
    budget_id: i64,
    records: &[BudgetYearRecord],
) -> Result<HashMap<i64, i64>> {
    let mut ids = HashMap::with_capacity(records.len());
    for record in records {
        let inserted = budget_year::ActiveModel {
            budget_id: Set(budget_id),
            year: Set(record.year),
            initial_balance: Set(to_stored(record.initial_balance)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(record.id, inserted.id);
    }
    Ok(ids)
}

async fn insert_budget_groups<C: ConnectionTrait>(
    db: &C,
    budget_id: i64,
    records: &[BudgetGroupRecord],
) -> Result<HashMap<i64, i64>> {
    let mut ids = HashMap::with_capacity(records.len());
    for record in records {
        let inserted = budget_group::ActiveModel {
            budget_id: Set(budget_id),
            name: Set(record.name.clone()),
            slug: Set(record.slug.clone()),
            group_type: Set(record.group_type),
            sort_order: Set(record.sort_order),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(record.id, inserted.id);
    }
    Ok(ids)
}

async fn insert_budget_items<C: ConnectionTrait>(
    db: &C,
    records: &[BudgetItemRecord],
    years: &HashMap<i64, i64>,
    groups: &HashMap<i64, i64>,
    payment_methods: &HashMap<i64, i64>,
) -> Result<HashMap<i64, i64>> {
    let mut ids = HashMap::with_capacity(records.len());
    for record in records {
        let group_id = record
            .group_id
            .map(|id| remap(groups, id, "budget group"))
            .transpose()?;
        let savings_account_id = record
            .savings_account_id
            .map(|id| remap(payment_methods, id, "payment method"))
            .transpose()?;
        let inserted = budget_item::ActiveModel {
            year_id: Set(remap(years, record.year_id, "budget year")?),
            group_id: Set(group_id),
            name: Set(record.name.clone()),
            slug: Set(record.slug.clone()),
            sort_order: Set(record.sort_order),
            yearly_budget: Set(to_stored(record.yearly_budget)),
            savings_account_id: Set(savings_account_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(record.id, inserted.id);
    }
    Ok(ids)
}

async fn insert_monthly_values<C: ConnectionTrait>(
    db: &C,
    records: &[MonthlyValueRecord],
    items: &HashMap<i64, i64>,
) -> Result<()> {
    let models = records
        .iter()
        .map(|record| {
            Ok(monthly_value::ActiveModel {
                item_id: Set(remap(items, record.item_id, "budget item")?),
                month: Set(record.month),
                budget: Set(to_stored(record.budget)),
                actual: Set(to_stored(record.actual)),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    insert_chunked(db, models).await
}

async fn insert_transactions<C: ConnectionTrait>(
    db: &C,
    records: &[TransactionRecord],
    years: &HashMap<i64, i64>,
    items: &HashMap<i64, i64>,
    payment_methods: &HashMap<i64, i64>,
) -> Result<()> {
    let models = records
        .iter()
        .map(|record| {
            let item_id = record
                .item_id
                .map(|id| remap(items, id, "budget item"))
                .transpose()?;
            Ok(transaction::ActiveModel {
                year_id: Set(remap(years, record.year_id, "budget year")?),
                item_id: Set(item_id),
                date: Set(record.date),
                description: Set(record.description.clone()),
                comment: Set(record.comment.clone()),
                third_party: Set(record.third_party.clone()),
                payment_method_id: Set(remap(
                    payment_methods,
                    record.payment_method_id,
                    "payment method",
                )?),
                amount: Set(to_stored(record.amount)),
                accounting_month: Set(record.accounting_month),
                accounting_year: Set(record.accounting_year),
                warning: Set(record.warning),
                ..Default::default()
            })
        })
        .collect::<Result<Vec<_>>>()?;
    insert_chunked(db, models).await
}

/// Same two-pass shape as [`insert_payment_methods`], for the asset tree.
async fn insert_assets<C: ConnectionTrait>(
    db: &C,
    budget_id: i64,
    records: &[AssetRecord],
) -> Result<HashMap<i64, i64>> {
    let mut ids = HashMap::with_capacity(records.len());
    for record in records {
        let inserted = asset::ActiveModel {
            budget_id: Set(budget_id),
            name: Set(record.name.clone()),
            sort_order: Set(record.sort_order),
            is_system: Set(record.is_system),
            is_debt: Set(record.is_debt),
            parent_asset_id: Set(None),
            savings_type: Set(record.savings_type),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(record.id, inserted.id);
    }

    for record in records {
        if let Some(parent) = record.parent_asset_id {
            let owner = remap(&ids, record.id, "asset")?;
            let target = remap(&ids, parent, "asset")?;
            Asset::update_many()
                .col_expr(asset::Column::ParentAssetId, Expr::value(Some(target)))
                .filter(asset::Column::Id.eq(owner))
                .exec(db)
                .await?;
        }
    }
    Ok(ids)
}

async fn insert_asset_values<C: ConnectionTrait>(
    db: &C,
    records: &[AssetValueRecord],
    assets: &HashMap<i64, i64>,
    years: &HashMap<i64, i64>,
) -> Result<()> {
    let models = records
        .iter()
        .map(|record| {
            Ok(asset_value::ActiveModel {
                asset_id: Set(remap(assets, record.asset_id, "asset")?),
                year_id: Set(remap(years, record.year_id, "budget year")?),
                value: Set(to_stored(record.value)),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    insert_chunked(db, models).await
}

async fn insert_account_balances<C: ConnectionTrait>(
    db: &C,
    records: &[AccountBalanceRecord],
    years: &HashMap<i64, i64>,
    payment_methods: &HashMap<i64, i64>,
) -> Result<()> {
    let models = records
        .iter()
        .map(|record| {
            Ok(account_balance::ActiveModel {
                year_id: Set(remap(years, record.year_id, "budget year")?),
                payment_method_id: Set(remap(
                    payment_methods,
                    record.payment_method_id,
                    "payment method",
                )?),
                initial_balance: Set(to_stored(record.initial_balance)),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    insert_chunked(db, models).await
}

async fn insert_transfers<C: ConnectionTrait>(
    db: &C,
    records: &[TransferRecord],
    years: &HashMap<i64, i64>,
    payment_methods: &HashMap<i64, i64>,
) -> Result<()> {
    let models = records
        .iter()
        .map(|record| {
            Ok(transfer::ActiveModel {
                year_id: Set(remap(years, record.year_id, "budget year")?),
                date: Set(record.date),
                amount: Set(to_stored(record.amount)),
                description: Set(record.description.clone()),
                source_account_id: Set(remap(
                    payment_methods,
                    record.source_account_id,
                    "payment method",
                )?),
                destination_account_id: Set(remap(
                    payment_methods,
                    record.destination_account_id,
                    "payment method",
                )?),
                accounting_month: Set(record.accounting_month),
                accounting_year: Set(record.accounting_year),
                ..Default::default()
            })
        })
        .collect::<Result<Vec<_>>>()?;
    insert_chunked(db, models).await
}

/// Looks up the id assigned to `id` during this import. Every id reaching
/// this point already passed referential validation, so a miss is an insert
/// ordering bug rather than bad input.
fn remap(ids: &HashMap<i64, i64>, id: i64, entity: &'static str) -> Result<i64> {
    ids.get(&id).copied().ok_or(Error::MissingRemap { entity, id })
}

/// Bulk-inserts `models` in chunks of [`INSERT_CHUNK_SIZE`] rows per
/// statement. An empty set issues no statement at all.
async fn insert_chunked<C, A>(db: &C, models: Vec<A>) -> Result<()>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + Clone + Send,
    <A::Entity as EntityTrait>::Model: sea_orm::IntoActiveModel<A>,
{
    for chunk in models.chunks(INSERT_CHUNK_SIZE) {
        <A::Entity as EntityTrait>::insert_many(chunk.to_vec())
            .exec_without_returning(db)
            .await?;
    }
    Ok(())
}
