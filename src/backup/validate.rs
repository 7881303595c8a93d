//! Backup document validation.
//!
//! Pure checks over an untyped JSON payload, in a fixed order: top-level
//! shape, the schema-version gate, presence of the ten array fields, record
//! shapes, then a referential pass against the document's own id sets.
//! Validation fails fast on the first violation; the scan follows the
//! document's canonical field order so failures are reproducible between
//! runs on the same input. Never touches the database.

use crate::backup::document::{ARRAY_FIELDS, BACKUP_SCHEMA_VERSION, BackupDocument};
use crate::errors::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Checks an arbitrary JSON payload against the backup document rules and
/// returns the typed document on success.
///
/// # Errors
/// [`Error::UnsupportedVersion`] when `schemaVersion` is not exactly the
/// supported integer, [`Error::InvalidSchema`] for any structural problem,
/// [`Error::InvalidReference`] for the first dangling cross-reference.
pub fn validate_backup_payload(payload: &Value) -> Result<BackupDocument> {
    let object = payload.as_object().ok_or_else(|| Error::InvalidSchema {
        detail: "payload must be a JSON object".to_string(),
    })?;

    // The version gate runs before any other field is inspected.
    let version = object.get("schemaVersion");
    if version.and_then(Value::as_u64) != Some(u64::from(BACKUP_SCHEMA_VERSION)) {
        return Err(Error::UnsupportedVersion {
            found: version.map_or_else(|| "missing".to_string(), Value::to_string),
        });
    }

    for field in ARRAY_FIELDS {
        match object.get(field) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(Error::InvalidSchema {
                    detail: format!("field `{field}` must be an array"),
                });
            }
            None => {
                return Err(Error::InvalidSchema {
                    detail: format!("missing required field `{field}`"),
                });
            }
        }
    }

    let document = BackupDocument::deserialize(payload).map_err(|source| Error::InvalidSchema {
        detail: source.to_string(),
    })?;

    check_references(&document)?;
    Ok(document)
}

/// Confirms every foreign-key-shaped field resolves within the document.
///
/// Id sets are built from the document itself, never from the database, so a
/// backup is judged purely on its own consistency.
fn check_references(document: &BackupDocument) -> Result<()> {
    let payment_methods: HashSet<i64> = document.payment_methods.iter().map(|p| p.id).collect();
    let years: HashSet<i64> = document.budget_years.iter().map(|y| y.id).collect();
    let groups: HashSet<i64> = document.budget_groups.iter().map(|g| g.id).collect();
    let items: HashSet<i64> = document.budget_items.iter().map(|i| i.id).collect();
    let assets: HashSet<i64> = document.assets.iter().map(|a| a.id).collect();

    for item in &document.budget_items {
        ensure(&years, item.year_id, "budget item", "yearId", || {
            item.name.clone()
        })?;
        ensure_opt(&groups, item.group_id, "budget item", "groupId", || {
            item.name.clone()
        })?;
        ensure_opt(
            &payment_methods,
            item.savings_account_id,
            "budget item",
            "savingsAccountId",
            || item.name.clone(),
        )?;
    }

    for value in &document.monthly_values {
        ensure(&items, value.item_id, "monthly value", "itemId", || {
            format!("item {} month {}", value.item_id, value.month)
        })?;
    }

    for transaction in &document.transactions {
        ensure(&years, transaction.year_id, "transaction", "yearId", || {
            transaction.description.clone()
        })?;
        ensure_opt(&items, transaction.item_id, "transaction", "itemId", || {
            transaction.description.clone()
        })?;
        ensure(
            &payment_methods,
            transaction.payment_method_id,
            "transaction",
            "paymentMethodId",
            || transaction.description.clone(),
        )?;
    }

    for value in &document.asset_values {
        ensure(&assets, value.asset_id, "asset value", "assetId", || {
            format!("asset {} year {}", value.asset_id, value.year_id)
        })?;
        ensure(&years, value.year_id, "asset value", "yearId", || {
            format!("asset {} year {}", value.asset_id, value.year_id)
        })?;
    }

    for transfer in &document.transfers {
        ensure(&years, transfer.year_id, "transfer", "yearId", || {
            transfer.description.clone()
        })?;
        ensure(
            &payment_methods,
            transfer.source_account_id,
            "transfer",
            "sourceAccountId",
            || transfer.description.clone(),
        )?;
        ensure(
            &payment_methods,
            transfer.destination_account_id,
            "transfer",
            "destinationAccountId",
            || transfer.description.clone(),
        )?;
    }

    for balance in &document.account_balances {
        ensure(&years, balance.year_id, "account balance", "yearId", || {
            format!(
                "year {} payment method {}",
                balance.year_id, balance.payment_method_id
            )
        })?;
        ensure(
            &payment_methods,
            balance.payment_method_id,
            "account balance",
            "paymentMethodId",
            || {
                format!(
                    "year {} payment method {}",
                    balance.year_id, balance.payment_method_id
                )
            },
        )?;
    }

    for asset in &document.assets {
        ensure_opt(&assets, asset.parent_asset_id, "asset", "parentAssetId", || {
            asset.name.clone()
        })?;
    }

    for method in &document.payment_methods {
        ensure_opt(
            &payment_methods,
            method.linked_payment_method_id,
            "payment method",
            "linkedPaymentMethodId",
            || method.name.clone(),
        )?;
    }

    Ok(())
}

/// Fails with [`Error::InvalidReference`] when `id` is not in `ids`.
/// The label closure only runs on the failure path.
fn ensure(
    ids: &HashSet<i64>,
    id: i64,
    entity: &'static str,
    field: &'static str,
    label: impl FnOnce() -> String,
) -> Result<()> {
    if ids.contains(&id) {
        Ok(())
    } else {
        Err(Error::InvalidReference {
            entity,
            name: label(),
            field,
            id,
        })
    }
}

/// Nullable variant of [`ensure`]: `None` always passes.
fn ensure_opt(
    ids: &HashSet<i64>,
    id: Option<i64>,
    entity: &'static str,
    field: &'static str,
    label: impl FnOnce() -> String,
) -> Result<()> {
    id.map_or(Ok(()), |id| ensure(ids, id, entity, field, label))
}
