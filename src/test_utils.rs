//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases,
//! seeding entity rows with sensible defaults, and building a representative
//! backup payload for validator and importer tests.

use crate::{
    entities::{
        AccountBalanceModel, AssetModel, AssetValueModel, BudgetGroupModel, BudgetItemModel,
        BudgetYearModel, GroupType, MonthlyValueModel, PaymentMethodModel, SavingsType,
        TransactionModel, TransferModel, account_balance, asset, asset_value, budget_group,
        budget_item, budget_year, monthly_value, payment_method, transaction, transfer,
    },
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::{Value, json};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fixed date used by seeded rows; the exact day never matters to the tests.
fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default()
}

/// Creates a plain (non-savings, unlinked) payment method.
pub async fn seed_payment_method(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    sort_order: i32,
) -> Result<PaymentMethodModel> {
    payment_method::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_string()),
        institution: Set(None),
        sort_order: Set(sort_order),
        is_savings_account: Set(false),
        savings_type: Set(None),
        settlement_day: Set(None),
        linked_payment_method_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a deferred-debit card settling to `linked_to`, which must already
/// exist.
pub async fn seed_linked_card(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    sort_order: i32,
    linked_to: i64,
) -> Result<PaymentMethodModel> {
    payment_method::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_string()),
        institution: Set(Some("BNP".to_string())),
        sort_order: Set(sort_order),
        is_savings_account: Set(false),
        savings_type: Set(None),
        settlement_day: Set(Some(28)),
        linked_payment_method_id: Set(Some(linked_to)),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a savings account of type epargne.
pub async fn seed_savings_account(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    sort_order: i32,
) -> Result<PaymentMethodModel> {
    payment_method::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_string()),
        institution: Set(None),
        sort_order: Set(sort_order),
        is_savings_account: Set(true),
        savings_type: Set(Some(SavingsType::Epargne)),
        settlement_day: Set(None),
        linked_payment_method_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a budget year.
pub async fn seed_budget_year(
    db: &DatabaseConnection,
    budget_id: i64,
    year: i32,
    initial_balance: f64,
) -> Result<BudgetYearModel> {
    budget_year::ActiveModel {
        budget_id: Set(budget_id),
        year: Set(year),
        initial_balance: Set(initial_balance),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a budget group; the slug is derived by lowercasing the name.
pub async fn seed_budget_group(
    db: &DatabaseConnection,
    budget_id: i64,
    name: &str,
    group_type: GroupType,
    sort_order: i32,
) -> Result<BudgetGroupModel> {
    budget_group::ActiveModel {
        budget_id: Set(budget_id),
        name: Set(name.to_string()),
        slug: Set(name.to_lowercase().replace(' ', "-")),
        group_type: Set(group_type),
        sort_order: Set(sort_order),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a budget item with a zero yearly budget and no savings link.
pub async fn seed_budget_item(
    db: &DatabaseConnection,
    year_id: i64,
    group_id: Option<i64>,
    name: &str,
    sort_order: i32,
) -> Result<BudgetItemModel> {
    budget_item::ActiveModel {
        year_id: Set(year_id),
        group_id: Set(group_id),
        name: Set(name.to_string()),
        slug: Set(name.to_lowercase().replace(' ', "-")),
        sort_order: Set(sort_order),
        yearly_budget: Set(0.0),
        savings_account_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates one monthly budget/actual pair.
pub async fn seed_monthly_value(
    db: &DatabaseConnection,
    item_id: i64,
    month: i32,
    budget: f64,
    actual: f64,
) -> Result<MonthlyValueModel> {
    let active = monthly_value::ActiveModel {
        item_id: Set(item_id),
        month: Set(month),
        budget: Set(budget),
        actual: Set(actual),
    };
    crate::entities::MonthlyValue::insert(active)
        .exec_without_returning(db)
        .await?;
    Ok(MonthlyValueModel {
        item_id,
        month,
        budget,
        actual,
    })
}

/// Creates a transaction with fixed date and accounting fields.
pub async fn seed_transaction(
    db: &DatabaseConnection,
    year_id: i64,
    item_id: Option<i64>,
    payment_method_id: i64,
    amount: f64,
    description: &str,
) -> Result<TransactionModel> {
    transaction::ActiveModel {
        year_id: Set(year_id),
        item_id: Set(item_id),
        date: Set(test_date()),
        description: Set(description.to_string()),
        comment: Set(None),
        third_party: Set(None),
        payment_method_id: Set(payment_method_id),
        amount: Set(amount),
        accounting_month: Set(3),
        accounting_year: Set(2024),
        warning: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an asset, optionally parented to an existing asset.
pub async fn seed_asset(
    db: &DatabaseConnection,
    budget_id: i64,
    name: &str,
    sort_order: i32,
    parent_asset_id: Option<i64>,
) -> Result<AssetModel> {
    asset::ActiveModel {
        budget_id: Set(budget_id),
        name: Set(name.to_string()),
        sort_order: Set(sort_order),
        is_system: Set(false),
        is_debt: Set(false),
        parent_asset_id: Set(parent_asset_id),
        savings_type: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates one asset valuation.
pub async fn seed_asset_value(
    db: &DatabaseConnection,
    asset_id: i64,
    year_id: i64,
    value: f64,
) -> Result<AssetValueModel> {
    let active = asset_value::ActiveModel {
        asset_id: Set(asset_id),
        year_id: Set(year_id),
        value: Set(value),
    };
    crate::entities::AssetValue::insert(active)
        .exec_without_returning(db)
        .await?;
    Ok(AssetValueModel {
        asset_id,
        year_id,
        value,
    })
}

/// Creates a transfer between two payment methods.
pub async fn seed_transfer(
    db: &DatabaseConnection,
    year_id: i64,
    source_account_id: i64,
    destination_account_id: i64,
    amount: f64,
    description: &str,
) -> Result<TransferModel> {
    transfer::ActiveModel {
        year_id: Set(year_id),
        date: Set(test_date()),
        amount: Set(amount),
        description: Set(description.to_string()),
        source_account_id: Set(source_account_id),
        destination_account_id: Set(destination_account_id),
        accounting_month: Set(3),
        accounting_year: Set(2024),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates one per-year account opening balance.
pub async fn seed_account_balance(
    db: &DatabaseConnection,
    year_id: i64,
    payment_method_id: i64,
    initial_balance: f64,
) -> Result<AccountBalanceModel> {
    let active = account_balance::ActiveModel {
        year_id: Set(year_id),
        payment_method_id: Set(payment_method_id),
        initial_balance: Set(initial_balance),
    };
    crate::entities::AccountBalance::insert(active)
        .exec_without_returning(db)
        .await?;
    Ok(AccountBalanceModel {
        year_id,
        payment_method_id,
        initial_balance,
    })
}

/// Seeds a budget exercising every table and every reference shape:
/// 3 payment methods (one linked card, one savings account), 2 years,
/// 2 groups, 3 items (grouped, groupless, savings-linked), 3 monthly values,
/// 3 transactions (one itemless), a 2-node asset tree, 2 asset values,
/// 1 transfer, and 2 account balances.
pub async fn seed_rich_budget(
    db: &DatabaseConnection,
    user_id: i64,
    budget_id: i64,
) -> Result<()> {
    let account = seed_payment_method(db, user_id, "Compte courant", 0).await?;
    let card = seed_linked_card(db, user_id, "Carte differee", 1, account.id).await?;
    let livret = seed_savings_account(db, user_id, "Livret A", 2).await?;

    let year23 = seed_budget_year(db, budget_id, 2023, 500.0).await?;
    let year24 = seed_budget_year(db, budget_id, 2024, 750.25).await?;

    let income = seed_budget_group(db, budget_id, "Revenus", GroupType::Income, 0).await?;
    let expense = seed_budget_group(db, budget_id, "Depenses", GroupType::Expense, 1).await?;

    let salary = seed_budget_item(db, year23.id, Some(income.id), "Salaire", 0).await?;
    let rent = seed_budget_item(db, year24.id, Some(expense.id), "Loyer", 0).await?;
    // Savings line feeding the livret
    let savings_item = budget_item::ActiveModel {
        year_id: Set(year24.id),
        group_id: Set(None),
        name: Set("Epargne livret".to_string()),
        slug: Set("epargne-livret".to_string()),
        sort_order: Set(1),
        yearly_budget: Set(2400.0),
        savings_account_id: Set(Some(livret.id)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    seed_monthly_value(db, salary.id, 1, 2800.0, 2800.0).await?;
    seed_monthly_value(db, rent.id, 3, 1200.0, 1150.0).await?;
    seed_monthly_value(db, savings_item.id, 3, 200.0, 200.0).await?;

    seed_transaction(db, year23.id, Some(salary.id), account.id, 2800.0, "Salaire janvier")
        .await?;
    seed_transaction(db, year24.id, Some(rent.id), account.id, -1150.0, "Loyer mars").await?;
    seed_transaction(db, year24.id, None, card.id, -42.9, "Essence").await?;

    let bank = seed_asset(db, budget_id, "Banque", 0, None).await?;
    let livret_asset = seed_asset(db, budget_id, "Livret A", 1, Some(bank.id)).await?;
    seed_asset_value(db, bank.id, year23.id, 12000.0).await?;
    seed_asset_value(db, livret_asset.id, year24.id, 4500.0).await?;

    seed_transfer(db, year24.id, account.id, livret.id, 200.0, "Epargne mensuelle").await?;

    seed_account_balance(db, year23.id, account.id, 1500.0).await?;
    seed_account_balance(db, year24.id, livret.id, 4300.0).await?;

    Ok(())
}

/// A complete, internally consistent backup payload exercising every
/// reference shape, including forward self-references: the first payment
/// method links to the second, and the first asset is parented under the
/// second. Ids are deliberately non-contiguous so remapping is observable.
#[must_use]
pub fn sample_backup_payload() -> Value {
    json!({
        "schemaVersion": 1,
        "exportedAt": "2024-06-01T10:00:00.000Z",
        "paymentMethods": [
            {
                "id": 10,
                "name": "Carte differee",
                "institution": "BNP",
                "sortOrder": 0,
                "isSavingsAccount": false,
                "savingsType": null,
                "settlementDay": 28,
                "linkedPaymentMethodId": 11
            },
            {
                "id": 11,
                "name": "Compte courant",
                "institution": "BNP",
                "sortOrder": 1,
                "isSavingsAccount": false,
                "savingsType": null,
                "settlementDay": null,
                "linkedPaymentMethodId": null
            },
            {
                "id": 12,
                "name": "Livret A",
                "institution": null,
                "sortOrder": 2,
                "isSavingsAccount": true,
                "savingsType": "epargne",
                "settlementDay": null,
                "linkedPaymentMethodId": null
            }
        ],
        "budgetYears": [
            { "id": 5, "year": 2023, "initialBalance": "500.00" },
            { "id": 6, "year": 2024, "initialBalance": "750.25" }
        ],
        "budgetGroups": [
            { "id": 20, "name": "Revenus", "slug": "revenus", "type": "income", "sortOrder": 0 },
            { "id": 21, "name": "Depenses", "slug": "depenses", "type": "expense", "sortOrder": 1 }
        ],
        "budgetItems": [
            {
                "id": 30,
                "yearId": 5,
                "groupId": 20,
                "name": "Salaire",
                "slug": "salaire",
                "sortOrder": 0,
                "yearlyBudget": "33600.00",
                "savingsAccountId": null
            },
            {
                "id": 31,
                "yearId": 6,
                "groupId": null,
                "name": "Divers",
                "slug": "divers",
                "sortOrder": 0,
                "yearlyBudget": "0",
                "savingsAccountId": null
            },
            {
                "id": 32,
                "yearId": 6,
                "groupId": 21,
                "name": "Epargne livret",
                "slug": "epargne-livret",
                "sortOrder": 1,
                "yearlyBudget": "2400.00",
                "savingsAccountId": 12
            }
        ],
        "monthlyValues": [
            { "itemId": 30, "month": 1, "budget": "2800.00", "actual": "2800.00" },
            { "itemId": 32, "month": 3, "budget": "200.00", "actual": "200.00" }
        ],
        "transactions": [
            {
                "yearId": 5,
                "itemId": 30,
                "date": "2023-01-31",
                "description": "Salaire janvier",
                "comment": null,
                "thirdParty": "Employeur",
                "paymentMethodId": 11,
                "amount": "2800.00",
                "accountingMonth": 1,
                "accountingYear": 2023,
                "warning": false
            },
            {
                "yearId": 6,
                "itemId": null,
                "date": "2024-03-15",
                "description": "Essence",
                "comment": "pleins mars",
                "thirdParty": null,
                "paymentMethodId": 10,
                "amount": "-42.90",
                "accountingMonth": 3,
                "accountingYear": 2024,
                "warning": true
            }
        ],
        "assets": [
            {
                "id": 40,
                "name": "Livret A",
                "sortOrder": 1,
                "isSystem": false,
                "isDebt": false,
                "parentAssetId": 41,
                "savingsType": "epargne"
            },
            {
                "id": 41,
                "name": "Banque",
                "sortOrder": 0,
                "isSystem": false,
                "isDebt": false,
                "parentAssetId": null,
                "savingsType": null
            }
        ],
        "assetValues": [
            { "assetId": 40, "yearId": 6, "value": "4500.00" },
            { "assetId": 41, "yearId": 5, "value": "12000.00" }
        ],
        "transfers": [
            {
                "yearId": 6,
                "date": "2024-03-01",
                "amount": "200.00",
                "description": "Epargne mensuelle",
                "sourceAccountId": 11,
                "destinationAccountId": 12,
                "accountingMonth": 3,
                "accountingYear": 2024
            }
        ],
        "accountBalances": [
            { "yearId": 5, "paymentMethodId": 11, "initialBalance": "1500.00" },
            { "yearId": 6, "paymentMethodId": 12, "initialBalance": "4300.00" }
        ]
    })
}
