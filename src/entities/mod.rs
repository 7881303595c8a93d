//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account_balance;
pub mod asset;
pub mod asset_value;
pub mod budget_group;
pub mod budget_item;
pub mod budget_year;
pub mod monthly_value;
pub mod payment_method;
pub mod transaction;
pub mod transfer;
pub mod types;

// Re-export specific types to avoid conflicts
pub use account_balance::{
    Column as AccountBalanceColumn, Entity as AccountBalance, Model as AccountBalanceModel,
};
pub use asset::{Column as AssetColumn, Entity as Asset, Model as AssetModel};
pub use asset_value::{Column as AssetValueColumn, Entity as AssetValue, Model as AssetValueModel};
pub use budget_group::{
    Column as BudgetGroupColumn, Entity as BudgetGroup, Model as BudgetGroupModel,
};
pub use budget_item::{Column as BudgetItemColumn, Entity as BudgetItem, Model as BudgetItemModel};
pub use budget_year::{Column as BudgetYearColumn, Entity as BudgetYear, Model as BudgetYearModel};
pub use monthly_value::{
    Column as MonthlyValueColumn, Entity as MonthlyValue, Model as MonthlyValueModel,
};
pub use payment_method::{
    Column as PaymentMethodColumn, Entity as PaymentMethod, Model as PaymentMethodModel,
};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
pub use transfer::{Column as TransferColumn, Entity as Transfer, Model as TransferModel};
pub use types::{GroupType, SavingsType};
