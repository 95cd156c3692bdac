//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of user input
//! - The summary of income, expenses and net balance
//! - The `TransactionStore` trait, its SQLite implementation and the
//!   `TransactionRepository` the handlers use
//! - View handlers for the transaction pages and endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod repository;
mod sqlite_store;
mod store;
mod summary;
mod transactions_page;
mod validation;
mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::core::{
    NewTransaction, Transaction, TransactionId, TransactionType, create_transaction_table,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use repository::TransactionRepository;
pub use sqlite_store::SQLiteTransactionStore;
pub use store::TransactionStore;
pub use summary::Summary;
pub use transactions_page::{get_transactions_page, get_transactions_panel};
pub use validation::{TransactionForm, ValidationErrors};
