//! The storage interface for transactions.

use crate::Error;

use super::core::{NewTransaction, Transaction, TransactionId};

/// Handles the creation, retrieval and removal of transactions.
///
/// Implementations assign ids and timestamps. The values passed in are
/// assumed to have been validated already.
pub trait TransactionStore {
    /// Get every transaction, newest first.
    ///
    /// Transactions created at the same time are ordered by descending id.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Get the transaction with the given `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Save a new transaction and return it with its id and timestamps.
    fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Overwrite every field of an existing transaction.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if there is no such transaction.
    fn update(
        &mut self,
        id: TransactionId,
        transaction: NewTransaction,
    ) -> Result<Transaction, Error>;

    /// Remove a transaction.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if there is no such transaction.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;
}
