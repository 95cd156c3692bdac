//! The entry point the request handlers use to manage transactions.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::Error;

use super::{
    core::{Transaction, TransactionId},
    store::TransactionStore,
    validation::TransactionForm,
};

/// Validates user input before handing it to a [TransactionStore].
///
/// Store errors are logged here so that callers only need to decide what to
/// show the user. Validation errors are returned without logging since they
/// are the user's to fix.
#[derive(Debug)]
pub struct TransactionRepository<S> {
    store: Arc<Mutex<S>>,
}

// Implemented by hand so that `S` does not need to be `Clone`.
impl<S> Clone for TransactionRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> TransactionRepository<S>
where
    S: TransactionStore,
{
    /// Create a repository that saves transactions to `store`.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, Error> {
        self.store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }

    /// Get every transaction, newest first.
    pub fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.lock()?
            .list()
            .inspect_err(|error| tracing::error!("could not list transactions: {error}"))
    }

    /// Get a single transaction.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    pub fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.lock()?.get(id).inspect_err(|error| {
            if *error != Error::NotFound {
                tracing::error!("could not get transaction {id}: {error}");
            }
        })
    }

    /// Validate `form` and save it as a new transaction.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] without touching the store if the
    /// form is invalid.
    pub fn create(&self, form: &TransactionForm) -> Result<Transaction, Error> {
        let new_transaction = form.validate().map_err(Error::InvalidTransaction)?;

        let transaction = self
            .lock()?
            .create(new_transaction)
            .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

        tracing::info!("created transaction {}", transaction.id);

        Ok(transaction)
    }

    /// Validate `form` and overwrite the transaction `id` with it.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] without touching the store if the
    /// form is invalid, or [Error::UpdateMissingTransaction] if `id` does not
    /// exist.
    pub fn update(&self, id: TransactionId, form: &TransactionForm) -> Result<Transaction, Error> {
        let new_transaction = form.validate().map_err(Error::InvalidTransaction)?;

        let transaction = self
            .lock()?
            .update(id, new_transaction)
            .inspect_err(|error| tracing::error!("could not update transaction {id}: {error}"))?;

        tracing::info!("updated transaction {id}");

        Ok(transaction)
    }

    /// Delete the transaction `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if `id` does not exist.
    pub fn delete(&self, id: TransactionId) -> Result<(), Error> {
        self.lock()?
            .delete(id)
            .inspect_err(|error| tracing::error!("could not delete transaction {id}: {error}"))?;

        tracing::info!("deleted transaction {id}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionRepository;
    use crate::{
        Error,
        transaction::{
            TransactionForm, TransactionType,
            test_utils::{FailingStore, form, get_test_repository},
        },
    };
    use rust_decimal_macros::dec;

    fn invalid_form() -> TransactionForm {
        form("income", "0", "ok")
    }

    #[test]
    fn create_then_list() {
        let repository = get_test_repository();

        let created = repository
            .create(&form("income", "100", "  Salary  "))
            .unwrap();

        assert_eq!(created.type_, TransactionType::Income);
        assert_eq!(created.amount, dec!(100));
        assert_eq!(created.description, "Salary");
        assert_eq!(repository.list(), Ok(vec![created]));
    }

    #[test]
    fn update_then_list() {
        let repository = get_test_repository();
        let rent = repository.create(&form("expense", "500", "Rent")).unwrap();
        let food = repository.create(&form("expense", "80", "Food")).unwrap();

        let updated = repository
            .update(rent.id, &form("expense", "550", "Rent (new lease)"))
            .unwrap();

        let transactions = repository.list().unwrap();
        assert_eq!(transactions.len(), 2);
        assert!(transactions.contains(&updated));
        assert!(transactions.contains(&food));
    }

    #[test]
    fn delete_then_list() {
        let repository = get_test_repository();
        let rent = repository.create(&form("expense", "500", "Rent")).unwrap();
        let food = repository.create(&form("expense", "80", "Food")).unwrap();

        repository.delete(rent.id).unwrap();

        assert_eq!(repository.list(), Ok(vec![food]));
    }

    #[test]
    fn deleting_missing_transaction_is_an_error() {
        let repository = get_test_repository();

        assert_eq!(repository.delete(123), Err(Error::DeleteMissingTransaction));
    }

    #[test]
    fn updating_missing_transaction_is_an_error() {
        let repository = get_test_repository();

        assert_eq!(
            repository.update(123, &form("income", "1", "Gift")),
            Err(Error::UpdateMissingTransaction)
        );
    }

    #[test]
    fn get_missing_transaction_is_not_found() {
        let repository = get_test_repository();

        assert_eq!(repository.get(1), Err(Error::NotFound));
    }

    #[test]
    fn invalid_create_does_not_touch_store() {
        let repository = TransactionRepository::new(FailingStore::default());

        let result = repository.create(&invalid_form());

        assert!(matches!(result, Err(Error::InvalidTransaction(_))));
        assert_eq!(repository.store.lock().unwrap().calls.get(), 0);
    }

    #[test]
    fn invalid_update_does_not_touch_store() {
        let repository = TransactionRepository::new(FailingStore::default());

        let result = repository.update(1, &invalid_form());

        assert!(matches!(result, Err(Error::InvalidTransaction(_))));
        assert_eq!(repository.store.lock().unwrap().calls.get(), 0);
    }

    #[test]
    fn store_errors_are_passed_on() {
        let repository = TransactionRepository::new(FailingStore::default());

        assert!(repository.list().unwrap_err().is_store_error());
        assert!(
            repository
                .create(&form("income", "1", "Gift"))
                .unwrap_err()
                .is_store_error()
        );
        assert!(repository.delete(1).unwrap_err().is_store_error());
        assert_eq!(repository.store.lock().unwrap().calls.get(), 3);
    }
}
