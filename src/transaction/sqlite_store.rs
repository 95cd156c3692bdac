//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, params};
use time::OffsetDateTime;

use crate::Error;

use super::{
    core::{NewTransaction, Transaction, TransactionId, map_transaction_row},
    store::TransactionStore,
};

/// Stores transactions in a SQLite database.
///
/// The `transaction` table must exist, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;

        connection
            .prepare(
                "SELECT id, type, amount, description, created_at, updated_at
                 FROM \"transaction\"
                 ORDER BY created_at DESC, id DESC",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        connection
            .query_one(
                "SELECT id, type, amount, description, created_at, updated_at
                 FROM \"transaction\"
                 WHERE id = ?1",
                params![id],
                map_transaction_row,
            )
            .map_err(Error::from)
    }

    fn create(&mut self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.lock()?;
        let now = OffsetDateTime::now_utc();

        connection
            .query_one(
                "INSERT INTO \"transaction\" (type, amount, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 RETURNING id, type, amount, description, created_at, updated_at",
                params![
                    transaction.type_,
                    transaction.amount.to_string(),
                    transaction.description,
                    now
                ],
                map_transaction_row,
            )
            .map_err(Error::from)
    }

    fn update(
        &mut self,
        id: TransactionId,
        transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        connection
            .query_one(
                "UPDATE \"transaction\"
                 SET type = ?1, amount = ?2, description = ?3, updated_at = ?4
                 WHERE id = ?5
                 RETURNING id, type, amount, description, created_at, updated_at",
                params![
                    transaction.type_,
                    transaction.amount.to_string(),
                    transaction.description,
                    OffsetDateTime::now_utc(),
                    id
                ],
                map_transaction_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
                error => error.into(),
            })
    }

    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let connection = self.lock()?;

        let rows_affected =
            connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            Err(Error::DeleteMissingTransaction)
        } else {
            Ok(())
        }
    }
}
