use std::{
    cell::Cell,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;
use scraper::ElementRef;

use crate::{
    Error, initialize_db,
    transaction::{
        NewTransaction, SQLiteTransactionStore, Transaction, TransactionForm, TransactionId,
        TransactionRepository, TransactionStore,
    },
};

/// A repository backed by an empty in-memory SQLite database.
pub fn get_test_repository() -> TransactionRepository<SQLiteTransactionStore> {
    let connection = Connection::open_in_memory().unwrap();
    initialize_db(&connection).unwrap();

    TransactionRepository::new(SQLiteTransactionStore::new(Arc::new(Mutex::new(
        connection,
    ))))
}

/// A store where every operation fails, counting how often it was called.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub calls: Cell<usize>,
}

impl FailingStore {
    fn fail<T>(&self) -> Result<T, Error> {
        self.calls.set(self.calls.get() + 1);
        Err(Error::SqlError(rusqlite::Error::InvalidQuery))
    }
}

impl TransactionStore for FailingStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.fail()
    }

    fn get(&self, _id: TransactionId) -> Result<Transaction, Error> {
        self.fail()
    }

    fn create(&mut self, _transaction: NewTransaction) -> Result<Transaction, Error> {
        self.fail()
    }

    fn update(
        &mut self,
        _id: TransactionId,
        _transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        self.fail()
    }

    fn delete(&mut self, _id: TransactionId) -> Result<(), Error> {
        self.fail()
    }
}

/// A form with every field filled in.
pub fn form(type_: &str, amount: &str, description: &str) -> TransactionForm {
    TransactionForm {
        type_: Some(type_.to_owned()),
        amount: Some(amount.to_owned()),
        description: Some(description.to_owned()),
    }
}

#[track_caller]
pub fn assert_transaction_type_inputs(form: &ElementRef, checked_type: Option<&str>) {
    let selector = scraper::Selector::parse("input[type=radio][name=type]").unwrap();
    let inputs = form.select(&selector).collect::<Vec<_>>();
    assert_eq!(
        inputs.len(),
        2,
        "want 2 transaction type inputs, got {}",
        inputs.len()
    );

    let mut values = inputs
        .iter()
        .filter_map(|input| input.value().attr("value"))
        .collect::<Vec<_>>();
    values.sort_unstable();
    assert_eq!(
        values,
        vec!["expense", "income"],
        "want transaction type values to be expense/income, got {values:?}"
    );

    let checked = inputs
        .iter()
        .filter(|input| input.value().attr("checked").is_some())
        .filter_map(|input| input.value().attr("value"))
        .collect::<Vec<_>>();
    assert_eq!(
        checked,
        checked_type.into_iter().collect::<Vec<_>>(),
        "want checked transaction type {checked_type:?}, got {checked:?}"
    );

    for input in &inputs {
        assert!(
            input.value().attr("required").is_some(),
            "want transaction type input to be required"
        );
    }
}
