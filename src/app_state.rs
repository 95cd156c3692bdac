//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{
    Error,
    refresh::RefreshConfig,
    timezone::get_local_offset,
    transaction::{TransactionRepository, TransactionStore},
};

/// The state of the REST server.
#[derive(Debug)]
pub struct AppState<S> {
    /// Validates and saves transactions.
    pub transactions: TransactionRepository<S>,

    /// How often the transaction list refreshes itself.
    pub refresh: RefreshConfig,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

// Implemented by hand so that `S` does not need to be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            transactions: self.transactions.clone(),
            refresh: self.refresh,
            local_timezone: self.local_timezone.clone(),
        }
    }
}

impl<S> AppState<S>
where
    S: TransactionStore,
{
    /// Create a new [AppState] that saves transactions to `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(store: S, refresh: RefreshConfig, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            transactions: TransactionRepository::new(store),
            refresh,
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl<S> FromRef<AppState<S>> for TransactionRepository<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        state.transactions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::{Error, refresh::RefreshConfig, transaction::test_utils::FailingStore};

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(FailingStore::default(), RefreshConfig::default(), "Nowhere/Land");

        assert_eq!(
            result.err().map(|error| error.to_string()),
            Some(Error::InvalidTimezoneError("Nowhere/Land".to_owned()).to_string())
        );
    }

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new(
            FailingStore::default(),
            RefreshConfig::default(),
            "Pacific/Auckland",
        )
        .unwrap();

        assert_eq!(state.local_timezone, "Pacific/Auckland");
    }
}
