//! Periodic refreshing of the transaction list.
//!
//! The list panel on the main page polls [endpoints::TRANSACTIONS_API] with
//! htmx. A poll is skipped while the browser is offline, runs straight away
//! when the browser comes back online, and runs after any change made on the
//! same page. Each response replaces the whole panel, including the polling
//! attributes, so polling continues until the panel is removed from the page.
//!
//! [endpoints::TRANSACTIONS_API]: crate::endpoints::TRANSACTIONS_API

use std::time::Duration;

use crate::{
    Error,
    transaction::{Transaction, TransactionRepository, TransactionStore},
};

/// The htmx event sent to the page after a transaction is created, updated or deleted.
pub const TRANSACTIONS_CHANGED_EVENT: &str = "transactions-changed";

/// How often the list is refreshed unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// The shortest allowed time between refreshes.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Controls how often the transaction list is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshConfig {
    poll_interval: Duration,
}

impl RefreshConfig {
    /// Create a config that refreshes every `poll_interval`.
    ///
    /// # Errors
    /// Returns [Error::InvalidPollInterval] if `poll_interval` is shorter than
    /// [MIN_POLL_INTERVAL].
    pub fn new(poll_interval: Duration) -> Result<Self, Error> {
        if poll_interval < MIN_POLL_INTERVAL {
            return Err(Error::InvalidPollInterval(poll_interval));
        }

        Ok(Self { poll_interval })
    }

    /// The time between refreshes.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// The value for the `hx-trigger` attribute of the list panel.
    pub fn hx_trigger(&self) -> String {
        let interval = if self.poll_interval.subsec_millis() == 0 {
            format!("{}s", self.poll_interval.as_secs())
        } else {
            format!("{}ms", self.poll_interval.as_millis())
        };

        format!(
            "every {interval} [navigator.onLine], online from:window, \
            {TRANSACTIONS_CHANGED_EVENT} from:body"
        )
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// The result of loading the transaction list for one refresh.
///
/// While a refresh is in flight the previous state stays on screen with a
/// loading indicator, so only the finished states are modelled here.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// The transactions, newest first.
    Ready(Vec<Transaction>),
    /// The transactions could not be loaded. The details have been logged.
    Error,
}

impl ListState {
    /// Load the transactions from `repository`.
    pub fn load<S>(repository: &TransactionRepository<S>) -> Self
    where
        S: TransactionStore,
    {
        match repository.list() {
            Ok(transactions) => ListState::Ready(transactions),
            Err(_) => ListState::Error,
        }
    }
}
