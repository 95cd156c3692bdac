//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, not_found::get_404_not_found_response,
    transaction::ValidationErrors,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The submitted transaction fields failed validation.
    ///
    /// These errors are correctable by the user and are shown to them
    /// verbatim. They are not logged as faults.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(ValidationErrors),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The interval between list refreshes is shorter than the allowed minimum.
    #[error("the poll interval {0:?} is too short")]
    InvalidPollInterval(Duration),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl Error {
    /// Whether the error came from the transaction store rather than from the
    /// user's input or the server configuration.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound
                | Error::SqlError(_)
                | Error::DatabaseLockError
                | Error::UpdateMissingTransaction
                | Error::DeleteMissingTransaction
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Store errors are logged by the repository and are not intended to
            // be shown to the client.
            _ => InternalServerError::default().into_response(),
        }
    }
}

impl Error {
    /// Convert the error into an alert for htmx requests.
    ///
    /// Store failures are reported with `failure_message`, e.g. "Could not
    /// save transaction", the details are only written to the server logs.
    pub fn into_alert_response(self, failure_message: &str) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTransaction(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::ErrorList {
                    message: "Please check the transaction details".to_owned(),
                    items: errors.iter().map(ToString::to_string).collect(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::UpdateMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not save transaction".to_owned(),
                    details: "The transaction could not be found. \
                    It may have been deleted in another window."
                        .to_owned(),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: failure_message.to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
