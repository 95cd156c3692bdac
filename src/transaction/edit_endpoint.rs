//! Defines the endpoint for updating a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    endpoints,
    transaction::{TransactionForm, TransactionId, TransactionRepository, TransactionStore},
};

/// A route handler for updating a transaction, redirects to the main page on success.
pub async fn edit_transaction_endpoint<S>(
    State(transactions): State<TransactionRepository<S>>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response
where
    S: TransactionStore + Send + 'static,
{
    match transactions.update(transaction_id, &form) {
        Ok(_) => (
            HxRedirect(endpoints::ROOT.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => error.into_alert_response("Could not save transaction"),
    }
}
