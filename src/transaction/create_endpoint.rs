//! Defines the form and the endpoint for creating a new transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;
use maud::{Markup, html};

use crate::{
    alert::{ALERT_CONTAINER_ID, Alert},
    endpoints,
    html::BUTTON_PRIMARY_STYLE,
    refresh::TRANSACTIONS_CHANGED_EVENT,
    transaction::{
        TransactionForm, TransactionRepository, TransactionStore,
        form::{TransactionFormDefaults, transaction_form_fields},
        view::signed_amount,
    },
};

/// The id of the form for adding transactions.
pub const CREATE_FORM_ID: &str = "create-transaction-form";

/// A route handler for creating a new transaction.
///
/// On success responds with an alert, a blank form and the event that makes
/// the list refresh itself.
pub async fn create_transaction_endpoint<S>(
    State(transactions): State<TransactionRepository<S>>,
    Form(form): Form<TransactionForm>,
) -> Response
where
    S: TransactionStore + Send + 'static,
{
    match transactions.create(&form) {
        Ok(transaction) => {
            let alert = Alert::Success {
                message: "Transaction added".to_owned(),
                details: format!("{} {}", transaction.description, signed_amount(&transaction)),
            };

            (
                [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)],
                html! {
                    (alert.into_html())
                    (create_transaction_form_view(true))
                },
            )
                .into_response()
        }
        Err(error) => error.into_alert_response("Could not save transaction"),
    }
}

/// The form for adding a transaction.
///
/// Set `out_of_band` to replace the form on the page from an htmx response.
pub(crate) fn create_transaction_form_view(out_of_band: bool) -> Markup {
    let alert_container = format!("#{ALERT_CONTAINER_ID}");

    html! {
        form
            id=(CREATE_FORM_ID)
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-swap="none"
            hx-target-error=(alert_container)
            hx-swap-oob=[out_of_band.then_some("true")]
            class="w-full space-y-4 md:space-y-6"
        {
            (transaction_form_fields(&TransactionFormDefaults {
                autofocus_amount: !out_of_band,
                ..Default::default()
            }))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}
