//! The page for editing a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    alert::ALERT_CONTAINER_ID,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, LINK_STYLE, base, dollar_input_styles,
    },
    transaction::{
        Transaction, TransactionId, TransactionRepository, TransactionStore,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

/// Renders the page for editing a transaction.
pub async fn get_edit_transaction_page<S>(
    State(transactions): State<TransactionRepository<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
where
    S: TransactionStore + Send + 'static,
{
    match transactions.get(transaction_id) {
        Ok(transaction) => edit_transaction_view(&transaction).into_response(),
        // Not found is rendered as the 404 page, anything else as the 500 page.
        Err(error) => error.into_response(),
    }
}

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let update_endpoint = format_endpoint(endpoints::TRANSACTION, transaction.id);
    let alert_container = format!("#{ALERT_CONTAINER_ID}");

    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4 self-start" { "Edit Transaction" }

            form
                hx-put=(update_endpoint)
                hx-swap="none"
                hx-target-error=(alert_container)
                class="w-full space-y-4 md:space-y-6"
            {
                (transaction_form_fields(&TransactionFormDefaults {
                    transaction_type: Some(transaction.type_),
                    amount: Some(transaction.amount),
                    description: Some(&transaction.description),
                    autofocus_amount: true,
                }))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
            }

            p class="mt-4 text-sm"
            {
                a href=(endpoints::ROOT) class=(LINK_STYLE) { "Cancel" }
            }
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content)
}
