//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;

use crate::{
    alert::Alert,
    refresh::TRANSACTIONS_CHANGED_EVENT,
    transaction::{TransactionId, TransactionRepository, TransactionStore},
};

/// A route handler for deleting a transaction, responds with an alert.
///
/// On success the list is told to refresh itself, on failure it is left as is.
pub async fn delete_transaction_endpoint<S>(
    State(transactions): State<TransactionRepository<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
where
    S: TransactionStore + Send + 'static,
{
    match transactions.delete(transaction_id) {
        Ok(()) => (
            [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)],
            Alert::SuccessSimple {
                message: "Transaction deleted".to_owned(),
            },
        )
            .into_response(),
        Err(error) => error.into_alert_response("Could not delete transaction"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use super::delete_transaction_endpoint;
    use crate::{
        Error,
        test_utils::{get_header, parse_html_fragment},
        transaction::{
            TransactionRepository,
            test_utils::{FailingStore, form, get_test_repository},
        },
    };

    #[tokio::test]
    async fn deletes_transaction() {
        let repository = get_test_repository();
        let rent = repository.create(&form("expense", "500", "Rent")).unwrap();
        let food = repository.create(&form("expense", "80", "Food")).unwrap();

        let response = delete_transaction_endpoint(State(repository.clone()), Path(rent.id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, "hx-trigger"), "transactions-changed");
        assert_eq!(repository.get(rent.id), Err(Error::NotFound));
        assert_eq!(repository.list(), Ok(vec![food]));
    }

    #[tokio::test]
    async fn deleting_missing_transaction_is_an_error() {
        let response = delete_transaction_endpoint(State(get_test_repository()), Path(1)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("hx-trigger").is_none());
        let html = parse_html_fragment(response).await;
        assert!(
            html.root_element()
                .text()
                .any(|text| text.contains("Could not delete transaction"))
        );
    }

    #[tokio::test]
    async fn store_failure_shows_generic_alert() {
        let response = delete_transaction_endpoint(
            State(TransactionRepository::new(FailingStore::default())),
            Path(1),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Could not delete transaction"));
        assert!(!text.contains("Something went wrong"));
    }
}
