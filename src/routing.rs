//! Application router configuration.

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        TransactionStore, create_transaction_endpoint, delete_transaction_endpoint,
        edit_transaction_endpoint, get_edit_transaction_page, get_transactions_page,
        get_transactions_panel,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Send + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page::<S>))
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page::<S>),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_panel::<S>).post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint::<S>).delete(delete_transaction_endpoint::<S>),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
