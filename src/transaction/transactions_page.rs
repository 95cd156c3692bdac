//! The main page with the transaction form, the summary and the list, and the
//! endpoint the list panel polls to refresh itself.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles,
        loading_spinner,
    },
    refresh::{ListState, RefreshConfig},
    timezone::get_local_offset,
    transaction::{
        Summary, TransactionRepository, TransactionStore,
        create_endpoint::create_transaction_form_view,
        view::{summary_view, transaction_list_view},
    },
};

/// The id of the element that holds the summary and the list.
pub const TRANSACTIONS_PANEL_ID: &str = "transactions-panel";

/// The state needed for the transactions page and the list panel.
#[derive(Debug)]
pub struct TransactionsPageState<S> {
    pub transactions: TransactionRepository<S>,
    pub refresh: RefreshConfig,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S> Clone for TransactionsPageState<S> {
    fn clone(&self) -> Self {
        Self {
            transactions: self.transactions.clone(),
            refresh: self.refresh,
            local_timezone: self.local_timezone.clone(),
        }
    }
}

impl<S> FromRef<AppState<S>> for TransactionsPageState<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            transactions: state.transactions.clone(),
            refresh: state.refresh,
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl<S> TransactionsPageState<S> {
    fn local_offset(&self) -> Result<UtcOffset, Error> {
        get_local_offset(&self.local_timezone).ok_or_else(|| {
            tracing::error!("Invalid timezone {}", self.local_timezone);
            Error::InvalidTimezoneError(self.local_timezone.clone())
        })
    }
}

/// Renders the main page.
pub async fn get_transactions_page<S>(State(state): State<TransactionsPageState<S>>) -> Response
where
    S: TransactionStore + Send + 'static,
{
    let local_offset = match state.local_offset() {
        Ok(offset) => offset,
        Err(error) => return error.into_response(),
    };
    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();
    let list_state = ListState::load(&state.transactions);

    transactions_page_view(&list_state, &state.refresh, local_offset, today).into_response()
}

/// Renders the summary and list panel, responds to each poll.
pub async fn get_transactions_panel<S>(State(state): State<TransactionsPageState<S>>) -> Response
where
    S: TransactionStore + Send + 'static,
{
    tracing::debug!("refreshing transaction list");

    let local_offset = match state.local_offset() {
        Ok(offset) => offset,
        Err(error) => return error.into_alert_response("Could not load transactions"),
    };
    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();
    let list_state = ListState::load(&state.transactions);

    transactions_panel_view(&list_state, &state.refresh, local_offset, today).into_response()
}

fn transactions_page_view(
    list_state: &ListState,
    refresh: &RefreshConfig,
    local_offset: UtcOffset,
    today: Date,
) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-3xl space-y-8"
            {
                header
                {
                    h1 class="text-2xl font-bold" { "Finance Tracker" }
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Record your income and expenses."
                    }
                }

                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-semibold mb-2" { "Add Transaction" }

                    (create_transaction_form_view(false))
                }

                (transactions_panel_view(list_state, refresh, local_offset, today))
            }
        }
    };

    base("Transactions", &[dollar_input_styles()], &content)
}

/// The summary and list, which replaces itself on every poll.
pub(crate) fn transactions_panel_view(
    list_state: &ListState,
    refresh: &RefreshConfig,
    local_offset: UtcOffset,
    today: Date,
) -> Markup {
    let panel_selector = format!("#{TRANSACTIONS_PANEL_ID}");

    html! {
        section
            id=(TRANSACTIONS_PANEL_ID)
            class="w-full space-y-4"
            hx-get=(endpoints::TRANSACTIONS_API)
            hx-trigger=(refresh.hx_trigger())
            hx-swap="outerHTML"
            hx-indicator="#transactions-indicator"
        {
            header class="flex items-center justify-between"
            {
                h2 class="text-lg font-semibold" { "Transactions" }

                span id="transactions-indicator" class="htmx-indicator text-sm text-gray-500"
                {
                    (loading_spinner())
                    "Refreshing…"
                }
            }

            @match list_state {
                ListState::Ready(transactions) => {
                    (summary_view(&Summary::from_transactions(transactions)))
                    (transaction_list_view(transactions, local_offset, today))
                }
                ListState::Error => {
                    div data-error-state="true" class=(CARD_STYLE) role="alert"
                    {
                        p class="font-medium text-red-700 dark:text-red-300"
                        {
                            "Could not load transactions"
                        }

                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "Check your connection and try again."
                        }

                        button
                            type="button"
                            hx-get=(endpoints::TRANSACTIONS_API)
                            hx-target=(panel_selector)
                            hx-swap="outerHTML"
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Retry"
                        }
                    }
                }
            }
        }
    }
}
