//! HTML rendering for the transaction summary and list.

use maud::{Markup, html};
use rust_decimal::Decimal;
use time::{Date, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    alert::ALERT_CONTAINER_ID,
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, CARD_STYLE, LINK_STYLE, format_currency},
    transaction::{Summary, Transaction, TransactionType},
};

/// The max number of graphemes to display in the list before truncating and
/// displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 48;

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:none] [month repr:short] [year]");

const INCOME_TEXT_STYLE: &str = "text-green-700 dark:text-green-300";
const EXPENSE_TEXT_STYLE: &str = "text-red-700 dark:text-red-300";

fn amount_class(amount: Decimal) -> &'static str {
    if amount < Decimal::ZERO {
        EXPENSE_TEXT_STYLE
    } else {
        INCOME_TEXT_STYLE
    }
}

/// The amount with a "+" for income or "-" for expenses.
pub(crate) fn signed_amount(transaction: &Transaction) -> String {
    match transaction.type_ {
        TransactionType::Income => format!("+{}", format_currency(transaction.amount)),
        TransactionType::Expense => format!("-{}", format_currency(transaction.amount)),
    }
}

/// "Today", "Yesterday" or a date like "18 Oct 2026".
pub(crate) fn format_date(date: Date, today: Date) -> String {
    if date == today {
        "Today".to_owned()
    } else if today.previous_day() == Some(date) {
        "Yesterday".to_owned()
    } else {
        date.format(DATE_FORMAT)
            .unwrap_or_else(|_| date.to_string())
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}

fn summary_card(title: &str, amount: &str, amount_style: &str, caption: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class={ "text-2xl font-bold " (amount_style) } { (amount) }
            p class="text-xs text-gray-500 dark:text-gray-400" { (caption) }
        }
    }
}

fn count_caption(count: usize) -> String {
    match count {
        1 => "1 transaction".to_owned(),
        count => format!("{count} transactions"),
    }
}

/// Cards with the total income, total expenses and net balance.
pub(crate) fn summary_view(summary: &Summary) -> Markup {
    let net_balance = summary.net_balance();

    html! {
        section id="summary" class="grid grid-cols-1 sm:grid-cols-3 gap-4 w-full"
        {
            (summary_card(
                "Total Income",
                &format_currency(summary.total_income),
                INCOME_TEXT_STYLE,
                &count_caption(summary.income_count),
            ))
            (summary_card(
                "Total Expenses",
                &format_currency(summary.total_expenses),
                EXPENSE_TEXT_STYLE,
                &count_caption(summary.expense_count),
            ))
            (summary_card(
                "Net Balance",
                &format_currency(net_balance),
                amount_class(net_balance),
                "Income minus expenses",
            ))
        }
    }
}

fn transaction_row_view(transaction: &Transaction, local_offset: UtcOffset, today: Date) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
    let alert_container = format!("#{ALERT_CONTAINER_ID}");
    let (description, tooltip) = format_description(&transaction.description);
    let date = format_date(transaction.created_at.to_offset(local_offset).date(), today);
    let amount_style = match transaction.type_ {
        TransactionType::Income => INCOME_TEXT_STYLE,
        TransactionType::Expense => EXPENSE_TEXT_STYLE,
    };

    html! {
        li
            class="flex items-center justify-between gap-4 py-3"
            data-transaction-id=(transaction.id)
        {
            div class="min-w-0"
            {
                p class="font-medium truncate" title=[tooltip] { (description) }
                p class="text-xs text-gray-500 dark:text-gray-400"
                {
                    (transaction.type_.label()) " · " (date)
                }
            }

            div class="flex items-center gap-4 shrink-0"
            {
                span class={ "font-semibold " (amount_style) } { (signed_amount(transaction)) }

                a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm={ "Are you sure you want to delete '" (transaction.description) "'?" }
                    hx-swap="none"
                    hx-target-error=(alert_container)
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

/// The list of transactions, or a message when there are none.
pub(crate) fn transaction_list_view(
    transactions: &[Transaction],
    local_offset: UtcOffset,
    today: Date,
) -> Markup {
    html! {
        @if transactions.is_empty() {
            p data-empty-state="true" class="py-6 text-center text-gray-500 dark:text-gray-400"
            {
                "No transactions yet. Use the form to add your first one."
            }
        } @else {
            ul id="transaction-list" class="w-full divide-y divide-gray-200 dark:divide-gray-700"
            {
                @for transaction in transactions {
                    (transaction_row_view(transaction, local_offset, today))
                }
            }
        }

        p id="transaction-count" class="text-xs text-gray-500 dark:text-gray-400"
        {
            (count_caption(transactions.len())) " recorded"
        }
    }
}
