//! Totals for income, expenses and the net balance of a set of transactions.

use rust_decimal::Decimal;

use super::core::{Transaction, TransactionType};

/// The totals of a list of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: Decimal,
    /// The sum of all expense amounts.
    pub total_expenses: Decimal,
    /// The number of income transactions.
    pub income_count: usize,
    /// The number of expense transactions.
    pub expense_count: usize,
}

impl Summary {
    /// Sum up `transactions`.
    ///
    /// The result does not depend on the order of the transactions. Sums
    /// saturate at the limits of [Decimal] instead of overflowing.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        transactions
            .into_iter()
            .fold(Summary::default(), |mut summary, transaction| {
                match transaction.type_ {
                    TransactionType::Income => {
                        summary.total_income =
                            summary.total_income.saturating_add(transaction.amount);
                        summary.income_count += 1;
                    }
                    TransactionType::Expense => {
                        summary.total_expenses =
                            summary.total_expenses.saturating_add(transaction.amount);
                        summary.expense_count += 1;
                    }
                }

                summary
            })
    }

    /// Total income minus total expenses.
    pub fn net_balance(&self) -> Decimal {
        self.total_income.saturating_sub(self.total_expenses)
    }

    /// The number of transactions that were summed.
    pub fn transaction_count(&self) -> usize {
        self.income_count + self.expense_count
    }
}
