//! Defines the core data models and database schema for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Type, ValueRef},
};
use rust_decimal::Decimal;
use time::OffsetDateTime;

use super::validation::ValidationError;

// ============================================================================
// MODELS
// ============================================================================

/// Database identifier for a transaction.
pub type TransactionId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The value used for this type in forms and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The human readable name of the type.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::InvalidType),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only ever created by a
/// [TransactionStore](super::TransactionStore) from a validated
/// [NewTransaction], so the amount is always within range and the description
/// is always trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// Whether the money was earned or spent.
    pub type_: TransactionType,
    /// The amount of money earned or spent. Always positive.
    pub amount: Decimal,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was recorded.
    pub created_at: OffsetDateTime,
    /// When the transaction was last changed.
    pub updated_at: OffsetDateTime,
}

/// The validated fields of a transaction that is about to be created or
/// overwritten.
///
/// To get a `NewTransaction` from user input, use
/// [TransactionForm::validate](super::TransactionForm::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether the money was earned or spent.
    pub type_: TransactionType,
    /// The amount of money, greater than zero and at most
    /// [MAX_AMOUNT](super::validation::MAX_AMOUNT).
    pub amount: Decimal,
    /// The trimmed description.
    pub description: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// Amounts are stored as decimal text so that no precision is lost to
/// floating point conversions.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
                amount TEXT NOT NULL,
                description TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    // The list is always ordered by creation time.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_created_at ON \"transaction\"(created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order `id, type, amount, description,
/// created_at, updated_at`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let type_ = row.get(1)?;
    let amount: String = row.get(2)?;
    let amount = Decimal::from_str(&amount)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(error)))?;
    let description = row.get(3)?;
    let created_at = row.get(4)?;
    let updated_at = row.get(5)?;

    Ok(Transaction {
        id,
        type_,
        amount,
        description,
        created_at,
        updated_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::{TransactionType, create_transaction_table};

    #[test]
    fn transaction_type_round_trips_through_str() {
        for transaction_type in [TransactionType::Income, TransactionType::Expense] {
            let parsed: TransactionType = transaction_type.as_str().parse().unwrap();
            assert_eq!(parsed, transaction_type);
        }
    }

    #[test]
    fn transaction_type_rejects_other_values() {
        for value in ["", "Income", "EXPENSE", "transfer", " income"] {
            assert!(
                value.parse::<TransactionType>().is_err(),
                "want {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn table_rejects_unknown_types() {
        let connection = Connection::open_in_memory().unwrap();
        create_transaction_table(&connection).unwrap();

        let result = connection.execute(
            "INSERT INTO \"transaction\" (type, amount, description, created_at, updated_at)
             VALUES ('transfer', '1.00', 'foo', '', '')",
            (),
        );

        assert!(result.is_err(), "want CHECK constraint to reject the row");
    }

    #[test]
    fn create_table_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        create_transaction_table(&connection).unwrap();
        create_transaction_table(&connection).unwrap();
    }
}
