//! Validation of user submitted transaction fields.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::core::{NewTransaction, TransactionType};

/// The largest amount a single transaction may have, 999,999,999.99.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

/// The minimum number of characters in a trimmed description.
pub const MIN_DESCRIPTION_LENGTH: usize = 2;

/// The maximum number of characters in a description, before trimming.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// The user editable fields of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Income or expense.
    Type,
    /// The amount of money.
    Amount,
    /// The free text description.
    Description,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Type => "Type",
            Field::Amount => "Amount",
            Field::Description => "Description",
        };

        write!(f, "{name}")
    }
}

/// A problem with a single field of a submitted transaction.
///
/// The messages are shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The field was missing or empty.
    #[error("{0} is required")]
    Required(Field),

    /// The type was neither "income" nor "expense".
    #[error("Type must be either income or expense")]
    InvalidType,

    /// The amount is not a number.
    #[error("Amount must be a valid number")]
    InvalidAmount,

    /// The amount is zero or negative.
    #[error("Amount must be a positive amount")]
    NotPositive,

    /// The amount is larger than [MAX_AMOUNT].
    #[error("Amount is too large, the maximum is {}", MAX_AMOUNT)]
    AmountTooLarge,

    /// The trimmed description has fewer than [MIN_DESCRIPTION_LENGTH] characters.
    #[error("Description is too short, use at least {} characters", MIN_DESCRIPTION_LENGTH)]
    DescriptionTooShort,

    /// The description has more than [MAX_DESCRIPTION_LENGTH] characters.
    #[error("Description is too long, use at most {} characters", MAX_DESCRIPTION_LENGTH)]
    DescriptionTooLong,
}

impl ValidationError {
    /// The field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::InvalidType => Field::Type,
            ValidationError::InvalidAmount
            | ValidationError::NotPositive
            | ValidationError::AmountTooLarge => Field::Amount,
            ValidationError::DescriptionTooShort | ValidationError::DescriptionTooLong => {
                Field::Description
            }
        }
    }
}

/// Every problem found with a submitted transaction, in field order.
///
/// Never empty when returned from [TransactionForm::validate].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Iterate over the errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Whether any of the errors refer to `field`.
    pub fn contains_field(&self, field: Field) -> bool {
        self.0.iter().any(|error| error.field() == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "{messages}")
    }
}

/// The raw form data for creating or editing a transaction.
///
/// Every field is optional so that missing fields can be reported to the user
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    /// The amount of money as text, e.g. "12.34".
    #[serde(default)]
    pub amount: Option<String>,
    /// What the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionForm {
    /// Check the form fields and convert them into a [NewTransaction].
    ///
    /// Missing fields are reported on their own, the remaining checks only run
    /// once every field has a value. The amount is returned exactly as parsed
    /// and the description is trimmed.
    ///
    /// # Errors
    /// Returns every [ValidationError] that applies to the form.
    pub fn validate(&self) -> Result<NewTransaction, ValidationErrors> {
        let (type_, amount, description) = match (
            non_empty(&self.type_),
            non_empty(&self.amount),
            non_empty(&self.description),
        ) {
            (Some(type_), Some(amount), Some(description)) => (type_, amount, description),
            (type_, amount, description) => {
                let missing = [
                    (Field::Type, type_.is_none()),
                    (Field::Amount, amount.is_none()),
                    (Field::Description, description.is_none()),
                ]
                .into_iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(field, _)| ValidationError::Required(field))
                .collect();

                return Err(ValidationErrors(missing));
            }
        };

        let type_ = TransactionType::from_str(type_);
        let amount = parse_amount(amount);
        let description = validate_description(description);

        match (type_, amount, description) {
            (Ok(type_), Ok(amount), Ok(description)) => Ok(NewTransaction {
                type_,
                amount,
                description,
            }),
            (type_, amount, description) => {
                let mut errors = Vec::new();
                errors.extend(type_.err());
                errors.extend(amount.err());
                errors.extend(description.err().into_iter().flatten());

                Err(ValidationErrors(errors))
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Parse and range check an amount.
///
/// Only plain decimal numbers such as "12.34", "-5" or "1e3" are accepted.
/// Numbers that are too big to be represented as a [Decimal] are reported as
/// too large rather than as invalid.
pub fn parse_amount(text: &str) -> Result<Decimal, ValidationError> {
    let text = text.trim();

    if !is_decimal_number(text) {
        return Err(ValidationError::InvalidAmount);
    }

    let text = text.strip_prefix('+').unwrap_or(text);

    let amount = match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(amount) => amount,
        Err(_) => return Err(classify_unrepresentable_amount(text)),
    };

    if amount <= Decimal::ZERO {
        Err(ValidationError::NotPositive)
    } else if amount > MAX_AMOUNT {
        Err(ValidationError::AmountTooLarge)
    } else {
        Ok(amount)
    }
}

/// Whether `text` has the shape `[+-]digits[.digits][(e|E)[+-]digits]`.
fn is_decimal_number(text: &str) -> bool {
    let (mantissa, exponent) = match strip_sign(text).split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (strip_sign(text), None),
    };
    let mantissa_is_valid = match mantissa.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(mantissa),
    };

    mantissa_is_valid && exponent.is_none_or(|exponent| is_digits(strip_sign(exponent)))
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Classify a well formed number that does not fit in a [Decimal].
fn classify_unrepresentable_amount(text: &str) -> ValidationError {
    match text.parse::<f64>() {
        // Below one, the only way to overflow is too many decimal places,
        // which rounds to zero.
        Ok(value) if value < 1.0 => ValidationError::NotPositive,
        Ok(_) => ValidationError::AmountTooLarge,
        Err(_) => ValidationError::InvalidAmount,
    }
}

/// Check the length of a description and return it trimmed.
///
/// Lengths are counted in grapheme clusters so that e.g. emoji count as one
/// character.
pub fn validate_description(text: &str) -> Result<String, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let trimmed = text.trim();

    if trimmed.graphemes(true).count() < MIN_DESCRIPTION_LENGTH {
        errors.push(ValidationError::DescriptionTooShort);
    }

    if text.graphemes(true).count() > MAX_DESCRIPTION_LENGTH {
        errors.push(ValidationError::DescriptionTooLong);
    }

    if errors.is_empty() {
        Ok(trimmed.to_owned())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::{
        Field, MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, TransactionForm, ValidationError,
        parse_amount, validate_description,
    };
    use crate::transaction::{NewTransaction, TransactionType};

    fn form(type_: &str, amount: &str, description: &str) -> TransactionForm {
        TransactionForm {
            type_: Some(type_.to_owned()),
            amount: Some(amount.to_owned()),
            description: Some(description.to_owned()),
        }
    }

    #[track_caller]
    fn assert_errors(form: TransactionForm, want: &[ValidationError]) {
        let errors = form.validate().expect_err("want validation to fail");
        let got = errors.iter().copied().collect::<Vec<_>>();

        assert_eq!(got, want);
    }

    #[test]
    fn max_amount_is_nine_hundred_ninety_nine_million() {
        assert_eq!(MAX_AMOUNT.to_string(), "999999999.99");
    }

    #[test]
    fn accepts_valid_form() {
        let got = form("expense", "12.34", "Groceries").validate();

        assert_eq!(
            got,
            Ok(NewTransaction {
                type_: TransactionType::Expense,
                amount: dec!(12.34),
                description: "Groceries".to_owned(),
            })
        );
    }

    #[test]
    fn amount_is_returned_unchanged() {
        for (text, want) in [
            ("0.01", dec!(0.01)),
            ("1", dec!(1)),
            ("100.5", dec!(100.5)),
            ("1.005", dec!(1.005)),
            ("999999999.99", MAX_AMOUNT),
            (" 42 ", dec!(42)),
            ("1e3", dec!(1000)),
            ("+2.50", dec!(2.50)),
        ] {
            assert_eq!(parse_amount(text), Ok(want), "parsing {text:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        for text in [
            "abc", "12.3.4", "1,000", "NaN", "inf", "-", "$5", "1_000", "1__0", "_1", "5.", ".5",
            "1e", "1e+", "e5", "+-1", "1 000",
        ] {
            assert_eq!(
                parse_amount(text),
                Err(ValidationError::InvalidAmount),
                "parsing {text:?}"
            );
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for text in ["0", "0.00", "-0", "-1", "-0.01", "-1e40"] {
            assert_eq!(
                parse_amount(text),
                Err(ValidationError::NotPositive),
                "parsing {text:?}"
            );
        }
    }

    #[test]
    fn rejects_amounts_that_are_too_large() {
        for text in [
            "1000000000",
            "999999999.991",
            "1e40",
            "99999999999999999999999999999999999",
        ] {
            assert_eq!(
                parse_amount(text),
                Err(ValidationError::AmountTooLarge),
                "parsing {text:?}"
            );
        }
    }

    #[test]
    fn description_is_trimmed() {
        assert_eq!(validate_description("  Rent  "), Ok("Rent".to_owned()));
    }

    #[test]
    fn trimming_is_idempotent() {
        let once = validate_description("  Coffee beans ").unwrap();
        let twice = validate_description(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_short_descriptions() {
        for text in ["a", " a ", "     ", "é"] {
            assert_eq!(
                validate_description(text),
                Err(vec![ValidationError::DescriptionTooShort]),
                "validating {text:?}"
            );
        }
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        assert_eq!(validate_description("🍕🍺"), Ok("🍕🍺".to_owned()));

        let long = "é".repeat(MAX_DESCRIPTION_LENGTH);
        assert!(validate_description(&long).is_ok());
    }

    #[test]
    fn rejects_long_descriptions() {
        let text = "a".repeat(MAX_DESCRIPTION_LENGTH + 1);

        assert_eq!(
            validate_description(&text),
            Err(vec![ValidationError::DescriptionTooLong])
        );
    }

    #[test]
    fn untrimmed_length_counts_towards_limit() {
        let text = format!(" {} ", "a".repeat(MAX_DESCRIPTION_LENGTH - 1));

        assert_eq!(
            validate_description(&text),
            Err(vec![ValidationError::DescriptionTooLong])
        );
    }

    #[test]
    fn rejects_unknown_type() {
        assert_errors(
            form("transfer", "10", "Savings"),
            &[ValidationError::InvalidType],
        );
    }

    #[test]
    fn collects_all_errors() {
        assert_errors(
            form("other", "-5", "x"),
            &[
                ValidationError::InvalidType,
                ValidationError::NotPositive,
                ValidationError::DescriptionTooShort,
            ],
        );
    }

    #[test]
    fn missing_fields_are_reported_before_other_checks() {
        let form = TransactionForm {
            type_: Some("other".to_owned()),
            amount: None,
            description: Some(String::new()),
        };

        assert_errors(
            form,
            &[
                ValidationError::Required(Field::Amount),
                ValidationError::Required(Field::Description),
            ],
        );
    }

    #[test]
    fn empty_form_requires_every_field() {
        assert_errors(
            TransactionForm::default(),
            &[
                ValidationError::Required(Field::Type),
                ValidationError::Required(Field::Amount),
                ValidationError::Required(Field::Description),
            ],
        );
    }

    #[test]
    fn errors_know_their_field() {
        let errors = form("other", "abc", "ok text").validate().unwrap_err();

        assert!(errors.contains_field(Field::Type));
        assert!(errors.contains_field(Field::Amount));
        assert!(!errors.contains_field(Field::Description));
    }

    #[test]
    fn error_messages_mention_limits() {
        assert_eq!(
            ValidationError::AmountTooLarge.to_string(),
            "Amount is too large, the maximum is 999999999.99"
        );
        assert_eq!(
            ValidationError::Required(Field::Description).to_string(),
            "Description is required"
        );
        assert_ne!(Decimal::ZERO, MAX_AMOUNT);
    }
}
