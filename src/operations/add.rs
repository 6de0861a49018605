use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::config::DateFormat;
use crate::error::{Error, Field};
use crate::models::transaction::{Category, NewTransaction, Transaction, TransactionType};
use crate::operations::summary::RunningTotals;
use crate::store::TransactionRepository;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("date pattern is valid"));

/// Raw field text as entered by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionInput {
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: String,
}

impl TransactionInput {
    pub fn new(kind: &str, category: &str, amount: &str, date: &str) -> Self {
        Self {
            kind: kind.trim().to_string(),
            category: category.trim().to_string(),
            amount: amount.trim().to_string(),
            date: date.trim().to_string(),
        }
    }

    /// Splits `type, category, amount, date`.
    pub fn from_details(details: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
        if parts.len() != 4 {
            return Err(Error::FieldCount(parts.len()));
        }
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

/// Parses a number the way a user may type it: plain (`12.50`) or scientific (`1e3`).
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

pub fn validate_transaction(
    input: &TransactionInput,
    date_format: DateFormat,
) -> Result<NewTransaction, Error> {
    let fields = [
        (Field::Type, &input.kind),
        (Field::Category, &input.category),
        (Field::Amount, &input.amount),
        (Field::Date, &input.date),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(Error::MissingField(*field));
    }

    let kind = TransactionType::from_str(&input.kind)?;
    let category = Category::from_str(&input.category)?;

    let amount = match parse_decimal(&input.amount) {
        Some(amount) if amount > Decimal::ZERO => amount,
        _ => return Err(Error::InvalidAmount(input.amount.trim().to_string())),
    };

    let date = input.date.trim().to_string();
    if date_format == DateFormat::Strict && !DATE_SHAPE.is_match(&date) {
        return Err(Error::InvalidDate(date));
    }

    Ok(NewTransaction {
        kind,
        category,
        amount,
        date,
    })
}

/// Rejects `fields` if adding its amount to the total of its type across
/// `others` would not fit in a `Decimal`.
pub fn ensure_total_fits(others: &[Transaction], fields: &NewTransaction) -> Result<(), Error> {
    let fits = RunningTotals::of(others)
        .is_some_and(|mut totals| totals.try_add(fields.kind, fields.amount));
    if fits {
        Ok(())
    } else {
        Err(Error::InvalidAmount(fields.amount.to_string()))
    }
}

/// Validates comma separated details without any date format check.
pub fn parse_transaction_details(details: &str) -> Result<NewTransaction, Error> {
    let input = TransactionInput::from_details(details)?;
    validate_transaction(&input, DateFormat::Free)
}

/// Validates `input` and appends the new transaction to `repo`.
pub fn add_transaction<R: TransactionRepository>(
    repo: &mut R,
    input: &TransactionInput,
    date_format: DateFormat,
) -> Result<Transaction, Error> {
    let fields = validate_transaction(input, date_format)
        .and_then(|fields| {
            ensure_total_fits(&repo.get_all_transactions(), &fields)?;
            Ok(fields)
        })
        .inspect_err(|e| {
            tracing::warn!("rejected transaction input {:?}: {}", input, e);
        })?;

    let transaction = Transaction::from_new(fields);
    repo.add_transaction(transaction.clone());
    tracing::info!(
        id = %transaction.id,
        kind = %transaction.kind,
        category = %transaction.category,
        amount = %transaction.amount,
        "transaction created"
    );

    Ok(transaction)
}
