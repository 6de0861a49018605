use rust_decimal::Decimal;

use crate::error::Error;
use crate::models::transaction::{
    Category, NewTransaction, Transaction, TransactionId, TransactionType,
};

/// Attribute tuple used to find a transaction when its id is not known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMatcher {
    pub kind: TransactionType,
    pub category: Category,
    pub amount: Decimal,
    pub date: String,
}

impl TransactionMatcher {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        transaction.kind == self.kind
            && transaction.category == self.category
            && transaction.amount == self.amount
            && transaction.date == self.date
    }
}

impl From<NewTransaction> for TransactionMatcher {
    fn from(fields: NewTransaction) -> Self {
        Self {
            kind: fields.kind,
            category: fields.category,
            amount: fields.amount,
            date: fields.date,
        }
    }
}

impl From<&Transaction> for TransactionMatcher {
    fn from(transaction: &Transaction) -> Self {
        Self {
            kind: transaction.kind,
            category: transaction.category.clone(),
            amount: transaction.amount,
            date: transaction.date.clone(),
        }
    }
}

/// Names the single transaction a delete or edit applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Id(TransactionId),
    /// Leading characters of an id, as shown in listings. Must pick out exactly
    /// one transaction.
    Prefix(String),
    /// First transaction whose attributes equal the matcher.
    Matching(TransactionMatcher),
}

impl Selection {
    /// Parses what the user typed to pick a transaction.
    ///
    /// A full UUID selects by id, comma separated `type, category, amount, date`
    /// selects by attributes, anything else is an id prefix.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::NoSelection);
        }
        if let Ok(id) = input.parse::<TransactionId>() {
            return Ok(Selection::Id(id));
        }
        if input.contains(',') {
            let fields = crate::operations::add::parse_transaction_details(input)?;
            return Ok(Selection::Matching(fields.into()));
        }
        Ok(Selection::Prefix(input.to_lowercase()))
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Selection::Id(id) => transaction.id == *id,
            Selection::Prefix(prefix) => transaction.id.to_string().starts_with(prefix.as_str()),
            Selection::Matching(matcher) => matcher.matches(transaction),
        }
    }
}
