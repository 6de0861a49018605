//! The crate level error type.
use std::{fmt, path::PathBuf};

use crate::models::transaction::TransactionId;

/// The input fields a transaction is created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Category,
    Amount,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Type => "type",
            Field::Category => "category",
            Field::Amount => "amount",
            Field::Date => "date",
        };
        f.write_str(name)
    }
}

/// The errors that may occur while validating input or exchanging transactions
/// with a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of the required fields was empty.
    #[error("all fields are required, {0} is missing")]
    MissingField(Field),

    /// The transaction type was neither income nor expense.
    #[error("invalid transaction type '{0}', use 'Income' or 'Expense'")]
    InvalidType(String),

    /// The category was left at the placeholder value.
    #[error("please select a valid category")]
    InvalidCategory,

    /// The amount was not a number or was not greater than zero.
    #[error("invalid amount '{0}', enter a number greater than zero")]
    InvalidAmount(String),

    /// The budget limit was not a number.
    #[error("invalid budget limit '{0}', enter a valid number")]
    InvalidLimit(String),

    /// The date did not have the `DD-MM-YYYY` shape while strict dates are on.
    #[error("invalid date '{0}', use DD-MM-YYYY")]
    InvalidDate(String),

    /// An edit or delete was requested without naming a transaction.
    #[error("please select a transaction first")]
    NoSelection,

    /// An id prefix picked out more than one transaction.
    #[error("{count} transactions have an ID starting with '{prefix}', type more of the ID")]
    AmbiguousSelection { prefix: String, count: usize },

    /// The transaction an edit draft was bound to no longer exists.
    #[error("transaction with ID {0} not found")]
    NotFound(TransactionId),

    /// Comma separated input had the wrong number of fields.
    #[error("expected 4 details separated by commas but got {0}")]
    FieldCount(usize),

    /// A file could not be opened or created.
    #[error("failed to open file '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row of an imported file was rejected.
    #[error("line {line}: {source}")]
    ImportRow {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}
