use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Error;

/// Stable identifier assigned to a transaction when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight characters, enough to tell transactions apart in a listing.
    pub fn short(&self) -> String {
        let mut id = self.0.to_string();
        id.truncate(8);
        id
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => f.write_str("Income"),
            TransactionType::Expense => f.write_str("Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(Error::InvalidType(s.trim().to_string())),
        }
    }
}

/// Spending or earning category.
///
/// The named variants are the categories offered for selection. Any other
/// non-empty text is kept as a [Category::Custom] category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Food,
    Transport,
    Rent,
    Entertainment,
    Shopping,
    Salary,
    Others,
    Custom(String),
}

impl Category {
    /// The value a category selector shows before the user picks one.
    pub const PLACEHOLDER: &'static str = "Select Category";

    pub const KNOWN: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Rent,
        Category::Entertainment,
        Category::Shopping,
        Category::Salary,
        Category::Others,
    ];

    pub fn name(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Rent => "Rent",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Salary => "Salary",
            Category::Others => "Others",
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(Error::MissingField(crate::error::Field::Category));
        }
        if name == Self::PLACEHOLDER {
            return Err(Error::InvalidCategory);
        }

        let known = Self::KNOWN
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name));

        Ok(known.unwrap_or_else(|| Category::Custom(name.to_string())))
    }
}

/// Validated fields of a transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub category: Category,
    pub amount: Decimal,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionType,
    pub category: Category,
    pub amount: Decimal,
    pub date: String,
}

impl Transaction {
    pub fn new(kind: TransactionType, category: Category, amount: Decimal, date: String) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            category,
            amount,
            date,
        }
    }

    pub fn from_new(fields: NewTransaction) -> Self {
        Self::new(fields.kind, fields.category, fields.amount, fields.date)
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, fields: NewTransaction) {
        self.kind = fields.kind;
        self.category = fields.category;
        self.amount = fields.amount;
        self.date = fields.date;
    }
}
