use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::Error;
use crate::operations::add::parse_decimal;

/// Expense ceiling entered by the user for a single budget check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetLimit(pub Decimal);

impl FromStr for BudgetLimit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
            .map(BudgetLimit)
            .ok_or_else(|| Error::InvalidLimit(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OverBudget,
    WithinBudget,
}
