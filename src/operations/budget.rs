use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::Error;
use crate::models::budget::{BudgetLimit, BudgetStatus};

/// Compares `total_expense` against the limit the user typed.
///
/// Does not look at any store; callers pass in the total they already have.
pub fn check_budget(limit_text: &str, total_expense: Decimal) -> Result<BudgetStatus, Error> {
    let BudgetLimit(limit) = BudgetLimit::from_str(limit_text)?;

    let status = if total_expense > limit {
        BudgetStatus::OverBudget
    } else {
        BudgetStatus::WithinBudget
    };
    tracing::debug!(%limit, %total_expense, ?status, "checked budget");

    Ok(status)
}
