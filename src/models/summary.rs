use std::fmt;

use rust_decimal::Decimal;

/// Income, expense and balance totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

impl Summary {
    /// Pairs the summary with a currency symbol for printing.
    pub fn display<'a>(&'a self, currency: &'a str) -> SummaryDisplay<'a> {
        SummaryDisplay {
            summary: self,
            currency,
        }
    }
}

pub struct SummaryDisplay<'a> {
    summary: &'a Summary,
    currency: &'a str,
}

impl fmt::Display for SummaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Income: {}  Total Expense: {}  Balance: {}",
            format_money(self.summary.total_income, self.currency),
            format_money(self.summary.total_expense, self.currency),
            format_money(self.summary.balance, self.currency),
        )
    }
}

/// Formats an amount with the currency symbol and two decimals, e.g. `₦1500.00`.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}
