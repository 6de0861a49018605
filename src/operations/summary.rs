use rust_decimal::Decimal;

use crate::models::summary::Summary;
use crate::models::transaction::{Transaction, TransactionType};
use crate::store::TransactionRepository;

/// Sum of the amounts of `kind`, or `None` if it does not fit in a `Decimal`.
fn checked_total(transactions: &[Transaction], kind: TransactionType) -> Option<Decimal> {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.amount))
}

/// Income and expense totals that are known to fit in a `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunningTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl RunningTotals {
    pub fn of(transactions: &[Transaction]) -> Option<Self> {
        Some(Self {
            income: checked_total(transactions, TransactionType::Income)?,
            expense: checked_total(transactions, TransactionType::Expense)?,
        })
    }

    /// Adds `amount` to the total for `kind`. Leaves the totals unchanged and
    /// returns `false` if the sum would overflow.
    pub fn try_add(&mut self, kind: TransactionType, amount: Decimal) -> bool {
        let total = match kind {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };
        match total.checked_add(amount) {
            Some(sum) => {
                *total = sum;
                true
            }
            None => false,
        }
    }
}

fn total_of(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    checked_total(transactions, kind).unwrap_or_else(|| {
        tracing::error!(%kind, "transaction total overflowed, reporting the largest decimal");
        Decimal::MAX
    })
}

/// Totals at full precision, each rounded to cents at the end.
pub fn build_summary(transactions: &[Transaction]) -> Summary {
    let total_income = total_of(transactions, TransactionType::Income);
    let total_expense = total_of(transactions, TransactionType::Expense);
    // Both totals lie in [0, Decimal::MAX], so the difference always fits.
    let balance = total_income - total_expense;

    Summary {
        total_income: total_income.round_dp(2),
        total_expense: total_expense.round_dp(2),
        balance: balance.round_dp(2),
    }
}

pub fn summarize<R: TransactionRepository>(repo: &R) -> Summary {
    let summary = build_summary(&repo.get_all_transactions());
    tracing::debug!(?summary, "computed summary");
    summary
}
