use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::config::DateOrdering;
use crate::models::transaction::Transaction;
use crate::store::TransactionRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Category,
    Amount,
}

impl SortField {
    /// Unknown names give `None`, which leaves the stored order as is.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "date" => Some(SortField::Date),
            "category" => Some(SortField::Category),
            "amount" => Some(SortField::Amount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Anything other than `Descending` sorts ascending.
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("descending") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%d-%m-%Y").ok()
}

fn compare_dates(a: &str, b: &str, ordering: DateOrdering) -> Ordering {
    match ordering {
        DateOrdering::Lexicographic => a.cmp(b),
        // Unparseable dates (None) sort before calendar dates.
        DateOrdering::Chronological => parse_day(a)
            .cmp(&parse_day(b))
            .then_with(|| a.cmp(b)),
    }
}

/// Returns `transactions` ordered by `field`. The sort is stable, so ties keep
/// their relative order in both directions.
pub fn sort_transactions(
    mut transactions: Vec<Transaction>,
    field: Option<SortField>,
    order: SortOrder,
    date_ordering: DateOrdering,
) -> Vec<Transaction> {
    let Some(field) = field else {
        return transactions;
    };

    transactions.sort_by(|a, b| {
        let ordering = match field {
            SortField::Date => compare_dates(&a.date, &b.date, date_ordering),
            SortField::Category => a.category.name().cmp(b.category.name()),
            SortField::Amount => a.amount.cmp(&b.amount),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    transactions
}

/// Sorted view over everything in `repo`. The stored order is not changed.
pub fn sorted_view<R: TransactionRepository>(
    repo: &R,
    field: Option<SortField>,
    order: SortOrder,
    date_ordering: DateOrdering,
) -> Vec<Transaction> {
    tracing::debug!(?field, ?order, ?date_ordering, "sorting transactions");
    sort_transactions(repo.get_all_transactions(), field, order, date_ordering)
}
