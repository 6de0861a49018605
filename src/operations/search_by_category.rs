use crate::models::transaction::{Category, Transaction};
use crate::store::TransactionRepository;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `All` (any case) or empty text selects everything.
    pub fn parse(input: &str) -> Self {
        let name = input.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }
        match name.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            // The placeholder never matches a stored category.
            Err(_) => CategoryFilter::Only(Category::Custom(name.to_string())),
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => transaction.category == *category,
        }
    }
}

pub fn search_transactions_by_category<R: TransactionRepository>(
    repo: &R,
    filter: &CategoryFilter,
) -> Vec<Transaction> {
    let transactions: Vec<Transaction> = repo
        .get_all_transactions()
        .into_iter()
        .filter(|transaction| filter.matches(transaction))
        .collect();
    tracing::debug!(?filter, count = transactions.len(), "listed transactions");
    transactions
}
