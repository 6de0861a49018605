use crate::error::Error;
use crate::models::selection::Selection;
use crate::models::transaction::Transaction;
use crate::store::TransactionRepository;

/// The transaction `selection` picks out.
///
/// An id prefix shared by more than one transaction is
/// [Error::AmbiguousSelection]. An attribute matcher picks the first match in
/// insertion order.
pub fn find_selected<R: TransactionRepository>(
    repo: &R,
    selection: &Selection,
) -> Result<Option<Transaction>, Error> {
    match selection {
        Selection::Id(id) => Ok(repo.get_transaction(*id)),
        Selection::Prefix(prefix) => {
            let mut matches: Vec<Transaction> = repo
                .get_all_transactions()
                .into_iter()
                .filter(|t| selection.matches(t))
                .collect();
            if matches.len() > 1 {
                return Err(Error::AmbiguousSelection {
                    prefix: prefix.clone(),
                    count: matches.len(),
                });
            }
            Ok(matches.pop())
        }
        Selection::Matching(_) => Ok(repo
            .get_all_transactions()
            .into_iter()
            .find(|t| selection.matches(t))),
    }
}

/// Removes the transaction picked out by `selection`.
///
/// Returns whether anything was removed. An ambiguous prefix removes nothing.
pub fn remove_transaction<R: TransactionRepository>(repo: &mut R, selection: &Selection) -> bool {
    let target = match find_selected(repo, selection) {
        Ok(Some(target)) => target,
        Ok(None) => {
            tracing::debug!("no transaction matches {:?}", selection);
            return false;
        }
        Err(e) => {
            tracing::warn!("remove rejected: {}", e);
            return false;
        }
    };

    let removed = repo.remove_transaction(target.id).is_some();
    if removed {
        tracing::info!(id = %target.id, "transaction removed");
    }
    removed
}

pub fn clear_all_transactions<R: TransactionRepository>(repo: &mut R) -> usize {
    let count = repo.clear();
    tracing::info!(count, "all transactions cleared");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::selection::TransactionMatcher;
    use crate::models::transaction::{Category, TransactionId, TransactionType};
    use crate::store::InMemoryRepository;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_test_transaction(category: Category, amount: i64) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            category,
            Decimal::new(amount, 0),
            "09-11-2025".to_string(),
        )
    }

    fn create_test_transaction_with_id(id: &str, amount: i64) -> Transaction {
        Transaction {
            id: TransactionId::from_str(id).unwrap(),
            ..create_test_transaction(Category::Food, amount)
        }
    }

    fn repo_with_shared_prefix() -> InMemoryRepository {
        let mut repo = InMemoryRepository::new();
        repo.add_transaction(create_test_transaction_with_id(
            "abcd0000-0000-4000-8000-000000000001",
            10,
        ));
        repo.add_transaction(create_test_transaction_with_id(
            "abce0000-0000-4000-8000-000000000002",
            20,
        ));
        repo
    }

    #[test]
    fn test_remove_by_id() {
        let mut repo = InMemoryRepository::new();
        let tx1 = create_test_transaction(Category::Food, 10);
        let tx2 = create_test_transaction(Category::Rent, 20);
        repo.add_transaction(tx1.clone());
        repo.add_transaction(tx2.clone());

        assert!(remove_transaction(&mut repo, &Selection::Id(tx1.id)));
        assert_eq!(repo.get_all_transactions(), vec![tx2]);
    }

    #[test]
    fn test_remove_not_found_returns_false() {
        let mut repo = InMemoryRepository::new();
        repo.add_transaction(create_test_transaction(Category::Food, 10));

        let selection = Selection::Prefix("zzzz".to_string());
        assert!(!remove_transaction(&mut repo, &selection));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_remove_matching_removes_first_duplicate_only() {
        let mut repo = InMemoryRepository::new();
        let first = create_test_transaction(Category::Food, 10);
        let second = create_test_transaction(Category::Food, 10);
        repo.add_transaction(first.clone());
        repo.add_transaction(second.clone());

        let selection = Selection::Matching(TransactionMatcher::from(&first));
        assert!(remove_transaction(&mut repo, &selection));

        assert_eq!(repo.get_all_transactions(), vec![second]);
    }

    #[test]
    fn test_find_selected_shared_prefix_is_ambiguous() {
        let repo = repo_with_shared_prefix();

        let result = find_selected(&repo, &Selection::Prefix("abc".to_string()));

        assert!(matches!(
            result,
            Err(Error::AmbiguousSelection { ref prefix, count: 2 }) if prefix == "abc"
        ));
    }

    #[test]
    fn test_remove_shared_prefix_removes_nothing() {
        let mut repo = repo_with_shared_prefix();

        assert!(!remove_transaction(&mut repo, &Selection::Prefix("abc".to_string())));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_remove_unique_prefix() {
        let mut repo = repo_with_shared_prefix();

        assert!(remove_transaction(&mut repo, &Selection::Prefix("abcd".to_string())));

        let remaining = repo.get_all_transactions();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].amount, Decimal::new(20, 0));
    }

    #[test]
    fn test_clear_all_transactions() {
        let mut repo = InMemoryRepository::new();
        repo.add_transaction(create_test_transaction(Category::Food, 10));
        repo.add_transaction(create_test_transaction(Category::Rent, 20));

        assert_eq!(clear_all_transactions(&mut repo), 2);
        assert!(repo.get_all_transactions().is_empty());
    }
}
