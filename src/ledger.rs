//! The transaction store: an owned collection of transactions and every
//! operation the command shell needs on it.

use std::path::Path;

use crate::config::StoreConfig;
use crate::error::Error;
use crate::models::budget::BudgetStatus;
use crate::models::selection::Selection;
use crate::models::summary::Summary;
use crate::models::transaction::{Transaction, TransactionId};
use crate::operations::add::{TransactionInput, add_transaction};
use crate::operations::budget;
use crate::operations::edit::{self, EditDraft};
use crate::operations::export::export_transactions;
use crate::operations::import::import_transactions;
use crate::operations::remove::{clear_all_transactions, find_selected, remove_transaction};
use crate::operations::search_by_category::{
    CategoryFilter, search_transactions_by_category,
};
use crate::operations::sort::{SortField, SortOrder, sorted_view};
use crate::operations::summary::summarize;
use crate::store::{InMemoryRepository, TransactionRepository};

/// Holds transactions in insertion order.
///
/// Created once by the caller and dropped when it is done; nothing is kept
/// between runs.
#[derive(Debug, Default)]
pub struct TransactionStore<R: TransactionRepository = InMemoryRepository> {
    repo: R,
    config: StoreConfig,
}

impl TransactionStore<InMemoryRepository> {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_repository(InMemoryRepository::new(), config)
    }
}

impl<R: TransactionRepository> TransactionStore<R> {
    pub fn with_repository(repo: R, config: StoreConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Validates the raw fields and appends a new transaction.
    ///
    /// # Errors
    /// - [Error::MissingField] if any field is empty,
    /// - [Error::InvalidType] if the type is not income or expense,
    /// - [Error::InvalidCategory] if the category is the placeholder,
    /// - [Error::InvalidAmount] if the amount is not a number above zero, or if
    ///   the total of its type would no longer fit in a `Decimal`,
    /// - [Error::InvalidDate] if strict dates are on and the date is not `DD-MM-YYYY`.
    pub fn create(
        &mut self,
        kind: &str,
        category: &str,
        amount_text: &str,
        date: &str,
    ) -> Result<Transaction, Error> {
        self.create_from_input(&TransactionInput::new(kind, category, amount_text, date))
    }

    pub fn create_from_input(&mut self, input: &TransactionInput) -> Result<Transaction, Error> {
        add_transaction(&mut self.repo, input, self.config.date_format)
    }

    /// The transaction `selection` picks out.
    ///
    /// # Errors
    /// [Error::AmbiguousSelection] if an id prefix matches more than one transaction.
    pub fn resolve(&self, selection: &Selection) -> Result<Option<Transaction>, Error> {
        find_selected(&self.repo, selection)
    }

    /// Removes the transaction `selection` picks out. Returns whether one was removed.
    pub fn delete(&mut self, selection: &Selection) -> bool {
        remove_transaction(&mut self.repo, selection)
    }

    /// Starts editing the transaction `selection` picks out.
    ///
    /// The stored transaction stays in place until [TransactionStore::commit_edit].
    pub fn begin_edit(&self, selection: &Selection) -> Option<EditDraft> {
        edit::begin_edit(&self.repo, selection)
    }

    pub fn commit_edit(&mut self, draft: &EditDraft) -> Result<Transaction, Error> {
        edit::commit_edit(&mut self.repo, draft, self.config.date_format)
    }

    pub fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.repo.get_transaction(id)
    }

    pub fn list(&self, filter: &CategoryFilter) -> Vec<Transaction> {
        search_transactions_by_category(&self.repo, filter)
    }

    pub fn sort(&self, by: Option<SortField>, order: SortOrder) -> Vec<Transaction> {
        sorted_view(&self.repo, by, order, self.config.date_ordering)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.repo)
    }

    /// Checks the current total expense against `limit_text`.
    pub fn check_budget(&self, limit_text: &str) -> Result<BudgetStatus, Error> {
        budget::check_budget(limit_text, self.summary().total_expense)
    }

    pub fn clear_all(&mut self) -> usize {
        clear_all_transactions(&mut self.repo)
    }

    pub fn import_csv(&mut self, path: &Path) -> Result<usize, Error> {
        import_transactions(&mut self.repo, path, self.config.date_format)
    }

    pub fn export_csv(&self, path: &Path) -> Result<usize, Error> {
        export_transactions(&self.repo.get_all_transactions(), path)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}
