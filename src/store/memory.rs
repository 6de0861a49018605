use crate::error::Error;
use crate::models::transaction::{Transaction, TransactionId};

use super::TransactionRepository;

/// A [TransactionRepository] backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    transactions: Vec<Transaction>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }
}

impl TransactionRepository for InMemoryRepository {
    fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    fn get_all_transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    fn get_transaction(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions.iter().find(|t| t.id == id).cloned()
    }

    fn update_transaction(&mut self, transaction: Transaction) -> Result<(), Error> {
        let pos = self
            .position(transaction.id)
            .ok_or(Error::NotFound(transaction.id))?;
        self.transactions[pos] = transaction;
        Ok(())
    }

    fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let pos = self.position(id)?;
        Some(self.transactions.remove(pos))
    }

    fn clear(&mut self) -> usize {
        let count = self.transactions.len();
        self.transactions.clear();
        count
    }

    fn len(&self) -> usize {
        self.transactions.len()
    }
}
