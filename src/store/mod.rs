//! Storage for transactions.
//!
//! [TransactionRepository] is the seam a durable backend would plug into. The
//! only implementation is [InMemoryRepository], so all state is lost on exit.

mod memory;

pub use memory::InMemoryRepository;

use crate::error::Error;
use crate::models::transaction::{Transaction, TransactionId};

/// Holds transactions in insertion order.
pub trait TransactionRepository {
    /// Append a transaction after all existing ones.
    fn add_transaction(&mut self, transaction: Transaction);

    /// All transactions in insertion order.
    fn get_all_transactions(&self) -> Vec<Transaction>;

    fn get_transaction(&self, id: TransactionId) -> Option<Transaction>;

    /// Replace the stored transaction with the same id, keeping its position.
    ///
    /// # Errors
    /// [Error::NotFound] if no transaction has that id.
    fn update_transaction(&mut self, transaction: Transaction) -> Result<(), Error>;

    /// Remove and return the transaction with `id`.
    fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction>;

    /// Remove every transaction, returning how many were dropped.
    fn clear(&mut self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
