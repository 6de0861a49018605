//! A small in-memory ledger of income and expense transactions with category
//! filtering, sorting, summary totals and budget checks.

pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod operations;
pub mod store;

pub use config::{DateFormat, DateOrdering, StoreConfig};
pub use error::{Error, Field};
pub use ledger::TransactionStore;
pub use models::budget::BudgetStatus;
pub use models::selection::{Selection, TransactionMatcher};
pub use models::summary::{Summary, format_money};
pub use models::transaction::{Category, Transaction, TransactionId, TransactionType};
pub use operations::add::TransactionInput;
pub use operations::edit::EditDraft;
pub use operations::search_by_category::CategoryFilter;
pub use operations::sort::{SortField, SortOrder};
