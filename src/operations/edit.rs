//! Editing works on a draft bound to the original transaction's id. The stored
//! transaction is untouched until the draft is committed, so a dropped draft
//! loses nothing.

use crate::config::DateFormat;
use crate::error::Error;
use crate::models::selection::Selection;
use crate::models::transaction::{Transaction, TransactionId};
use crate::operations::add::{TransactionInput, ensure_total_fits, validate_transaction};
use crate::operations::remove::find_selected;
use crate::store::TransactionRepository;

/// Editable copy of a stored transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TransactionId,
    pub input: TransactionInput,
}

impl From<&Transaction> for EditDraft {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            input: TransactionInput::new(
                &transaction.kind.to_string(),
                transaction.category.name(),
                &transaction.amount.to_string(),
                &transaction.date,
            ),
        }
    }
}

/// A draft of the transaction `selection` picks out. An ambiguous prefix
/// gives `None`.
pub fn begin_edit<R: TransactionRepository>(repo: &R, selection: &Selection) -> Option<EditDraft> {
    match find_selected(repo, selection) {
        Ok(Some(transaction)) => {
            tracing::debug!(id = %transaction.id, "editing transaction");
            Some(EditDraft::from(&transaction))
        }
        Ok(None) => {
            tracing::debug!("no transaction matches {:?}", selection);
            None
        }
        Err(e) => {
            tracing::warn!("edit rejected: {}", e);
            None
        }
    }
}

/// Validates the draft and writes it over the original, keeping id and position.
pub fn commit_edit<R: TransactionRepository>(
    repo: &mut R,
    draft: &EditDraft,
    date_format: DateFormat,
) -> Result<Transaction, Error> {
    let fields = validate_transaction(&draft.input, date_format)?;
    let mut transaction = repo
        .get_transaction(draft.id)
        .ok_or(Error::NotFound(draft.id))?;

    let others: Vec<Transaction> = repo
        .get_all_transactions()
        .into_iter()
        .filter(|t| t.id != draft.id)
        .collect();
    ensure_total_fits(&others, &fields)?;

    transaction.apply(fields);
    repo.update_transaction(transaction.clone())?;
    tracing::info!(id = %transaction.id, "transaction updated");

    Ok(transaction)
}
