use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Error;
use crate::models::transaction::Transaction;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    category: &'a str,
    amount: String,
    date: &'a str,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            id: transaction.id.to_string(),
            kind: transaction.kind.to_string(),
            category: transaction.category.name(),
            amount: transaction.amount.to_string(),
            date: &transaction.date,
        }
    }
}

/// Writes `transactions` as CSV with an `id,type,category,amount,date` header.
pub fn export_transactions(transactions: &[Transaction], path: &Path) -> Result<usize, Error> {
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let count = export_to_writer(transactions, file)?;
    tracing::info!(count, path = %path.display(), "exported transactions");
    Ok(count)
}

pub fn export_to_writer<W: Write>(transactions: &[Transaction], sink: W) -> Result<usize, Error> {
    let mut writer = csv::Writer::from_writer(sink);
    if transactions.is_empty() {
        writer.write_record(["id", "type", "category", "amount", "date"])?;
    }
    for transaction in transactions {
        writer.serialize(ExportRow::from(transaction))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateFormat;
    use crate::models::selection::TransactionMatcher;
    use crate::models::transaction::{Category, TransactionType};
    use crate::operations::import::import_transactions;
    use crate::store::{InMemoryRepository, TransactionRepository};
    use rust_decimal::Decimal;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                TransactionType::Income,
                Category::Salary,
                Decimal::new(150000, 2),
                "10-11-2025".to_string(),
            ),
            Transaction::new(
                TransactionType::Expense,
                Category::Custom("Gifts".to_string()),
                Decimal::new(35, 1),
                "11-11-2025".to_string(),
            ),
        ]
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let transactions = sample();
        let mut buffer = Vec::new();

        let count = export_to_writer(&transactions, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(count, 2);
        assert_eq!(lines[0], "id,type,category,amount,date");
        assert_eq!(lines[1], format!("{},Income,Salary,1500.00,10-11-2025", transactions[0].id));
        assert_eq!(lines[2], format!("{},Expense,Gifts,3.5,11-11-2025", transactions[1].id));
    }

    #[test]
    fn test_export_empty_still_writes_header() {
        let mut buffer = Vec::new();

        export_to_writer(&[], &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "id,type,category,amount,date\n");
    }

    #[test]
    fn test_export_then_import_keeps_attributes() {
        let transactions = sample();
        let tmp = NamedTempFile::new().expect("Failed to create temp file");
        export_transactions(&transactions, tmp.path()).unwrap();

        let mut repo = InMemoryRepository::new();
        import_transactions(&mut repo, tmp.path(), DateFormat::Free).unwrap();

        let imported: Vec<TransactionMatcher> = repo
            .get_all_transactions()
            .iter()
            .map(TransactionMatcher::from)
            .collect();
        let expected: Vec<TransactionMatcher> =
            transactions.iter().map(TransactionMatcher::from).collect();
        assert_eq!(imported, expected);
    }
}
