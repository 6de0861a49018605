use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::DateFormat;
use crate::error::Error;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::operations::add::{TransactionInput, validate_transaction};
use crate::operations::summary::RunningTotals;
use crate::store::TransactionRepository;

/// Reads `type,category,amount,date` rows from a CSV file and appends them.
///
/// Files written by [export](super::export) are accepted too: their header line
/// is skipped and the id column is ignored, so imported rows get fresh ids.
/// Either every row is imported or none is.
pub fn import_transactions<R: TransactionRepository>(
    repo: &mut R,
    path: &Path,
    date_format: DateFormat,
) -> Result<usize, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let count = import_from_reader(repo, file, date_format)?;
    tracing::info!(count, path = %path.display(), "imported transactions");
    Ok(count)
}

pub fn import_from_reader<R: TransactionRepository, S: Read>(
    repo: &mut R,
    source: S,
    date_format: DateFormat,
) -> Result<usize, Error> {
    let rows = read_rows(source, date_format, &repo.get_all_transactions())?;
    let count = rows.len();
    for fields in rows {
        repo.add_transaction(Transaction::from_new(fields));
    }
    Ok(count)
}

/// Validates every row. `existing` seeds the running totals a row's amount must
/// still fit into.
fn read_rows<S: Read>(
    source: S,
    date_format: DateFormat,
    existing: &[Transaction],
) -> Result<Vec<NewTransaction>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    let mut totals = RunningTotals::of(existing);

    // Blank lines are skipped by the reader, so the record index is not the line.
    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map_or(index + 1, |p| p.line() as usize);
                return Err(row_error(line, e.into()));
            }
        };
        let line = record.position().map_or(index + 1, |p| p.line() as usize);

        if index == 0 && is_header(&record) {
            continue;
        }

        let fields: Vec<&str> = match record.len() {
            4 => record.iter().collect(),
            5 => record.iter().skip(1).collect(),
            n => return Err(row_error(line, Error::FieldCount(n))),
        };

        let input = TransactionInput::new(fields[0], fields[1], fields[2], fields[3]);
        let transaction =
            validate_transaction(&input, date_format).map_err(|e| row_error(line, e))?;

        let fits = totals
            .as_mut()
            .is_some_and(|totals| totals.try_add(transaction.kind, transaction.amount));
        if !fits {
            let amount = transaction.amount.to_string();
            return Err(row_error(line, Error::InvalidAmount(amount)));
        }

        rows.push(transaction);
    }

    Ok(rows)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.get(0).is_some_and(|first| {
        first.eq_ignore_ascii_case("id") || first.eq_ignore_ascii_case("type")
    })
}

fn row_error(line: usize, source: Error) -> Error {
    tracing::warn!(line, "rejected import row: {}", source);
    Error::ImportRow {
        line,
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{Category, TransactionType};
    use crate::store::InMemoryRepository;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_csv(contents: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
        write!(tmp, "{}", contents).expect("Failed to write test CSV");
        tmp
    }

    #[test]
    fn test_import_csv_success() {
        let mut repo = InMemoryRepository::new();
        let csv_data = "\
Income,Salary,1500.00,10-11-2025
Expense,Food,3.50,11-11-2025
";

        let tmp = write_temp_csv(csv_data);
        let result = import_transactions(&mut repo, tmp.path(), DateFormat::Free);

        assert_eq!(result.unwrap(), 2);
        let all = repo.get_all_transactions();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind, TransactionType::Income);
        assert_eq!(all[1].category, Category::Food);
        assert_eq!(all[1].amount, Decimal::new(350, 2));
    }

    #[test]
    fn test_import_csv_invalid_data_imports_nothing() {
        let mut repo = InMemoryRepository::new();
        let csv_data = "\
Income,Salary,1500.00,10-11-2025
Expense,Select Category,3.50,11-11-2025
";

        let tmp = write_temp_csv(csv_data);
        let result = import_transactions(&mut repo, tmp.path(), DateFormat::Free);

        let error = result.unwrap_err();
        assert!(matches!(
            &error,
            Error::ImportRow { line: 2, source } if matches!(**source, Error::InvalidCategory)
        ));
        assert!(error.to_string().contains("line 2"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_import_csv_error_line_counts_blank_lines() {
        let mut repo = InMemoryRepository::new();
        let csv_data = "Income,Salary,10,01-01-2025\n\nExpense,Select Category,3,01-01-2025\n";

        let result = import_from_reader(&mut repo, csv_data.as_bytes(), DateFormat::Free);

        let error = result.unwrap_err();
        assert!(matches!(
            &error,
            Error::ImportRow { line: 3, source } if matches!(**source, Error::InvalidCategory)
        ));
        assert!(error.to_string().starts_with("line 3:"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_import_csv_overflowing_total_imports_nothing() {
        let mut repo = InMemoryRepository::new();
        let csv_data = format!(
            "Expense,Rent,{max},01-01-2025\n\
             Income,Salary,{max},01-01-2025\n\
             Expense,Food,1,02-01-2025\n",
            max = Decimal::MAX
        );

        let result = import_from_reader(&mut repo, csv_data.as_bytes(), DateFormat::Free);

        assert!(matches!(
            result,
            Err(Error::ImportRow { line: 3, source }) if matches!(*source, Error::InvalidAmount(_))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_import_csv_overflow_counts_existing_transactions() {
        let mut repo = InMemoryRepository::new();
        repo.add_transaction(Transaction::new(
            TransactionType::Income,
            Category::Salary,
            Decimal::MAX,
            "01-01-2025".to_string(),
        ));

        let result = import_from_reader(
            &mut repo,
            "Income,Salary,1,02-01-2025\n".as_bytes(),
            DateFormat::Free,
        );

        assert!(matches!(result, Err(Error::ImportRow { line: 1, .. })));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_import_csv_wrong_column_count() {
        let mut repo = InMemoryRepository::new();
        let tmp = write_temp_csv("Income,Salary,1500.00\n");

        let result = import_transactions(&mut repo, tmp.path(), DateFormat::Free);

        assert!(matches!(
            result,
            Err(Error::ImportRow { line: 1, source }) if matches!(*source, Error::FieldCount(3))
        ));
    }

    #[test]
    fn test_import_csv_strict_dates() {
        let mut repo = InMemoryRepository::new();
        let tmp = write_temp_csv("Income,Salary,10,2025-11-10\n");

        let result = import_transactions(&mut repo, tmp.path(), DateFormat::Strict);

        assert!(matches!(
            result,
            Err(Error::ImportRow { line: 1, source }) if matches!(*source, Error::InvalidDate(_))
        ));
    }

    #[test]
    fn test_import_skips_export_header_and_id() {
        let mut repo = InMemoryRepository::new();
        let csv_data = "\
id,type,category,amount,date
0b6c7f2e-1111-4c1a-9e55-3f1f2b7a9d10,Expense,Rent,400,01-11-2025
";

        let count =
            import_from_reader(&mut repo, csv_data.as_bytes(), DateFormat::Free).unwrap();

        assert_eq!(count, 1);
        let all = repo.get_all_transactions();
        assert_eq!(all[0].category, Category::Rent);
        assert_ne!(all[0].id.to_string(), "0b6c7f2e-1111-4c1a-9e55-3f1f2b7a9d10");
    }

    #[test]
    fn test_import_nonexistent_file() {
        let mut repo = InMemoryRepository::new();
        let path = Path::new("nonexistent.csv");
        let result = import_transactions(&mut repo, path, DateFormat::Free);

        let error = result.unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
        assert!(error.to_string().contains("failed to open file"));
    }
}
