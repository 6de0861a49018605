use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use fintrack::logging::setup_logging;
use fintrack::{
    BudgetStatus, CategoryFilter, DateFormat, DateOrdering, Selection, SortField, SortOrder,
    StoreConfig, Transaction, TransactionInput, TransactionStore, format_money,
};

/// Track income and expenses for the current session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Currency symbol printed in front of amounts.
    #[arg(long, default_value = "₦")]
    currency: String,

    /// Reject dates that are not written as DD-MM-YYYY.
    #[arg(long)]
    strict_dates: bool,

    /// Sort dates as plain text instead of by calendar day.
    #[arg(long)]
    lexicographic_dates: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn store_config(&self) -> StoreConfig {
        StoreConfig {
            date_format: if self.strict_dates {
                DateFormat::Strict
            } else {
                DateFormat::Free
            },
            date_ordering: if self.lexicographic_dates {
                DateOrdering::Lexicographic
            } else {
                DateOrdering::Chronological
            },
        }
    }
}

pub enum UserCommands {
    Add,
    Edit,
    Remove,
    List,
    Sort,
    Summary,
    Budget,
    Clear,
    Import,
    Export,
    Help,
    Exit,
    Unknown,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let mut store = TransactionStore::new(args.store_config());
    let currency = args.currency.as_str();

    println!("Welcome to the personal finance tracker!");
    print_help();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let input = match read_user_input() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("stdin failed: {}", e);
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input.as_str(), ""),
        };
        if command.is_empty() {
            continue;
        }

        match check_for_command(command) {
            UserCommands::Add => {
                let prompt = "Enter details as: \
                              type(Income/Expense), category, amount, date(DD-MM-YYYY)";
                let Some(details) = argument_or_prompt(rest, prompt) else {
                    continue;
                };
                let result = TransactionInput::from_details(&details)
                    .and_then(|input| store.create_from_input(&input));
                match result {
                    Ok(transaction) => {
                        println!("Transaction saved successfully!");
                        print_transaction(&transaction, currency);
                    }
                    Err(e) => println!("Error adding transaction: {}", e),
                }
            }
            UserCommands::Edit => {
                let Some(selection) = select_transaction(&store, rest) else {
                    continue;
                };
                let Some(mut draft) = store.begin_edit(&selection) else {
                    println!("No transaction matches that selection.");
                    continue;
                };
                println!(
                    "Editing: {}, {}, {}, {}",
                    draft.input.kind, draft.input.category, draft.input.amount, draft.input.date
                );
                println!("Enter the new details (empty line cancels):");
                let details = match read_user_input() {
                    Ok(Some(details)) if !details.is_empty() => details,
                    Ok(_) => {
                        println!("Edit cancelled, transaction unchanged.");
                        continue;
                    }
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let result = TransactionInput::from_details(&details).and_then(|input| {
                    draft.input = input;
                    store.commit_edit(&draft)
                });
                match result {
                    Ok(transaction) => {
                        println!("Transaction updated.");
                        print_transaction(&transaction, currency);
                    }
                    Err(e) => println!("Error editing transaction: {}", e),
                }
            }
            UserCommands::Remove => {
                let Some(selection) = select_transaction(&store, rest) else {
                    continue;
                };
                if store.delete(&selection) {
                    println!("Transaction removed successfully.");
                    print_summary(&store, currency);
                } else {
                    println!("No transaction matches that selection.");
                }
            }
            UserCommands::List => {
                let filter = CategoryFilter::parse(rest);
                print_transactions(&store.list(&filter), currency);
            }
            UserCommands::Sort => {
                let mut parts = rest.split_whitespace();
                let field = parts.next().and_then(SortField::parse);
                let order = SortOrder::parse(parts.next().unwrap_or(""));
                if field.is_none() {
                    println!(
                        "Unknown sort field, showing stored order. Use date, category or amount."
                    );
                }
                print_transactions(&store.sort(field, order), currency);
            }
            UserCommands::Summary => print_summary(&store, currency),
            UserCommands::Budget => {
                let Some(limit) = argument_or_prompt(rest, "Enter the budget limit:") else {
                    continue;
                };
                let total_expense = store.summary().total_expense;
                match store.check_budget(&limit) {
                    Ok(BudgetStatus::OverBudget) => println!(
                        "Warning! Your total expenses ({}) have exceeded the budget limit ({}).",
                        format_money(total_expense, currency),
                        limit.trim()
                    ),
                    Ok(BudgetStatus::WithinBudget) => println!(
                        "You're in line with budget! Total expenses: {}",
                        format_money(total_expense, currency)
                    ),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::Clear => {
                let count = store.clear_all();
                println!("All transactions have been cleared! ({} removed)", count);
            }
            UserCommands::Import => {
                let prompt = "Enter the CSV file path to import from:";
                let Some(path) = argument_or_prompt(rest, prompt) else {
                    continue;
                };
                match store.import_csv(Path::new(&path)) {
                    Ok(count) => println!("Successfully imported {} transactions.", count),
                    Err(e) => println!("Error importing transactions: {}", e),
                }
            }
            UserCommands::Export => {
                let prompt = "Enter the CSV file path to export to:";
                let Some(path) = argument_or_prompt(rest, prompt) else {
                    continue;
                };
                match store.export_csv(Path::new(&path)) {
                    Ok(count) => println!("Exported {} transactions to {}.", count, path),
                    Err(e) => println!("Error exporting transactions: {}", e),
                }
            }
            UserCommands::Help => print_help(),
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
            UserCommands::Unknown => println!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                command
            ),
        }
    }

    ExitCode::SUCCESS
}

/// Reads one trimmed line from stdin. `None` means stdin is closed.
fn read_user_input() -> Result<Option<String>, String> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("failed to read line: {}", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Uses the text after the command, or asks for it when there is none.
fn argument_or_prompt(rest: &str, prompt: &str) -> Option<String> {
    if !rest.is_empty() {
        return Some(rest.to_string());
    }
    println!("{}", prompt);
    match read_user_input() {
        Ok(Some(line)) => Some(line),
        Ok(None) => None,
        Err(e) => {
            println!("Error reading input: {}", e);
            None
        }
    }
}

/// Reads a selection and pins it to the id of the one transaction it picks out.
fn select_transaction(store: &TransactionStore, rest: &str) -> Option<Selection> {
    let prompt = "Select a transaction by id (or type, category, amount, date):";
    let input = argument_or_prompt(rest, prompt)?;
    let resolved = Selection::parse(&input).and_then(|selection| store.resolve(&selection));
    match resolved {
        Ok(Some(transaction)) => Some(Selection::Id(transaction.id)),
        Ok(None) => {
            println!("No transaction matches that selection.");
            None
        }
        Err(e) => {
            println!("Error: {}", e);
            None
        }
    }
}

fn check_for_command(input: &str) -> UserCommands {
    match input.to_lowercase().as_str() {
        "add" | "save" => UserCommands::Add,
        "edit" => UserCommands::Edit,
        "remove" | "delete" => UserCommands::Remove,
        "list" | "print" | "filter" => UserCommands::List,
        "sort" => UserCommands::Sort,
        "summary" => UserCommands::Summary,
        "budget" => UserCommands::Budget,
        "clear" => UserCommands::Clear,
        "import" => UserCommands::Import,
        "export" => UserCommands::Export,
        "help" => UserCommands::Help,
        "exit" | "quit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add [type, category, amount, date]   add a transaction");
    println!("  edit [id]                            change a transaction");
    println!("  remove [id]                          delete a transaction");
    println!("  list [category|All]                  show transactions");
    println!("  sort <date|category|amount> [Ascending|Descending]");
    println!("  summary                              show income, expense and balance");
    println!("  budget [limit]                       compare expenses with a limit");
    println!("  clear                                delete every transaction");
    println!("  import [path] / export [path]        read or write a CSV file");
    println!("  help, exit");
}

fn print_transaction(transaction: &Transaction, currency: &str) {
    println!(
        "{:<10}{:<9}{:<16}{:>14}  {}",
        transaction.id.short(),
        transaction.kind.to_string(),
        transaction.category.name(),
        format_money(transaction.amount, currency),
        transaction.date
    );
}

fn print_transactions(transactions: &[Transaction], currency: &str) {
    if transactions.is_empty() {
        println!("No transactions to show.");
        return;
    }
    println!("{:<10}{:<9}{:<16}{:>14}  {}", "ID", "Type", "Category", "Amount", "Date");
    for transaction in transactions {
        print_transaction(transaction, currency);
    }
}

fn print_summary(store: &TransactionStore, currency: &str) {
    println!("{}", store.summary().display(currency));
}
