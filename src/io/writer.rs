use std::io::Write;

use crate::domain::{account::Account, view};

#[derive(serde::Serialize)]
/// Internal CSV output row: one account with its derived display figures.
///
/// Headers written (in this order): `username,owner,balance,income,expense,interest`.
/// Monetary fields are formatted to 4 decimal places as strings.
struct OutputRow {
    username: String,
    owner: String,
    balance: String,
    income: String,
    expense: String,
    interest: String,
}

/// Writes the final ledger snapshot to a CSV writer.
///
/// The output includes a header row. For deterministic output, accounts are
/// sorted by username ascending before writing; balance and summary figures
/// are recomputed from the movement history at write time.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bankist::io::writer::write_accounts;
/// use bankist::domain::{ledger::Ledger, seed};
///
/// let mut ledger = Ledger::new(seed::demo_accounts());
/// ledger.initialize_usernames().unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("username,owner,balance,income,expense,interest\n"));
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    // Deterministic output: sort by username.
    let mut accounts: Vec<&Account> = accounts.iter().collect();
    accounts.sort_by(|a, b| a.username.cmp(&b.username));

    for acc in accounts {
        let summary = view::summary(acc);
        let row = OutputRow {
            username: acc.username.clone(),
            owner: acc.owner.clone(),
            balance: view::balance(acc).to_string_4dp(),
            income: summary.income.to_string_4dp(),
            expense: summary.expense.to_string_4dp(),
            interest: summary.interest.to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
