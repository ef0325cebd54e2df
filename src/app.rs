use std::io::{BufWriter, stdout};

use crate::{
    common::error::AppError,
    domain::{ledger::Ledger, seed},
    io::{reader, writer},
    worker::processor::Session,
};

/// Runs a scripted banking session: seeds the ledger, replays every action
/// from the session CSV, then writes the final ledger snapshot to stdout.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let session_path = &args[1];

    let accounts = match args.get(2) {
        Some(accounts_path) => {
            let file = std::fs::File::open(accounts_path)?;
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(file);
            reader::read_accounts(&mut rdr).map_err(AppError::Parse)?
        }
        None => seed::demo_accounts(),
    };

    let mut ledger = Ledger::new(accounts);
    ledger.initialize_usernames()?;

    let file = std::fs::File::open(session_path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut session = Session::new();
    for event in reader::read_events(&mut rdr) {
        let event = event.map_err(AppError::Parse)?;
        if let Some(view) = session.process(&mut ledger, event) {
            tracing::debug!(
                user = %view.username,
                balance = %view.balance,
                movements = view.movements.len(),
                "render"
            );
        }
    }

    // After the script is exhausted, write the ledger state to stdout
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_accounts(writer, ledger.accounts())?;

    Ok(())
}
