#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing session csv path. usage: cargo run -- <session.csv> [accounts.csv]")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("duplicate username after derivation: {0}")]
    DuplicateUsername(String),
}

/// Why a transfer was rejected. Rejections are ordinary outcomes: the ledger
/// is left untouched and the presentation decides whether to surface them.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    #[error("transfer amount must be positive")]
    InvalidAmount,
    #[error("receiver username not found")]
    ReceiverNotFound,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("cannot transfer to own account")]
    SelfTransfer,
}

/// Why a loan request was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanError {
    #[error("loan amount must be positive")]
    InvalidAmount,
    #[error("no deposit covers 10% of the requested amount")]
    NoQualifyingDeposit,
}
