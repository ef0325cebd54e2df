use crate::common::money::Money;

#[derive(Debug, Clone)]
pub struct Account {
    /// Full display name of the customer.
    pub owner: String,
    /// Derived login handle; empty until `Ledger::initialize_usernames` runs.
    pub username: String,
    /// Chronological signed movements: positive deposits, negative withdrawals.
    pub movements: Vec<Money>,
    /// Interest rate in percent (1.2 means 1.2%), applied per deposit.
    pub interest_rate: f64,
    /// Demo-grade credential, compared by exact equality.
    pub pin: u32,
}

impl Account {
    pub fn new(owner: impl Into<String>, movements: Vec<Money>, interest_rate: f64, pin: u32) -> Self {
        Self {
            owner: owner.into(),
            username: String::new(),
            movements,
            interest_rate,
            pin,
        }
    }
}

/// Lowercased first character of each whitespace-separated word of `owner`,
/// concatenated in order ("Jonas Schmedtmann" -> "js").
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
