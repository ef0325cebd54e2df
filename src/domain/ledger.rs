use std::collections::HashSet;

use crate::common::error::AppError;
use crate::domain::account::{Account, derive_username};

/// The set of all active accounts, unique by username once
/// [`Ledger::initialize_usernames`] has run. Accounts stay in seed order;
/// lookups are linear, which is fine at demo scale.
#[derive(Debug, Default)]
pub struct Ledger {
    pub accounts: Vec<Account>,
}

impl Ledger {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Derives and assigns every account's username from its owner name.
    /// Must run once before any lookup. A derivation collision would make
    /// lookups ambiguous, so it is reported as a fatal setup error.
    pub fn initialize_usernames(&mut self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for account in &mut self.accounts {
            let username = derive_username(&account.owner);
            if !seen.insert(username.clone()) {
                return Err(AppError::DuplicateUsername(username));
            }
            account.username = username;
        }
        Ok(())
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.username == username)
    }

    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.username == username)
    }

    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.username == username)
    }

    /// Removes the account with the given username. Returns whether an
    /// account was actually removed.
    pub fn remove(&mut self, username: &str) -> bool {
        match self.position(username) {
            Some(idx) => {
                self.accounts.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;

    fn two_accounts() -> Ledger {
        Ledger::new(vec![
            Account::new("Jonas Schmedtmann", vec![Money::units(200)], 1.2, 1111),
            Account::new("Jessica Davis", vec![Money::units(500)], 1.5, 2222),
        ])
    }

    #[test]
    fn initialize_assigns_derived_usernames() {
        let mut ledger = two_accounts();
        ledger.initialize_usernames().unwrap();

        assert_eq!(ledger.accounts[0].username, "js");
        assert_eq!(ledger.accounts[1].username, "jd");
    }

    #[test]
    fn initialize_rejects_colliding_usernames() {
        let mut ledger = Ledger::new(vec![
            Account::new("Jonas Schmedtmann", vec![], 1.2, 1111),
            Account::new("Jane Smith", vec![], 1.0, 2222),
        ]);

        let err = ledger.initialize_usernames().unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername(u) if u == "js"));
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut ledger = two_accounts();
        ledger.initialize_usernames().unwrap();

        assert!(ledger.find_by_username("jd").is_some());
        assert!(ledger.find_by_username("JD").is_none());
        assert!(ledger.find_by_username("nobody").is_none());
    }

    #[test]
    fn remove_reports_whether_account_existed() {
        let mut ledger = two_accounts();
        ledger.initialize_usernames().unwrap();

        assert!(ledger.remove("js"));
        assert!(ledger.find_by_username("js").is_none());
        assert_eq!(ledger.accounts().len(), 1);

        // Second removal of the same username finds nothing.
        assert!(!ledger.remove("js"));
    }
}
