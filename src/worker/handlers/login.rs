use crate::domain::{account::Account, ledger::Ledger};

/// Authenticates a username/pin pair against the ledger.
///
/// A wrong username and a wrong pin both come back as `None`: the caller
/// cannot tell which check failed, so usernames cannot be probed through the
/// login form. Pure read, no ledger mutation.
pub fn handle<'a>(ledger: &'a Ledger, username: &str, pin: u32) -> Option<&'a Account> {
    ledger
        .find_by_username(username)
        .filter(|account| account.pin == pin)
}
