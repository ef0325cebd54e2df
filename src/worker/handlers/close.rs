use crate::domain::ledger::Ledger;

/// Permanently removes an account from the ledger.
///
/// Closing is restricted to the session's own account: the confirmation
/// username must match `session_username`, and the pin must match the stored
/// pin. Returns whether the account was removed; on any mismatch the ledger
/// is unchanged.
pub fn handle(ledger: &mut Ledger, session_username: &str, username: &str, pin: u32) -> bool {
    if username != session_username {
        return false;
    }
    let pin_matches = ledger
        .find_by_username(username)
        .is_some_and(|account| account.pin == pin);
    if !pin_matches {
        return false;
    }
    ledger.remove(username)
}
