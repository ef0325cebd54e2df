use crate::common::{error::LoanError, money::Money};
use crate::domain::account::Account;

/// Grants a loan if some single past movement covers at least 10% of the
/// requested amount. Only deposits can satisfy the check in practice, since
/// the threshold is positive and withdrawals are negative. On success the
/// full amount lands as one new deposit.
pub fn handle(account: &mut Account, amount: Money) -> Result<(), LoanError> {
    if !amount.is_positive() {
        return Err(LoanError::InvalidAmount);
    }

    let threshold = amount.tenth();
    if !account.movements.iter().any(|&m| m >= threshold) {
        return Err(LoanError::NoQualifyingDeposit);
    }

    account.movements.push(amount);
    Ok(())
}
