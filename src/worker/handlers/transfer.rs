use crate::common::{error::TransferError, money::Money};
use crate::domain::{ledger::Ledger, view};

/// Moves `amount` from the sender's account to the receiver's.
///
/// Preconditions, checked in order: positive amount, receiver exists, sender
/// balance covers the amount, receiver is not the sender. Any failure leaves
/// both movement histories untouched. On success the debit and the credit are
/// appended back to back with no observable state in between.
///
/// The session layer guarantees `sender` is a ledger member; a missing sender
/// is an invariant breach, not an expected outcome.
pub fn handle(
    ledger: &mut Ledger,
    sender: &str,
    receiver: &str,
    amount: Money,
) -> Result<(), TransferError> {
    if !amount.is_positive() {
        return Err(TransferError::InvalidAmount);
    }
    let Some(to) = ledger.position(receiver) else {
        return Err(TransferError::ReceiverNotFound);
    };
    let from = ledger.position(sender).expect("sender is a ledger member");

    if view::balance(&ledger.accounts[from]) < amount {
        return Err(TransferError::InsufficientBalance);
    }
    if from == to {
        return Err(TransferError::SelfTransfer);
    }

    ledger.accounts[from].movements.push(-amount);
    ledger.accounts[to].movements.push(amount);
    Ok(())
}
