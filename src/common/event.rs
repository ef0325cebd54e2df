use crate::common::money::Money;

/// A user action captured by the presentation layer and handed to the
/// session processor. One event corresponds to one form submission or
/// button press in the original UI.
#[derive(Debug)]
pub enum SessionEvent {
    Login { username: String, pin: u32 },
    Transfer { to: String, amount: Money },
    Loan { amount: Money },
    Close { username: String, pin: u32 },
    Sort,
}
