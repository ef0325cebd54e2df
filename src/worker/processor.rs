use crate::common::event::SessionEvent;
use crate::domain::{ledger::Ledger, view, view::AccountView};
use crate::worker::handlers::{close, loan, login, transfer};

/// One user's session: which account is logged in and whether the movement
/// list is currently displayed sorted. Replaces the module-level
/// `currentAccount`/`sorted` globals of the original UI with explicit state.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<String>,
    sorted: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_username(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Applies one user action to the ledger. `Some(view)` asks the
    /// presentation to re-render; `None` means no UI update, which covers
    /// both silent rejections and a successful close (the UI hides).
    pub fn process(&mut self, ledger: &mut Ledger, event: SessionEvent) -> Option<AccountView> {
        match event {
            SessionEvent::Login { username, pin } => match login::handle(ledger, &username, pin) {
                Some(account) => {
                    tracing::info!(user = %account.username, "login");
                    self.current = Some(account.username.clone());
                    self.sorted = false;
                    Some(view::render(account, self.sorted))
                }
                None => {
                    tracing::warn!(user = %username, "login rejected");
                    None
                }
            },
            SessionEvent::Transfer { to, amount } => {
                let Some(sender) = self.current.clone() else {
                    tracing::warn!("transfer without a session");
                    return None;
                };
                match transfer::handle(ledger, &sender, &to, amount) {
                    Ok(()) => {
                        tracing::info!(from = %sender, %to, %amount, "transfer");
                        self.render_current(ledger)
                    }
                    Err(err) => {
                        tracing::warn!(from = %sender, %to, %amount, %err, "transfer rejected");
                        None
                    }
                }
            }
            SessionEvent::Loan { amount } => {
                let Some(username) = self.current.clone() else {
                    tracing::warn!("loan request without a session");
                    return None;
                };
                let account = ledger.find_by_username_mut(&username)?;
                match loan::handle(account, amount) {
                    Ok(()) => {
                        tracing::info!(user = %username, %amount, "loan granted");
                        self.render_current(ledger)
                    }
                    Err(err) => {
                        tracing::warn!(user = %username, %amount, %err, "loan rejected");
                        None
                    }
                }
            }
            SessionEvent::Close { username, pin } => {
                let Some(session_user) = self.current.clone() else {
                    tracing::warn!("close without a session");
                    return None;
                };
                if close::handle(ledger, &session_user, &username, pin) {
                    tracing::info!(user = %username, "account closed");
                    self.current = None;
                    self.sorted = false;
                } else {
                    tracing::warn!(user = %username, "close rejected");
                }
                None
            }
            SessionEvent::Sort => {
                let Some(username) = self.current.clone() else {
                    tracing::warn!("sort without a session");
                    return None;
                };
                self.sorted = !self.sorted;
                let account = ledger.find_by_username(&username)?;
                Some(view::render(account, self.sorted))
            }
        }
    }

    fn render_current(&self, ledger: &Ledger) -> Option<AccountView> {
        let account = ledger.find_by_username(self.current.as_deref()?)?;
        Some(view::render(account, self.sorted))
    }
}
