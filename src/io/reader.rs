use crate::common::{event::SessionEvent, money::Money};
use crate::domain::account::Account;
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation for the session script. Only the fields
/// an operation needs are filled; the rest stay empty.
struct SessionRow {
    op: String,
    user: Option<String>,
    pin: Option<u32>,
    amount: Option<String>,
}

/// Reads and validates session actions from a CSV reader.
///
/// Supported headers: `op,user,pin,amount`. The `op` field is normalized to
/// lowercase; each operation requires its own subset of the remaining
/// columns and errors carry the op/user context.
///
/// # Examples
///
/// ```
/// use bankist::io::reader::read_events;
/// use bankist::common::event::SessionEvent;
/// use csv::ReaderBuilder;
///
/// let data = "op,user,pin,amount\n\
/// login,js,1111,\n\
/// transfer,jd,,450\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(SessionEvent::Login { pin: 1111, .. })));
/// assert!(matches!(events[1], Ok(SessionEvent::Transfer { .. })));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SessionEvent, String>> + '_ {
    rdr.deserialize::<SessionRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        match op.as_str() {
            "login" => {
                let username = row.user.ok_or_else(|| "login missing username".to_string())?;
                let pin = row
                    .pin
                    .ok_or_else(|| format!("login missing pin for user {username}"))?;
                Ok(SessionEvent::Login { username, pin })
            }
            "transfer" => {
                let to = row.user.ok_or_else(|| "transfer missing receiver username".to_string())?;
                let amt_str = row
                    .amount
                    .ok_or_else(|| format!("transfer missing amount for receiver {to}"))?;
                let amount = Money::from_str(&amt_str).map_err(|e| e.to_string())?;
                Ok(SessionEvent::Transfer { to, amount })
            }
            "loan" => {
                let amt_str = row.amount.ok_or_else(|| "loan missing amount".to_string())?;
                let amount = Money::from_str(&amt_str).map_err(|e| e.to_string())?;
                Ok(SessionEvent::Loan { amount })
            }
            "close" => {
                let username = row.user.ok_or_else(|| "close missing username".to_string())?;
                let pin = row
                    .pin
                    .ok_or_else(|| format!("close missing pin for user {username}"))?;
                Ok(SessionEvent::Close { username, pin })
            }
            "sort" => Ok(SessionEvent::Sort),
            other => Err(format!("unknown session op: {other}")),
        }
    })
}

#[derive(serde::Deserialize)]
/// Internal CSV row representation for a seed account. The `movements`
/// column holds the chronological history as space-separated signed amounts.
struct AccountRow {
    owner: String,
    movements: String,
    interest_rate: f64,
    pin: u32,
}

/// Reads a seed account list from a CSV reader.
///
/// Supported headers: `owner,movements,interest_rate,pin`. Usernames are not
/// derived here; the caller runs `Ledger::initialize_usernames` afterwards.
pub fn read_accounts<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<Account>, String> {
    let mut accounts = Vec::new();
    for res in rdr.deserialize::<AccountRow>() {
        let row = res.map_err(|e| e.to_string())?;
        let movements = row
            .movements
            .split_whitespace()
            .map(Money::from_str)
            .collect::<Result<Vec<Money>, _>>()
            .map_err(|e| format!("bad movement for owner {}: {e}", row.owner))?;
        accounts.push(Account::new(row.owner, movements, row.interest_rate, row.pin));
    }
    Ok(accounts)
}
