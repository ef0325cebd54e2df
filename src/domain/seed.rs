use crate::common::money::Money;
use crate::domain::account::Account;

/// The fixed demo seed: four customers with a pre-existing movement history.
/// Used when no accounts file is supplied on the command line.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            units(&[200, 450, -400, 3000, -650, -130, 70, 1300]),
            1.2,
            1111,
        ),
        Account::new(
            "Jessica Davis",
            units(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]),
            1.5,
            2222,
        ),
        Account::new(
            "Steven Thomas Williams",
            units(&[200, -200, 340, -300, -20, 50, 400, -460]),
            0.7,
            3333,
        ),
        Account::new("Sarah Smith", units(&[430, 1000, 700, 50, 90]), 1.0, 4444),
    ]
}

fn units(amounts: &[i64]) -> Vec<Money> {
    amounts.iter().map(|&a| Money::units(a)).collect()
}
