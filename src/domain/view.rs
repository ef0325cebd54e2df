use std::borrow::Cow;

use crate::common::money::Money;
use crate::domain::account::Account;

/// Aggregates shown under the movement list. All three are recomputed from
/// the movement history on demand and never stored on the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    pub interest: Money,
}

/// Everything the presentation needs to redraw one account: owner line,
/// headline balance, summary row and the movements in display order.
#[derive(Debug, Clone)]
pub struct AccountView {
    pub owner: String,
    pub username: String,
    pub balance: Money,
    pub summary: Summary,
    pub movements: Vec<Money>,
}

/// Sum of all movements. The balance is never cached, so it cannot drift
/// from the history.
pub fn balance(account: &Account) -> Money {
    account.movements.iter().copied().sum()
}

/// Income, expense and interest for the summary row.
///
/// Interest accrues per deposit at the account's rate, and a deposit whose
/// individual contribution comes to less than one whole unit earns nothing.
/// The cut-off applies per deposit, not to the total.
pub fn summary(account: &Account) -> Summary {
    let mut income = Money::zero();
    let mut expense = Money::zero();
    let mut interest = Money::zero();

    for &movement in &account.movements {
        if movement.is_positive() {
            income += movement;
            let earned = movement.interest_at(account.interest_rate);
            if earned >= Money::one() {
                interest += earned;
            }
        } else {
            expense += movement.abs();
        }
    }

    Summary {
        income,
        expense,
        interest,
    }
}

/// Movements in display order: the chronological slice as-is, or a sorted
/// copy when the sort toggle is on. The history itself is never reordered.
pub fn ordered(movements: &[Money], sorted: bool) -> Cow<'_, [Money]> {
    if sorted {
        let mut copy = movements.to_vec();
        copy.sort();
        Cow::Owned(copy)
    } else {
        Cow::Borrowed(movements)
    }
}

/// Builds the full view model for one account.
pub fn render(account: &Account, sorted: bool) -> AccountView {
    AccountView {
        owner: account.owner.clone(),
        username: account.username.clone(),
        balance: balance(account),
        summary: summary(account),
        movements: ordered(&account.movements, sorted).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with(movements: &[i64], interest_rate: f64) -> Account {
        Account::new(
            "Test Owner",
            movements.iter().map(|&m| Money::units(m)).collect(),
            interest_rate,
            1111,
        )
    }

    #[test]
    fn balance_is_sum_of_movements() {
        let acc = account_with(&[200, -400, 70], 1.0);
        assert_eq!(balance(&acc), Money::units(-130));

        let empty = account_with(&[], 1.0);
        assert_eq!(balance(&empty), Money::zero());
    }

    #[test]
    fn summary_splits_income_and_expense() {
        let acc = account_with(&[200, 450, -400, -130], 1.2);
        let s = summary(&acc);

        assert_eq!(s.income, Money::units(650));
        assert_eq!(s.expense, Money::units(530));
    }

    #[test]
    fn interest_accrues_per_deposit() {
        // 100 and 200 at 1.2% earn 1.2 and 2.4, both above the cut-off.
        let acc = account_with(&[100, 200], 1.2);
        assert_eq!(summary(&acc).interest, "3.6".parse().unwrap());
    }

    #[test]
    fn interest_below_one_unit_is_dropped() {
        // 50 at 1% earns 0.5, under one whole unit.
        let acc = account_with(&[50], 1.0);
        assert_eq!(summary(&acc).interest, Money::zero());
    }

    #[test]
    fn interest_cutoff_is_per_deposit_not_total() {
        // Two deposits each earning 0.9: dropped individually even though
        // together they would clear the cut-off.
        let acc = account_with(&[90, 90], 1.0);
        assert_eq!(summary(&acc).interest, Money::zero());
    }

    #[test]
    fn withdrawals_earn_no_interest() {
        let acc = account_with(&[-3000], 1.2);
        assert_eq!(summary(&acc).interest, Money::zero());
    }

    #[test]
    fn ordered_sorts_ascending_without_touching_input() {
        let movements = vec![Money::units(200), Money::units(-400), Money::units(70)];

        let sorted = ordered(&movements, true);
        assert_eq!(
            sorted.as_ref(),
            [Money::units(-400), Money::units(70), Money::units(200)]
        );

        let chronological = ordered(&movements, false);
        assert_eq!(
            chronological.as_ref(),
            [Money::units(200), Money::units(-400), Money::units(70)]
        );

        // Input order survives both calls.
        assert_eq!(
            movements,
            [Money::units(200), Money::units(-400), Money::units(70)]
        );
    }

    #[test]
    fn render_combines_all_derivations() {
        let mut acc = account_with(&[200, -400, 70], 1.2);
        acc.username = "to".into();

        let view = render(&acc, true);
        assert_eq!(view.owner, "Test Owner");
        assert_eq!(view.username, "to");
        assert_eq!(view.balance, Money::units(-130));
        assert_eq!(view.movements[0], Money::units(-400));
    }
}
