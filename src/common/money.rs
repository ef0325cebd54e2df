use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// A movement of `+x` is a deposit and `-x` a withdrawal, so `Money` must be
/// freely negatable and summable. Storing the amount as a scaled integer keeps
/// balance arithmetic exact; only [`Money::interest_at`] goes through floating
/// point, and it rounds back to the scale immediately.
///
/// # Examples
/// ```
/// use bankist::common::money::Money;
///
/// let deposit: Money = "1.25".parse().unwrap();
/// assert_eq!(deposit.as_i64(), 12_500);
/// assert_eq!((-deposit).to_string_4dp(), "-1.2500");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    /// One whole currency unit, the cut-off below which a per-deposit
    /// interest contribution is discarded.
    pub fn one() -> Self {
        Money(SCALE)
    }

    /// Convenience for whole-unit amounts (`Money::units(200)` is 200.0000).
    pub fn units(value: i64) -> Self {
        Money(value * SCALE)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// A tenth of this amount, truncated to the scale. Used as the qualifying
    /// deposit threshold for loan requests.
    pub fn tenth(self) -> Self {
        Money(self.0 / 10)
    }

    /// Interest earned on this amount at `rate_pct` percent (1.2 means 1.2%),
    /// rounded to the nearest ten-thousandth.
    pub fn interest_at(self, rate_pct: f64) -> Self {
        Money((self.0 as f64 * rate_pct / 100.0).round() as i64)
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}
