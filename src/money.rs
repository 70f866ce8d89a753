use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Hundredths per whole currency unit.
pub const SCALE: i64 = 100;

/// Fixed-point currency amount stored as a signed count of hundredths.
///
/// All prize and profit arithmetic happens on this type so that tier division
/// and the profit remainder never drift apart the way mixed float/decimal math
/// would. Serialized as the raw hundredths count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_units(units: i64) -> Self {
        Self(units * SCALE)
    }

    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `pct` percent of this amount, rounded half-to-even at the hundredth.
    pub fn percent(self, pct: i64) -> Self {
        Self(round_half_even(self.0 * pct, 100))
    }

    /// Split this amount `parts` ways, rounded half-to-even at the hundredth.
    /// Splitting zero ways yields zero.
    pub fn div_round(self, parts: u64) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        Self(round_half_even(self.0, parts as i64))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, rhs: u64) -> Money {
        Money(self.0 * rhs as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(f, "{sign}{}.{:02}", abs / scale, abs % scale)
    }
}

/// `num / den` rounded to the nearest integer, ties to even.
///
/// `den` must be positive.
pub fn round_half_even(num: i64, den: i64) -> i64 {
    debug_assert!(den > 0, "denominator must be positive");
    let quotient = num.div_euclid(den);
    let twice_remainder = 2 * num.rem_euclid(den);
    if twice_remainder < den {
        quotient
    } else if twice_remainder > den {
        quotient + 1
    } else if quotient.rem_euclid(2) == 0 {
        quotient
    } else {
        quotient + 1
    }
}
