//! Value objects: equality by value, not identity.

use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Amounts, penalty rates and valuation results are value
/// objects; invoices are entities (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Number of decimal places in a currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Exact decimal currency amount.
///
/// Arithmetic keeps full precision; only [`Money::round_to_cents`] drops digits,
/// rounding half away from zero (773.015 becomes 773.02) and always leaving
/// exactly two decimal places (1000 becomes 1000.00).
///
/// Serialized as a decimal string (`"1020.00"`) so no precision is lost on the
/// wire.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Zero at currency precision (`0.00`).
    pub const ZERO_CENTS: Money = Money(Decimal::from_parts(0, 0, 0, false, CURRENCY_SCALE));

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// No more than [`CURRENCY_SCALE`] significant decimal places.
    pub fn has_cent_precision(&self) -> bool {
        self.0.normalize().scale() <= CURRENCY_SCALE
    }

    /// Round to currency precision (half away from zero), scale fixed at 2.
    pub fn round_to_cents(self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CURRENCY_SCALE);
        Self(rounded)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// Scale an amount by a rate (e.g. `value * 0.02`).
impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
