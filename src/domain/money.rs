use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of fractional digits every monetary value is kept at.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude accepted from input. Keeps sums and products of amounts
/// far away from `Decimal`'s 96-bit mantissa.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Represents a monetary value with 2 decimal places precision.
///
/// Every constructor rounds half-up (midpoint away from zero) and pads the
/// scale, so `Money::new(dec!(5))` displays as `5.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(dec!(0.00));

    pub fn new(value: Decimal) -> Self {
        let mut value =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(MONEY_SCALE);
        Self(value)
    }

    /// Like [`Money::new`], but `None` when `value` exceeds [`MAX_AMOUNT`] in magnitude.
    pub fn try_new(value: Decimal) -> Option<Self> {
        (value.abs() <= MAX_AMOUNT).then(|| Self::new(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Multiplies by `factor` and rounds the product back to 2 decimals.
    pub fn scaled(self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
