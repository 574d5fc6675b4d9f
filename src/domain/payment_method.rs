use super::money::Money;
use rust_decimal::Decimal;

/// Identifier reserved for the loyalty-points payment method.
pub const POINTS_METHOD_ID: &str = "PUNKTY";

/// A funding source with a discount rate and a remaining spending limit.
///
/// Identity and discount are fixed at construction. The limit only moves
/// through [`PaymentMethod::reduce_limit`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PaymentMethod {
    id: String,
    /// Fraction taken off a payment, e.g. `0.05` for 5%.
    discount: Decimal,
    limit: Money,
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, discount: Decimal, limit: Money) -> Self {
        Self {
            id: id.into(),
            discount,
            limit,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    pub fn is_points(&self) -> bool {
        self.id == POINTS_METHOD_ID
    }

    /// Lowers the remaining limit by `amount`. A negative amount raises it.
    pub fn reduce_limit(&mut self, amount: Money) {
        self.limit -= amount;
    }

    /// Price of `value` once this method's discount is taken off, rounded to 2 decimals.
    pub fn apply_discount(&self, value: Decimal) -> Money {
        Money::new(value * (Decimal::ONE - self.discount))
    }
}
