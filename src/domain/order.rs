use super::money::Money;
use super::payment_method::POINTS_METHOD_ID;

/// A purchase awaiting payment.
///
/// The loyalty-points promotion is implicit for every order, so it is
/// appended to `promotions` on construction when the caller left it out.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Order {
    id: String,
    value: Money,
    promotions: Vec<String>,
}

impl Order {
    pub fn new(id: impl Into<String>, value: Money, promotions: Vec<String>) -> Self {
        let mut promotions = promotions;
        if !promotions.iter().any(|p| p == POINTS_METHOD_ID) {
            promotions.push(POINTS_METHOD_ID.to_string());
        }
        Self {
            id: id.into(),
            value,
            promotions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn promotions(&self) -> &[String] {
        &self.promotions
    }

    /// Whether paying with `method_id` triggers a promotion for this order.
    pub fn is_eligible_for(&self, method_id: &str) -> bool {
        self.promotions.iter().any(|p| p == method_id)
    }
}
