use super::money::Money;
use super::payment_method::PaymentMethod;

/// Cumulative amount charged to each payment method considered during an allocation.
///
/// Entries keep the allocator's method order (highest discount first). The
/// methods are the allocator's own copies, so their limits reflect what was
/// left once every order had been placed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    entries: Vec<(PaymentMethod, Money)>,
}

impl Allocation {
    pub fn new(entries: Vec<(PaymentMethod, Money)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PaymentMethod, Money)> {
        self.entries.iter().map(|(method, amount)| (method, *amount))
    }

    /// Entries that were actually charged something.
    pub fn charged(&self) -> impl Iterator<Item = (&PaymentMethod, Money)> {
        self.iter().filter(|(_, amount)| *amount != Money::ZERO)
    }

    pub fn amount_for(&self, method_id: &str) -> Option<Money> {
        self.iter()
            .find(|(method, _)| method.id() == method_id)
            .map(|(_, amount)| amount)
    }

    pub fn total(&self) -> Money {
        self.iter().fold(Money::ZERO, |acc, (_, amount)| acc + amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
