use super::order::Order;
use super::payment_method::PaymentMethod;
use crate::error::LoadError;

/// Supplies validated, normalized records to the allocator.
pub trait RecordSource {
    fn orders(&self) -> Result<Vec<Order>, LoadError>;
    fn payment_methods(&self) -> Result<Vec<PaymentMethod>, LoadError>;
}

pub type RecordSourceBox = Box<dyn RecordSource>;
