//! Domain model: money, orders, payment methods and the allocation result.

pub mod allocation;
pub mod money;
pub mod order;
pub mod payment_method;
pub mod ports;
