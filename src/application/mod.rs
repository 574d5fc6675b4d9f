//! Application layer containing the allocation algorithm.
//!
//! [`allocator::allocate`] is the entry point: it copies the caller's orders
//! and payment methods, runs a promotion pass followed by a residual pass,
//! and returns the amount charged to each payment method.

pub mod allocator;
