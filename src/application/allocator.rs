use crate::domain::allocation::Allocation;
use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::error::AllocationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Share of an order's value the points balance must cover before points are spent on it.
pub const POINTS_ADDITIONAL_DISCOUNT_THRESHOLD: Decimal = dec!(0.10);

/// Share of an order's value charged to the method paying alongside points.
pub const POINTS_ADDITIONAL_DISCOUNT_PERCENT: Decimal = dec!(0.10);

/// Assigns every order to a payment method, favouring the highest discounts.
///
/// Neither input is modified; the allocator works on its own copies. The
/// returned [`Allocation`] lists every payment method with the amount charged
/// to it, highest discount first.
///
/// # Errors
///
/// * [`AllocationError::InvalidInput`] if `orders` or `methods` is empty.
/// * [`AllocationError::NoPaymentMethodAvailable`] as soon as an order cannot be
///   covered by any remaining limit. Nothing is returned for the orders already
///   placed.
pub fn allocate(
    orders: &[Order],
    methods: &[PaymentMethod],
) -> Result<Allocation, AllocationError> {
    Allocator::new(orders, methods)?.optimize()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AllocatorState {
    Constructed,
    Optimizing,
    Completed,
    Failed,
}

#[derive(Debug)]
struct MethodEntry {
    method: PaymentMethod,
    /// `None` until the allocator first considers this method.
    charged: Option<Money>,
}

impl MethodEntry {
    fn open(&mut self) {
        self.charged.get_or_insert(Money::ZERO);
    }

    fn charge(&mut self, amount: Money) {
        *self.charged.get_or_insert(Money::ZERO) += amount;
    }
}

/// Single-use greedy allocator.
///
/// Orders live in an arena of slots that are emptied as orders get placed.
/// Methods are sorted by discount, highest first, once at construction.
#[derive(Debug)]
pub(crate) struct Allocator {
    orders: Vec<Option<Order>>,
    methods: Vec<MethodEntry>,
    points: Option<usize>,
    state: AllocatorState,
}

impl Allocator {
    pub(crate) fn new(
        orders: &[Order],
        methods: &[PaymentMethod],
    ) -> Result<Self, AllocationError> {
        if orders.is_empty() {
            return Err(AllocationError::InvalidInput(
                "Orders list cannot be empty".to_string(),
            ));
        }
        if methods.is_empty() {
            return Err(AllocationError::InvalidInput(
                "Payment methods list cannot be empty".to_string(),
            ));
        }

        let mut methods = methods.to_vec();
        // Stable: equal discounts keep their input order
        methods.sort_by(|a, b| b.discount().cmp(&a.discount()));
        let points = methods.iter().position(PaymentMethod::is_points);

        Ok(Self {
            orders: orders.iter().cloned().map(Some).collect(),
            methods: methods
                .into_iter()
                .map(|method| MethodEntry {
                    method,
                    charged: None,
                })
                .collect(),
            points,
            state: AllocatorState::Constructed,
        })
    }

    /// Runs both assignment phases. Only the first call does any work.
    pub(crate) fn optimize(&mut self) -> Result<Allocation, AllocationError> {
        if self.state != AllocatorState::Constructed {
            return Err(AllocationError::AlreadyOptimized);
        }
        self.state = AllocatorState::Optimizing;

        match self.run() {
            Ok(()) => {
                self.state = AllocatorState::Completed;
                Ok(self.allocation())
            }
            Err(e) => {
                self.state = AllocatorState::Failed;
                Err(e)
            }
        }
    }

    fn run(&mut self) -> Result<(), AllocationError> {
        for index in 0..self.methods.len() {
            self.assign_promoted(index);
        }
        let remaining = self.orders.iter().flatten().count();
        info!(remaining, "promotion pass finished");

        for slot in 0..self.orders.len() {
            let Some(order) = self.orders.get_mut(slot).and_then(Option::take) else {
                continue;
            };
            if self.assign_with_points(&order) || self.assign_full_price(&order) {
                continue;
            }
            warn!(order = order.id(), value = %order.value(), "no payment method can cover order");
            return Err(AllocationError::NoPaymentMethodAvailable {
                order_id: order.id().to_string(),
                value: order.value(),
            });
        }
        info!("residual pass finished");
        Ok(())
    }

    /// Spends the method at `index` on the largest promotion-eligible orders it can afford.
    ///
    /// Candidates are collected once. A candidate that no longer fits after
    /// earlier commits is dropped for good and the next smaller one is tried.
    fn assign_promoted(&mut self, index: usize) {
        let Some(entry) = self.methods.get_mut(index) else {
            return;
        };
        entry.open();

        let mut candidates: Vec<(usize, Money)> = self
            .orders
            .iter()
            .enumerate()
            .filter_map(|(slot, order)| order.as_ref().map(|order| (slot, order)))
            .filter(|(_, order)| {
                order.is_eligible_for(entry.method.id()) && order.value() <= entry.method.limit()
            })
            .map(|(slot, order)| (slot, order.value()))
            .collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        let mut worklist = VecDeque::from(candidates);

        while entry.method.limit().is_positive() {
            let Some((slot, value)) = worklist.pop_front() else {
                break;
            };
            if entry.method.limit() < value {
                continue;
            }

            let discounted = entry.method.apply_discount(value.value());
            entry.method.reduce_limit(discounted);
            entry.charge(discounted);
            if let Some(order) = self.orders.get_mut(slot).and_then(Option::take) {
                debug!(
                    order = order.id(),
                    method = entry.method.id(),
                    charged = %discounted,
                    "order paid with promotion"
                );
            }
        }
    }

    /// Pays 10% of the order with the points balance plus one other method.
    ///
    /// The whole remaining points balance is spent, not just the 10% share,
    /// so the part left for the other method is usually negative and any
    /// method with a non-negative limit accepts it.
    fn assign_with_points(&mut self, order: &Order) -> bool {
        let Some(points_index) = self.points else {
            return false;
        };
        let Some(balance) = self.methods.get(points_index).map(|e| e.method.limit()) else {
            return false;
        };
        let value = order.value().value();
        if balance.value() < value * POINTS_ADDITIONAL_DISCOUNT_THRESHOLD {
            return false;
        }

        let covered = order.value().scaled(POINTS_ADDITIONAL_DISCOUNT_THRESHOLD);
        let remainder = covered - balance;
        let Some(receiver_index) = self.find_receiver(remainder) else {
            return false;
        };

        if let Some(points) = self.methods.get_mut(points_index) {
            points.method.reduce_limit(balance);
            points.charge(balance);
        }
        if let Some(receiver) = self.methods.get_mut(receiver_index) {
            receiver.method.reduce_limit(remainder);
            let charged = receiver
                .method
                .apply_discount(value * POINTS_ADDITIONAL_DISCOUNT_PERCENT);
            receiver.charge(charged);
            debug!(
                order = order.id(),
                points = %balance,
                method = receiver.method.id(),
                charged = %charged,
                "order paid with points"
            );
        }
        true
    }

    fn assign_full_price(&mut self, order: &Order) -> bool {
        let Some(index) = self.find_receiver(order.value()) else {
            return false;
        };
        let Some(entry) = self.methods.get_mut(index) else {
            return false;
        };
        entry.method.reduce_limit(order.value());
        entry.charge(order.value());
        debug!(
            order = order.id(),
            method = entry.method.id(),
            charged = %order.value(),
            "order paid at full price"
        );
        true
    }

    /// First non-points method, in discount order, whose limit covers `amount`.
    fn find_receiver(&self, amount: Money) -> Option<usize> {
        self.methods
            .iter()
            .position(|e| !e.method.is_points() && e.method.limit() >= amount)
    }

    fn allocation(&self) -> Allocation {
        Allocation::new(
            self.methods
                .iter()
                .filter_map(|e| e.charged.map(|amount| (e.method.clone(), amount)))
                .collect(),
        )
    }
}
