#![allow(dead_code)]

use payopt::domain::money::Money;
use payopt::domain::order::Order;
use payopt::domain::payment_method::{POINTS_METHOD_ID, PaymentMethod};
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file.flush().unwrap();
    file
}

pub fn order(id: &str, value: Decimal, promotions: &[&str]) -> Order {
    Order::new(
        id,
        Money::new(value),
        promotions.iter().map(|p| p.to_string()).collect(),
    )
}

pub fn method(id: &str, discount: Decimal, limit: Decimal) -> PaymentMethod {
    PaymentMethod::new(id, discount, Money::new(limit))
}

/// Random payment methods with discounts up to 30%, optionally including points.
pub fn random_methods(rng: &mut StdRng, with_points: bool) -> Vec<PaymentMethod> {
    let count = rng.gen_range(1..=4);
    let mut methods: Vec<PaymentMethod> = (0..count)
        .map(|i| {
            PaymentMethod::new(
                format!("M{i}"),
                Decimal::new(rng.gen_range(0..=30), 2),
                Money::new(Decimal::new(rng.gen_range(0..=50_000), 2)),
            )
        })
        .collect();
    if with_points {
        let position = rng.gen_range(0..=methods.len());
        methods.insert(
            position,
            PaymentMethod::new(
                POINTS_METHOD_ID,
                Decimal::new(rng.gen_range(0..=30), 2),
                Money::new(Decimal::new(rng.gen_range(0..=5_000), 2)),
            ),
        );
    }
    methods
}

/// Random orders, each eligible for a random subset of `methods`.
pub fn random_orders(rng: &mut StdRng, methods: &[PaymentMethod]) -> Vec<Order> {
    let count = rng.gen_range(1..=8);
    (0..count)
        .map(|i| {
            let promotions = methods
                .iter()
                .filter(|_| rng.gen_bool(0.5))
                .map(|m| m.id().to_string())
                .collect();
            Order::new(
                format!("ORDER{i}"),
                Money::new(Decimal::new(rng.gen_range(0..=20_000), 2)),
                promotions,
            )
        })
        .collect()
}
