use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::error::LoadError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// Decimal written either as a JSON string (`"10.00"`, `"15%"`) or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DecimalField {
    Text(String),
    Number(serde_json::Number),
}

impl DecimalField {
    fn into_text(self) -> String {
        match self {
            DecimalField::Text(text) => text,
            DecimalField::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: String,
    value: DecimalField,
    promotions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PaymentMethodRecord {
    id: String,
    discount: DecimalField,
    limit: DecimalField,
}

/// Reads orders or payment methods from a JSON array.
///
/// `origin` names the source (usually a file path) in error messages.
pub struct JsonRecordReader<R: Read> {
    source: R,
    origin: String,
}

impl<R: Read> JsonRecordReader<R> {
    pub fn new(source: R, origin: impl Into<String>) -> Self {
        Self {
            source,
            origin: origin.into(),
        }
    }

    /// Parses the source as a list of orders, normalizing values to 2 decimals.
    pub fn orders(self) -> Result<Vec<Order>, LoadError> {
        let (records, origin) = self.records::<OrderRecord>()?;
        let orders = records
            .into_iter()
            .map(|record| -> Result<Order, LoadError> {
                let raw = record.value.into_text();
                let value = parse_decimal(&raw)
                    .filter(|value| *value >= Decimal::ZERO)
                    .and_then(Money::try_new)
                    .ok_or_else(|| invalid(&origin, &record.id, "value", &raw))?;
                Ok(Order::new(
                    record.id,
                    value,
                    record.promotions.unwrap_or_default(),
                ))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;
        debug!(origin = %origin, count = orders.len(), "orders loaded");
        Ok(orders)
    }

    /// Parses the source as a list of payment methods.
    ///
    /// Discounts are percentages (`"10"` or `"10%"` both mean 0.10) and limits
    /// are amounts; anything but digits and `.` is stripped from both first.
    /// Discounts above 100% and limits above
    /// [`MAX_AMOUNT`](crate::domain::money::MAX_AMOUNT) are rejected.
    pub fn payment_methods(self) -> Result<Vec<PaymentMethod>, LoadError> {
        let (records, origin) = self.records::<PaymentMethodRecord>()?;
        let methods = records
            .into_iter()
            .map(|record| -> Result<PaymentMethod, LoadError> {
                let raw_discount = record.discount.into_text();
                let discount = parse_decimal(&strip_non_numeric(&raw_discount))
                    .filter(|percentage| *percentage <= Decimal::ONE_HUNDRED)
                    .ok_or_else(|| invalid(&origin, &record.id, "discount", &raw_discount))?;
                let raw_limit = record.limit.into_text();
                let limit = parse_decimal(&strip_non_numeric(&raw_limit))
                    .and_then(Money::try_new)
                    .ok_or_else(|| invalid(&origin, &record.id, "limit", &raw_limit))?;
                Ok(PaymentMethod::new(
                    record.id,
                    percentage_to_rate(discount),
                    limit,
                ))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;
        debug!(origin = %origin, count = methods.len(), "payment methods loaded");
        Ok(methods)
    }

    fn records<T: DeserializeOwned>(self) -> Result<(Vec<T>, String), LoadError> {
        match serde_json::from_reader(self.source) {
            Ok(records) => Ok((records, self.origin)),
            Err(source) if source.is_io() => Err(LoadError::Io {
                origin: self.origin,
                source: source.into(),
            }),
            Err(source) => Err(LoadError::Syntax {
                origin: self.origin,
                source,
            }),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn strip_non_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn percentage_to_rate(percentage: Decimal) -> Decimal {
    (percentage / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn invalid(origin: &str, record: &str, field: &'static str, raw: &str) -> LoadError {
    LoadError::InvalidField {
        origin: origin.to_string(),
        record: record.to_string(),
        field,
        raw: raw.to_string(),
    }
}
