use crate::domain::money::Money;
use thiserror::Error;

/// Failures raised by the allocation core.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No payment method available for order: {order_id} with value: {value}")]
    NoPaymentMethodAvailable { order_id: String, value: Money },
    #[error("Allocator has already been run")]
    AlreadyOptimized,
}

/// Failures turning JSON input into orders and payment methods.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot find json file {origin}!")]
    NotFound {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read json file of {origin}!")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse json file {origin}!")]
    Syntax {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid {field} '{raw}' for record {record} in {origin}")]
    InvalidField {
        origin: String,
        record: String,
        field: &'static str,
        raw: String,
    },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Cannot write allocation report: {0}")]
    Csv(#[from] csv::Error),
}
