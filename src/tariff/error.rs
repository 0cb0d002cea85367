//! Tariff validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when building or loading a tariff.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TariffError {
    #[error("{field} must not be negative (got £{value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Minimum fare £{minimum_fare} exceeds maximum balance £{maximum_balance}")]
    MinimumAboveMaximum {
        minimum_fare: Decimal,
        maximum_balance: Decimal,
    },

    #[error("Penalty fare £{penalty_fare} is lower than standard fare £{standard_fare}")]
    PenaltyBelowStandard {
        penalty_fare: Decimal,
        standard_fare: Decimal,
    },

    /// The tariff document could not be parsed
    #[error("Tariff parse failed: {0}")]
    ParseFailed(String),
}
