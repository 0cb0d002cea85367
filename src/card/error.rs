//! Card operation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by balance-guarded card operations.
///
/// Neither error is retryable as-is: the caller must change the amount
/// or top up before trying again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CardError {
    /// Top-up would push the balance over the tariff's ceiling
    #[error("Maximum balance of £{limit} exceeded!")]
    BalanceLimitExceeded { limit: Decimal },

    /// Balance is below the floor required to touch in
    #[error("Minimum balance for travel is £{minimum}")]
    InsufficientBalance { minimum: Decimal },

    /// Top-up amount was negative
    #[error("Top-up amount must not be negative (got £{amount})")]
    InvalidTopUp { amount: Decimal },
}
