//! Fare and balance configuration.
//!
//! A [`Tariff`] holds the four amounts the card enforces: the balance
//! ceiling, the balance floor needed to start travelling, and the fares
//! for complete and incomplete journeys. All amounts are pounds held as
//! [`Decimal`] so that pence never drift.
//!
//! # Example
//!
//! ```rust
//! use oystercard::tariff::Tariff;
//! use rust_decimal_macros::dec;
//!
//! let tariff = Tariff::from_json(
//!     r#"{
//!         "maximum_balance": "90",
//!         "minimum_fare": "1",
//!         "standard_fare": "2.40",
//!         "penalty_fare": "6"
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(tariff.standard_fare(), dec!(2.40));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod error;

pub use builder::TariffBuilder;
pub use error::TariffError;

/// Highest balance a card may hold after a top-up.
pub const MAXIMUM_BALANCE: Decimal = dec!(90);

/// Balance floor required to touch in.
pub const MINIMUM_FARE: Decimal = dec!(1);

/// Fare for a journey with both an entry and an exit.
pub const STANDARD_FARE: Decimal = dec!(1);

/// Fare for a journey missing its entry or its exit.
pub const PENALTY_FARE: Decimal = dec!(6);

/// Validated set of fares and balance limits.
///
/// Construct through [`TariffBuilder`], [`Tariff::from_json`] or
/// [`Tariff::default`]; each path guarantees the amounts are consistent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub(crate) maximum_balance: Decimal,
    pub(crate) minimum_fare: Decimal,
    pub(crate) standard_fare: Decimal,
    pub(crate) penalty_fare: Decimal,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            maximum_balance: MAXIMUM_BALANCE,
            minimum_fare: MINIMUM_FARE,
            standard_fare: STANDARD_FARE,
            penalty_fare: PENALTY_FARE,
        }
    }
}

impl Tariff {
    /// Parse a JSON tariff document and validate it.
    ///
    /// Amounts are decimal strings (`"2.40"`), matching how they serialize.
    pub fn from_json(json: &str) -> Result<Self, TariffError> {
        let tariff: Tariff =
            serde_json::from_str(json).map_err(|e| TariffError::ParseFailed(e.to_string()))?;
        tariff.validate()?;
        Ok(tariff)
    }

    pub fn maximum_balance(&self) -> Decimal {
        self.maximum_balance
    }

    pub fn minimum_fare(&self) -> Decimal {
        self.minimum_fare
    }

    pub fn standard_fare(&self) -> Decimal {
        self.standard_fare
    }

    pub fn penalty_fare(&self) -> Decimal {
        self.penalty_fare
    }

    /// Check the amounts are internally consistent.
    pub fn validate(&self) -> Result<(), TariffError> {
        let amounts = [
            ("maximum_balance", self.maximum_balance),
            ("minimum_fare", self.minimum_fare),
            ("standard_fare", self.standard_fare),
            ("penalty_fare", self.penalty_fare),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(TariffError::NegativeAmount { field, value });
            }
        }

        if self.maximum_balance.is_zero() {
            return Err(TariffError::NotPositive {
                field: "maximum_balance",
            });
        }
        if self.minimum_fare.is_zero() {
            return Err(TariffError::NotPositive {
                field: "minimum_fare",
            });
        }

        if self.minimum_fare > self.maximum_balance {
            return Err(TariffError::MinimumAboveMaximum {
                minimum_fare: self.minimum_fare,
                maximum_balance: self.maximum_balance,
            });
        }

        if self.penalty_fare < self.standard_fare {
            return Err(TariffError::PenaltyBelowStandard {
                penalty_fare: self.penalty_fare,
                standard_fare: self.standard_fare,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tariff_uses_constants() {
        let tariff = Tariff::default();
        assert_eq!(tariff.maximum_balance(), dec!(90));
        assert_eq!(tariff.minimum_fare(), dec!(1));
        assert_eq!(tariff.standard_fare(), dec!(1));
        assert_eq!(tariff.penalty_fare(), dec!(6));
        assert!(tariff.validate().is_ok());
    }

    #[test]
    fn from_json_parses_valid_document() {
        let tariff = Tariff::from_json(
            r#"{"maximum_balance":"50","minimum_fare":"1.50","standard_fare":"1.75","penalty_fare":"7"}"#,
        )
        .unwrap();

        assert_eq!(tariff.maximum_balance(), dec!(50));
        assert_eq!(tariff.minimum_fare(), dec!(1.50));
        assert_eq!(tariff.standard_fare(), dec!(1.75));
        assert_eq!(tariff.penalty_fare(), dec!(7));
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        let result = Tariff::from_json("{not json");
        assert!(matches!(result, Err(TariffError::ParseFailed(_))));
    }

    #[test]
    fn from_json_rejects_missing_field() {
        let result = Tariff::from_json(r#"{"maximum_balance":"90"}"#);
        assert!(matches!(result, Err(TariffError::ParseFailed(_))));
    }

    #[test]
    fn from_json_validates_amounts() {
        let result = Tariff::from_json(
            r#"{"maximum_balance":"90","minimum_fare":"1","standard_fare":"5","penalty_fare":"2"}"#,
        );
        assert!(matches!(
            result,
            Err(TariffError::PenaltyBelowStandard { .. })
        ));
    }

    #[test]
    fn tariff_serializes_correctly() {
        let tariff = Tariff::default();
        let json = serde_json::to_string(&tariff).unwrap();
        let restored = Tariff::from_json(&json).unwrap();
        assert_eq!(tariff, restored);
    }

    #[test]
    fn error_display() {
        let err = TariffError::NotPositive {
            field: "minimum_fare",
        };
        assert_eq!(err.to_string(), "minimum_fare must be greater than zero");

        let err = TariffError::PenaltyBelowStandard {
            penalty_fare: dec!(2),
            standard_fare: dec!(3),
        };
        assert_eq!(
            err.to_string(),
            "Penalty fare £2 is lower than standard fare £3"
        );
    }
}
