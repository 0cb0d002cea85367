//! Builder API for creating tariffs.

use crate::tariff::error::TariffError;
use crate::tariff::Tariff;
use rust_decimal::Decimal;

/// Builder for creating validated tariffs.
///
/// Every field starts at the default tariff's value, so only the
/// amounts that differ need to be set.
///
/// # Example
///
/// ```rust
/// use oystercard::tariff::TariffBuilder;
/// use rust_decimal_macros::dec;
///
/// let tariff = TariffBuilder::new()
///     .standard_fare(dec!(2.80))
///     .penalty_fare(dec!(8.60))
///     .build()
///     .unwrap();
///
/// assert_eq!(tariff.penalty_fare(), dec!(8.60));
/// assert_eq!(tariff.maximum_balance(), dec!(90));
/// ```
#[derive(Debug, Clone)]
pub struct TariffBuilder {
    maximum_balance: Decimal,
    minimum_fare: Decimal,
    standard_fare: Decimal,
    penalty_fare: Decimal,
}

impl TariffBuilder {
    pub fn new() -> Self {
        let defaults = Tariff::default();
        Self {
            maximum_balance: defaults.maximum_balance,
            minimum_fare: defaults.minimum_fare,
            standard_fare: defaults.standard_fare,
            penalty_fare: defaults.penalty_fare,
        }
    }

    /// Set the balance ceiling enforced on top-up
    pub fn maximum_balance(mut self, amount: Decimal) -> Self {
        self.maximum_balance = amount;
        self
    }

    /// Set the balance floor required to touch in
    pub fn minimum_fare(mut self, amount: Decimal) -> Self {
        self.minimum_fare = amount;
        self
    }

    /// Set the fare charged for a complete journey
    pub fn standard_fare(mut self, amount: Decimal) -> Self {
        self.standard_fare = amount;
        self
    }

    /// Set the fare charged for an incomplete journey
    pub fn penalty_fare(mut self, amount: Decimal) -> Self {
        self.penalty_fare = amount;
        self
    }

    /// Build the tariff, rejecting inconsistent amounts.
    pub fn build(self) -> Result<Tariff, TariffError> {
        let tariff = Tariff {
            maximum_balance: self.maximum_balance,
            minimum_fare: self.minimum_fare,
            standard_fare: self.standard_fare,
            penalty_fare: self.penalty_fare,
        };
        tariff.validate()?;
        Ok(tariff)
    }
}

impl Default for TariffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builder_defaults_match_default_tariff() {
        let built = TariffBuilder::new().build().unwrap();
        assert_eq!(built, Tariff::default());
    }

    #[test]
    fn builder_sets_every_amount() {
        let tariff = TariffBuilder::new()
            .maximum_balance(dec!(120))
            .minimum_fare(dec!(2))
            .standard_fare(dec!(2.50))
            .penalty_fare(dec!(9))
            .build()
            .unwrap();

        assert_eq!(tariff.maximum_balance(), dec!(120));
        assert_eq!(tariff.minimum_fare(), dec!(2));
        assert_eq!(tariff.standard_fare(), dec!(2.50));
        assert_eq!(tariff.penalty_fare(), dec!(9));
    }

    #[test]
    fn negative_fare_is_rejected() {
        let result = TariffBuilder::new().standard_fare(dec!(-1)).build();
        assert_eq!(
            result,
            Err(TariffError::NegativeAmount {
                field: "standard_fare",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn zero_minimum_fare_is_rejected() {
        let result = TariffBuilder::new().minimum_fare(Decimal::ZERO).build();
        assert_eq!(
            result,
            Err(TariffError::NotPositive {
                field: "minimum_fare"
            })
        );
    }

    #[test]
    fn minimum_above_maximum_is_rejected() {
        let result = TariffBuilder::new()
            .maximum_balance(dec!(5))
            .minimum_fare(dec!(6))
            .build();
        assert!(matches!(
            result,
            Err(TariffError::MinimumAboveMaximum { .. })
        ));
    }

    #[test]
    fn penalty_below_standard_is_rejected() {
        let result = TariffBuilder::new()
            .standard_fare(dec!(3))
            .penalty_fare(dec!(2))
            .build();
        assert!(matches!(
            result,
            Err(TariffError::PenaltyBelowStandard { .. })
        ));
    }
}
