//! The prepaid card: balance management and gatekeeping around travel.
//!
//! Travel state lives in the card's [`JourneyLog`]; the card adds the
//! balance rules on top. Touching in needs at least the minimum fare,
//! topping up may not exceed the maximum balance, and touching out is
//! always allowed. Penalty fares are deducted even when they take the
//! balance below zero.
//!
//! # Example
//!
//! ```rust
//! use oystercard::Card;
//! use oystercard::tariff::STANDARD_FARE;
//! use rust_decimal_macros::dec;
//!
//! let mut card = Card::new();
//! card.top_up(dec!(10)).unwrap();
//!
//! card.touch_in("Aldgate".to_string()).unwrap();
//! assert!(card.in_journey());
//!
//! card.touch_out("Bank".to_string());
//! assert!(!card.in_journey());
//! assert_eq!(card.balance(), dec!(10) - STANDARD_FARE);
//! ```

use crate::core::{Journey, JourneyLog, Station};
use crate::tariff::Tariff;
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub mod error;

pub use error::CardError;

/// A prepaid contactless transit card.
///
/// Each card is owned by a single caller; nothing here is synchronized.
#[derive(Clone, Debug, PartialEq)]
pub struct Card<S: Station> {
    pub(crate) balance: Decimal,
    pub(crate) entry_station: Option<S>,
    pub(crate) journey_log: JourneyLog<S>,
}

impl<S: Station> Default for Card<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Station> Card<S> {
    /// Create an empty card under the default tariff.
    pub fn new() -> Self {
        Self::with_tariff(Tariff::default())
    }

    /// Create an empty card under a custom tariff.
    pub fn with_tariff(tariff: Tariff) -> Self {
        Self {
            balance: Decimal::ZERO,
            entry_station: None,
            journey_log: JourneyLog::with_tariff(tariff),
        }
    }

    /// Add `amount` to the balance.
    ///
    /// Fails without changing the balance when `amount` is negative or the
    /// result would exceed the tariff's maximum balance.
    pub fn top_up(&mut self, amount: Decimal) -> Result<(), CardError> {
        if amount < Decimal::ZERO {
            return Err(CardError::InvalidTopUp { amount });
        }

        let limit = self.tariff().maximum_balance();
        let topped_up = match self.balance.checked_add(amount) {
            Some(total) if total <= limit => total,
            _ => {
                debug!(balance = %self.balance, %amount, %limit, "top-up rejected");
                return Err(CardError::BalanceLimitExceeded { limit });
            }
        };

        self.balance = topped_up;
        debug!(%amount, balance = %self.balance, "topped up");
        Ok(())
    }

    /// Start a journey at `station`.
    ///
    /// Touching in while already travelling abandons the open journey and
    /// charges its penalty fare before the new journey opens.
    pub fn touch_in(&mut self, station: S) -> Result<(), CardError> {
        let minimum = self.tariff().minimum_fare();
        if self.balance < minimum {
            debug!(balance = %self.balance, %minimum, "touch-in refused");
            return Err(CardError::InsufficientBalance { minimum });
        }

        let abandoned = self
            .journey_log
            .start(station.clone())
            .map(|journey| (journey.fare(), journey.entry_station().cloned()));

        if let Some((fare, abandoned_entry)) = abandoned {
            warn!(abandoned = ?abandoned_entry, %fare, "double touch-in, charging penalty");
            self.deduct(fare);
        }

        debug!(station = ?station, "touched in");
        self.entry_station = Some(station);
        Ok(())
    }

    /// End the current journey at `station`.
    ///
    /// Never fails: without a matching touch-in the penalty fare is charged.
    pub fn touch_out(&mut self, station: S) {
        let closed = self.journey_log.finish(station);
        let fare = closed.fare();

        if closed.is_complete() {
            debug!(exit = ?closed.exit_station(), %fare, "touched out");
        } else {
            warn!(exit = ?closed.exit_station(), %fare, "touch-out with no touch-in, charging penalty");
        }

        self.deduct(fare);
        self.entry_station = None;
    }

    /// Penalties are not bounded by the balance; the result saturates at `Decimal::MIN`.
    fn deduct(&mut self, fare: Decimal) {
        self.balance = self.balance.saturating_sub(fare);
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Entry station of the open journey.
    pub fn entry_station(&self) -> Option<&S> {
        self.entry_station.as_ref()
    }

    pub fn in_journey(&self) -> bool {
        self.journey_log.is_in_journey()
    }

    /// Closed journeys, oldest first.
    pub fn journey_history(&self) -> &[Journey<S>] {
        self.journey_log.history()
    }

    pub fn journey_log(&self) -> &JourneyLog<S> {
        &self.journey_log
    }

    pub fn tariff(&self) -> &Tariff {
        self.journey_log.tariff()
    }
}
