//! A single trip between an entry and an exit station.

use super::station::Station;
use crate::tariff::Tariff;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// One trip, complete or incomplete.
///
/// A journey always knows at least one of its stations: it is created
/// either by a touch-in ([`Journey::new`]) or by a touch-out with no
/// matching touch-in ([`Journey::exit_only`]). Once it has an exit it
/// is immutable.
///
/// # Example
///
/// ```rust
/// use oystercard::core::Journey;
/// use oystercard::tariff::{PENALTY_FARE, STANDARD_FARE};
///
/// let mut journey = Journey::new("Aldgate".to_string());
/// assert_eq!(journey.fare(), PENALTY_FARE);
///
/// journey.finish("Bank".to_string());
/// assert!(journey.is_complete());
/// assert_eq!(journey.fare(), STANDARD_FARE);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Journey<S: Station> {
    entry_station: Option<S>,
    exit_station: Option<S>,
    touched_in_at: Option<DateTime<Utc>>,
    touched_out_at: Option<DateTime<Utc>>,
    #[serde(default)]
    charged_fare: Option<Decimal>,
}

impl<S: Station> Journey<S> {
    /// Start a journey at `entry`.
    pub fn new(entry: S) -> Self {
        Self {
            entry_station: Some(entry),
            exit_station: None,
            touched_in_at: Some(Utc::now()),
            touched_out_at: None,
            charged_fare: None,
        }
    }

    /// Record a touch-out that had no matching touch-in.
    pub fn exit_only(exit: S) -> Self {
        Self {
            entry_station: None,
            exit_station: Some(exit),
            touched_in_at: None,
            touched_out_at: Some(Utc::now()),
            charged_fare: None,
        }
    }

    /// Complete the journey at `exit`.
    ///
    /// A journey that already has an exit is left untouched.
    pub fn finish(&mut self, exit: S) {
        if self.exit_station.is_some() {
            warn!(
                exit = ?exit,
                recorded_exit = ?self.exit_station,
                "ignoring finish on a journey that already has an exit"
            );
            return;
        }
        self.exit_station = Some(exit);
        self.touched_out_at = Some(Utc::now());
    }

    pub fn entry_station(&self) -> Option<&S> {
        self.entry_station.as_ref()
    }

    pub fn exit_station(&self) -> Option<&S> {
        self.exit_station.as_ref()
    }

    pub fn touched_in_at(&self) -> Option<DateTime<Utc>> {
        self.touched_in_at
    }

    pub fn touched_out_at(&self) -> Option<DateTime<Utc>> {
        self.touched_out_at
    }

    /// Both ends of the journey were recorded.
    pub fn is_complete(&self) -> bool {
        self.entry_station.is_some() && self.exit_station.is_some()
    }

    /// At least one station is recorded, which every constructed journey satisfies.
    pub(crate) fn has_station(&self) -> bool {
        self.entry_station.is_some() || self.exit_station.is_some()
    }

    /// Fare of this journey.
    ///
    /// Once the journey is closed this is the amount that was charged for
    /// it. A journey still open is priced under the default tariff.
    pub fn fare(&self) -> Decimal {
        self.charged_fare
            .unwrap_or_else(|| self.fare_under(&Tariff::default()))
    }

    /// Amount charged when the journey was closed.
    pub fn charged_fare(&self) -> Option<Decimal> {
        self.charged_fare
    }

    /// Price the journey under `tariff` and keep that price as its fare.
    pub(crate) fn charge(&mut self, tariff: &Tariff) -> Decimal {
        let fare = self.fare_under(tariff);
        self.charged_fare = Some(fare);
        fare
    }

    /// Fare under `tariff`: the standard fare when complete, otherwise the penalty fare.
    pub fn fare_under(&self, tariff: &Tariff) -> Decimal {
        if self.is_complete() {
            tariff.standard_fare()
        } else {
            tariff.penalty_fare()
        }
    }

    /// Time between touch-in and touch-out.
    ///
    /// Returns `None` unless both touches happened.
    pub fn duration(&self) -> Option<Duration> {
        match (self.touched_in_at, self.touched_out_at) {
            (Some(start), Some(end)) => end.signed_duration_since(start).to_std().ok(),
            _ => None,
        }
    }
}
