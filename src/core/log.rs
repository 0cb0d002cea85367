//! Journey history and the touch-in/touch-out state machine.
//!
//! The log owns every transition between travelling and not travelling.
//! Both penalty cases are closed out here: a double touch-in abandons the
//! open journey with no exit, and a touch-out with nothing open records a
//! journey with no entry.

use super::journey::Journey;
use super::station::Station;
use crate::tariff::Tariff;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether a journey is currently open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum TravelState<S: Station> {
    NotInJourney,
    InJourney(Journey<S>),
}

impl<S: Station> TravelState<S> {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotInJourney => "NotInJourney",
            Self::InJourney(_) => "InJourney",
        }
    }
}

impl<S: Station> Default for TravelState<S> {
    fn default() -> Self {
        Self::NotInJourney
    }
}

/// Ordered journey history plus the journey in progress, if any.
///
/// History is append-only; journeys appear in the order they were closed.
/// Each closed journey is charged under the log's tariff, so its
/// [`Journey::fare`] is the amount actually deducted for it.
///
/// # Example
///
/// ```rust
/// use oystercard::core::JourneyLog;
///
/// let mut log = JourneyLog::new();
///
/// // Double touch-in: the first journey is abandoned without an exit
/// assert!(log.start("Aldgate".to_string()).is_none());
/// let abandoned = log.start("Aldgate".to_string()).unwrap();
/// assert!(abandoned.exit_station().is_none());
///
/// let closed = log.finish("Bank".to_string());
/// assert!(closed.is_complete());
///
/// assert_eq!(log.history().len(), 2);
/// assert!(!log.is_in_journey());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct JourneyLog<S: Station> {
    state: TravelState<S>,
    history: Vec<Journey<S>>,
    tariff: Tariff,
}

impl<S: Station> Default for JourneyLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Station> JourneyLog<S> {
    /// Create an empty log with no journey open, priced under the default tariff.
    pub fn new() -> Self {
        Self::with_tariff(Tariff::default())
    }

    /// Create an empty log that charges closed journeys under `tariff`.
    pub fn with_tariff(tariff: Tariff) -> Self {
        Self {
            state: TravelState::NotInJourney,
            history: Vec::new(),
            tariff,
        }
    }

    pub(crate) fn from_parts(
        state: TravelState<S>,
        history: Vec<Journey<S>>,
        tariff: Tariff,
    ) -> Self {
        Self {
            state,
            history,
            tariff,
        }
    }

    /// Open a journey at `station`.
    ///
    /// If a journey was already open it is closed with no exit and pushed
    /// to history first; that abandoned journey is returned.
    pub fn start(&mut self, station: S) -> Option<&Journey<S>> {
        let previous = std::mem::replace(
            &mut self.state,
            TravelState::InJourney(Journey::new(station)),
        );

        match previous {
            TravelState::NotInJourney => None,
            TravelState::InJourney(mut abandoned) => {
                abandoned.charge(&self.tariff);
                debug!(entry = ?abandoned.entry_station(), "abandoning journey with no touch-out");
                self.history.push(abandoned);
                self.history.last()
            }
        }
    }

    /// Close the current journey at `station` and return it.
    ///
    /// With no journey open, an exit-only journey is recorded instead.
    pub fn finish(&mut self, station: S) -> &Journey<S> {
        let mut closed = match std::mem::take(&mut self.state) {
            TravelState::InJourney(mut journey) => {
                journey.finish(station);
                journey
            }
            TravelState::NotInJourney => {
                debug!(exit = ?station, "recording journey with no touch-in");
                Journey::exit_only(station)
            }
        };

        closed.charge(&self.tariff);
        self.history.push(closed);
        &self.history[self.history.len() - 1]
    }

    /// The most recently closed journey.
    pub fn latest(&self) -> Option<&Journey<S>> {
        self.history.last()
    }

    /// Fare charged for the most recently closed journey.
    pub fn latest_fare(&self) -> Option<Decimal> {
        self.latest().map(Journey::fare)
    }

    /// The open journey, if any.
    pub fn current(&self) -> Option<&Journey<S>> {
        match &self.state {
            TravelState::InJourney(journey) => Some(journey),
            TravelState::NotInJourney => None,
        }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn state(&self) -> &TravelState<S> {
        &self.state
    }

    pub fn is_in_journey(&self) -> bool {
        matches!(self.state, TravelState::InJourney(_))
    }

    /// All closed journeys in the order they were closed.
    pub fn history(&self) -> &[Journey<S>] {
        &self.history
    }
}
