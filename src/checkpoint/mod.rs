//! Checkpoint and resume for cards.
//!
//! A checkpoint is a versioned, serializable snapshot of everything a
//! card holds. Where the bytes are kept is up to the caller; this module
//! only produces and validates them.
//!
//! # Example
//!
//! ```rust
//! use oystercard::checkpoint::CardCheckpoint;
//! use oystercard::Card;
//! use rust_decimal_macros::dec;
//!
//! let mut card = Card::new();
//! card.top_up(dec!(10)).unwrap();
//! card.touch_in("Aldgate".to_string()).unwrap();
//!
//! let bytes = card.checkpoint().to_binary().unwrap();
//! let restored = Card::resume(CardCheckpoint::from_binary(&bytes).unwrap()).unwrap();
//!
//! assert_eq!(restored.balance(), dec!(10));
//! assert_eq!(restored.entry_station(), Some(&"Aldgate".to_string()));
//! ```

use crate::card::Card;
use crate::core::{Journey, JourneyLog, Station, TravelState};
use crate::tariff::Tariff;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a card.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CardCheckpoint<S: Station> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub balance: Decimal,

    pub tariff: Tariff,

    /// Open journey, if the card was mid-trip
    pub state: TravelState<S>,

    /// Closed journeys, oldest first
    pub history: Vec<Journey<S>>,
}

impl<S: Station> CardCheckpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the snapshot describes a card this crate could have produced.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        self.tariff.validate()?;

        if self.balance > self.tariff.maximum_balance() {
            return Err(CheckpointError::ValidationFailed(format!(
                "balance £{} exceeds maximum £{}",
                self.balance,
                self.tariff.maximum_balance()
            )));
        }

        if let Some(index) = self.history.iter().position(|j| !j.has_station()) {
            return Err(CheckpointError::ValidationFailed(format!(
                "journey {index} has neither entry nor exit station"
            )));
        }

        if let TravelState::InJourney(open) = &self.state {
            if open.entry_station().is_none() || open.exit_station().is_some() {
                return Err(CheckpointError::ValidationFailed(
                    "open journey must have an entry and no exit".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl<S: Station> Card<S> {
    /// Snapshot the card's full state.
    pub fn checkpoint(&self) -> CardCheckpoint<S> {
        CardCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            balance: self.balance,
            tariff: self.tariff().clone(),
            state: self.journey_log.state().clone(),
            history: self.journey_log.history().to_vec(),
        }
    }

    /// Rebuild a card from a checkpoint.
    ///
    /// The entry-station mirror is derived from the restored travel state.
    pub fn resume(checkpoint: CardCheckpoint<S>) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, journeys = checkpoint.history.len(), "resuming card");

        let entry_station = match &checkpoint.state {
            TravelState::InJourney(open) => open.entry_station().cloned(),
            TravelState::NotInJourney => None,
        };

        Ok(Self {
            balance: checkpoint.balance,
            entry_station,
            journey_log: JourneyLog::from_parts(
                checkpoint.state,
                checkpoint.history,
                checkpoint.tariff,
            ),
        })
    }
}
