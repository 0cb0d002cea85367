//! Errors raised while saving or restoring card snapshots.

use crate::tariff::TariffError;
use thiserror::Error;

/// Why a card snapshot could not be written or restored.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be encoded as JSON or bincode
    #[error("Card snapshot encoding failed: {0}")]
    SerializationFailed(String),

    /// The bytes or text are not a card snapshot
    #[error("Card snapshot decoding failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot was written by a different snapshot format
    #[error("Card snapshot format {found} cannot be resumed (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot describes a card no sequence of touches could produce,
    /// such as a balance over the tariff maximum or a stationless journey
    #[error("Card snapshot is inconsistent: {0}")]
    ValidationFailed(String),

    /// Snapshot carries fares or limits that fail tariff validation
    #[error("Card snapshot tariff is invalid: {0}")]
    InvalidTariff(#[from] TariffError),
}
