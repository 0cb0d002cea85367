//! Oystercard: a prepaid contactless transit card
//!
//! The card tracks a balance, enforces top-up and travel limits, and keeps
//! a history of every journey, including the incomplete ones that earn a
//! penalty fare.
//!
//! # Core Concepts
//!
//! - **Journey**: one trip, priced at the standard fare when complete and the
//!   penalty fare when its entry or exit is missing
//! - **JourneyLog**: the open journey plus append-only history
//! - **Card**: balance rules layered over the log
//! - **Tariff**: the configurable fares and balance limits
//! - **Checkpoint**: versioned snapshots for resuming a card elsewhere
//!
//! # Example
//!
//! ```rust
//! use oystercard::tariff::{PENALTY_FARE, STANDARD_FARE};
//! use oystercard::Card;
//! use rust_decimal_macros::dec;
//!
//! let mut card = Card::new();
//! card.top_up(dec!(10)).unwrap();
//!
//! // Missed touch-out: the first journey is closed with no exit
//! card.touch_in("Aldgate".to_string()).unwrap();
//! card.touch_in("Aldgate".to_string()).unwrap();
//! card.touch_out("Bank".to_string());
//!
//! let history = card.journey_history();
//! assert_eq!(history.len(), 2);
//! assert!(history[0].exit_station().is_none());
//! assert!(history[1].is_complete());
//! assert_eq!(card.balance(), dec!(10) - PENALTY_FARE - STANDARD_FARE);
//! ```

pub mod card;
pub mod checkpoint;
pub mod core;
pub mod tariff;

// Re-export commonly used types
pub use crate::card::{Card, CardError};
pub use crate::core::{Journey, JourneyLog, Station, TravelState};
pub use crate::tariff::{Tariff, TariffBuilder};
