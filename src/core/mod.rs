//! Pure travel core.
//!
//! This module contains the touch-in/touch-out state machine:
//! - Station identity via the `Station` trait
//! - Single trips and their fares via `Journey`
//! - Open journey tracking and append-only history via `JourneyLog`
//!
//! Nothing here knows about balances; the card layers those on top.

mod journey;
mod log;
mod station;

pub use journey::Journey;
pub use log::{JourneyLog, TravelState};
pub use station::Station;
