//! Station identity.
//!
//! The travel core treats stations as opaque values. It never inspects
//! them beyond equality, so any serializable, comparable type will do:
//! a CRS code, a zone lookup handle, or a plain `String`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Marker trait for station identifiers.
///
/// Implemented automatically for every type that satisfies the bounds.
///
/// # Required Traits
///
/// - `Clone`: journeys keep their own copy of each station
/// - `PartialEq`: stations are compared, never inspected
/// - `Debug`: stations appear in diagnostics and log fields
/// - `Serialize` + `DeserializeOwned`: stations travel inside checkpoints
///
/// # Example
///
/// ```rust
/// use oystercard::core::Station;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Underground {
///     Aldgate,
///     Bank,
/// }
///
/// fn accepts<S: Station>(_station: S) {}
///
/// accepts(Underground::Aldgate);
/// accepts(String::from("Bank"));
/// ```
pub trait Station: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {}

impl<T> Station for T where T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {}
