//! cb-sim: signal propagation and measurement simulation.
//!
//! Pure read-side of the bench: given a store snapshot, resolve which
//! powered source feeds a measuring device ([`resolve`]), translate the
//! programmed quantity into the meter's displayed reading
//! ([`transform`]), and overlay resolution-uncertainty jitter
//! ([`Fluctuations`]). Nothing in this crate mutates the store.

pub mod display;
pub mod fluctuation;
pub mod resolve;
pub mod transform;

pub use display::{base_reading, display_reading, DisplayReading};
pub use fluctuation::{Fluctuations, MAX_RESAMPLE_DELAY_S, MIN_RESAMPLE_DELAY_S};
pub use resolve::{resolve, SourceRef};
pub use transform::{transform, Measurement, METER_INPUT_IMPEDANCE_OHMS};
