//! cb-core: stable foundation for the calibration bench.
//!
//! Contains:
//! - ids (monotonic component identifiers)
//! - error (shared error types)
//! - rng (seedable random source used by tagging and fluctuation)

pub mod error;
pub mod ids;
pub mod rng;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CbError, CbResult};
pub use ids::ComponentId;
pub use rng::BenchRng;
