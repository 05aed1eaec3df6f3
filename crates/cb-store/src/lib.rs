//! cb-store: canonical state store for the calibration bench.
//!
//! The store is the single writer for all placed devices, wires, and
//! global simulation flags. Mutations enter through [`Store::dispatch`]
//! as discrete [`Action`]s; reads go through [`Store::snapshot`]. Dispatch
//! is total: structurally valid input never panics, and a mutation that
//! cannot apply (missing id, rejected wire) is reported in the
//! [`Outcome`], not raised.

pub mod compliance;
pub mod component;
pub mod connection;
pub mod flags;
pub mod state;
pub mod store;
pub mod validate;

pub use compliance::ComplianceStatus;
pub use component::Component;
pub use connection::{Connection, WireKind, WireProperties};
pub use flags::{ErrorFlag, SimFlags};
pub use state::DeviceState;
pub use store::{Action, Outcome, Snapshot, Store};
pub use validate::{validate_connection, RejectReason};
