//! cb-catalog: static device catalog for the calibration bench.
//!
//! Everything in here is data: device roles, mode vocabularies and the
//! fixed source→meter mode mapping, terminal pair sets, per-mode tolerance
//! tables, and the initial state template each device is seeded from.
//! The engine configures itself per device from this data only; there is
//! no per-device code anywhere else.

pub mod device;
pub mod mode;

pub use device::{
    device_spec, DeviceRole, DeviceSpec, OutputGate, Polarity, TerminalPair, DEVICES,
};
pub use mode::{map_source_mode, MeterMode, SourceMode};

/// Open per-device state bag, keyed by the original application's
/// camelCase field names (`power`, `rfOn`, `complianceStatus`, ...).
pub type StateMap = serde_json::Map<String, serde_json::Value>;
