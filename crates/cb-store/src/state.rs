//! Per-device state bag.
//!
//! Device state is an open map of device-specific fields, owned by the
//! store and mutated only through merge-updates. Typed accessors decode
//! the handful of fields the engine itself cares about; panels are free
//! to stash anything else in here and have it round-trip.

use cb_catalog::{MeterMode, SourceMode, StateMap};
use serde_json::Value;

use crate::compliance::ComplianceStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState(StateMap);

impl DeviceState {
    pub fn from_map(map: StateMap) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &StateMap {
        &self.0
    }

    /// Merge a partial update into the state.
    ///
    /// Each key in the patch overwrites the existing value; an explicit
    /// `null` removes the key. The map is never replaced wholesale.
    pub fn merge(&mut self, patch: &StateMap) {
        for (key, value) in patch {
            if value.is_null() {
                self.0.remove(key);
            } else {
                self.0.insert(key.clone(), value.clone());
            }
        }
    }

    fn bool_field(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    fn f64_field(&self, key: &str) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn power(&self) -> bool {
        self.bool_field("power")
    }

    pub fn output(&self) -> bool {
        self.bool_field("output")
    }

    pub fn rf_on(&self) -> bool {
        self.bool_field("rfOn")
    }

    /// Programmed amplitude (sources) or last set reading (meters).
    pub fn value(&self) -> f64 {
        self.f64_field("value")
    }

    /// Programmed output frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.f64_field("frequency")
    }

    /// The `mode` field decoded as a source mode label.
    pub fn source_mode(&self) -> Option<SourceMode> {
        self.str_field("mode").and_then(SourceMode::from_label)
    }

    /// The `mode` field decoded as a meter dial setting.
    pub fn meter_mode(&self) -> Option<MeterMode> {
        self.str_field("mode").and_then(MeterMode::from_label)
    }

    pub fn compliance(&self) -> Option<ComplianceStatus> {
        self.str_field("complianceStatus")
            .and_then(ComplianceStatus::from_str)
    }

    pub fn set_compliance(&mut self, status: ComplianceStatus) {
        self.0.insert(
            "complianceStatus".to_string(),
            Value::String(status.as_str().to_string()),
        );
    }
}
