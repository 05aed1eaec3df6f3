//! A placed device instance.

use cb_catalog::{device_spec, DeviceRole, DeviceSpec};
use cb_core::ComponentId;

use crate::state::DeviceState;

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    /// Catalog key; immutable after creation.
    pub kind: String,
    /// Canvas position. Irrelevant to simulation correctness.
    pub x: f64,
    pub y: f64,
    pub state: DeviceState,
}

impl Component {
    /// Catalog entry for this instance, if the kind is known.
    pub fn spec(&self) -> Option<&'static DeviceSpec> {
        device_spec(&self.kind)
    }

    pub fn role(&self) -> Option<DeviceRole> {
        self.spec().map(|s| s.role)
    }
}
