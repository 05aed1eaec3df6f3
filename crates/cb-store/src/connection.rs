//! Wires between device terminals.

use cb_catalog::Polarity;
use cb_core::ComponentId;
use serde::{Deserialize, Serialize};

/// Resistance of one standard bench lead, in ohms.
pub const STANDARD_WIRE_OHMS: f64 = 0.05;
/// Resistance of one degraded ("bad") lead, in ohms.
pub const BAD_WIRE_OHMS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireKind {
    Standard,
    Bad,
}

impl WireKind {
    pub fn resistance(self) -> f64 {
        match self {
            WireKind::Standard => STANDARD_WIRE_OHMS,
            WireKind::Bad => BAD_WIRE_OHMS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireProperties {
    pub kind: WireKind,
    /// Lead resistance in ohms. Kept alongside `kind` to match the
    /// persisted format; the two are updated together.
    pub resistance: f64,
}

impl WireProperties {
    pub fn standard() -> Self {
        Self {
            kind: WireKind::Standard,
            resistance: STANDARD_WIRE_OHMS,
        }
    }

    pub fn bad() -> Self {
        Self {
            kind: WireKind::Bad,
            resistance: BAD_WIRE_OHMS,
        }
    }

    /// Flip between standard and bad lead. A first-class mutation: the
    /// wire keeps its endpoints and polarity.
    pub fn toggle(&mut self) {
        *self = match self.kind {
            WireKind::Standard => Self::bad(),
            WireKind::Bad => Self::standard(),
        };
    }
}

impl Default for WireProperties {
    fn default() -> Self {
        Self::standard()
    }
}

/// A directed wire from a source output to a sink input terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub from: ComponentId,
    pub to: ComponentId,
    pub polarity: Polarity,
    pub wire: WireProperties,
}
