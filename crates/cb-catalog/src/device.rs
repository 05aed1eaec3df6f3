//! Device specifications.
//!
//! Each placeable instrument is described entirely by data: its role, the
//! terminal pairs it can measure through, its per-mode tolerance table,
//! and the state template it is seeded from. The instrument roster mirrors
//! a small calibration lab: a multi-product calibrator, a waveform
//! generator, two bench multimeters, a universal counter, a
//! thermo-hygrometer, and a spectrum analyzer.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mode::MeterMode;
use crate::StateMap;

/// Role a device plays on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRole {
    /// Signal/quantity source with an output terminal.
    Calibrator,
    /// Unit under calibration: a measuring instrument with input terminals.
    Uuc,
    /// Display-only instrument; takes no bench wiring.
    Analyzer,
}

/// Terminal tag carried by a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Hi,
    Lo,
    AuxHi,
    AuxLo,
    Clamp,
    Fiber,
    Marker,
}

/// A two-terminal input pair a measuring device can resolve a circuit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPair {
    pub primary: Polarity,
    pub secondary: Polarity,
    /// Auxiliary pairs reinterpret the reading as current (the current
    /// sense terminals on a multimeter).
    pub auxiliary: bool,
}

/// Condition under which a source is actively outputting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputGate {
    /// Calibrator front panel: `power` and `output` (OPR) both on.
    Output,
    /// Generator front panel: `power` and `rfOn` both on.
    RfOn,
}

/// Static description of one device kind.
#[derive(Debug, Clone, Copy)]
pub struct DeviceSpec {
    /// Catalog key, referenced by `Component::kind` and bench files.
    pub kind: &'static str,
    /// Human-readable label for panels and listings.
    pub label: &'static str,
    pub role: DeviceRole,
    /// How this device gates its output (meaningful for sources only).
    pub output_gate: OutputGate,
    /// Input pairs in resolution order: primary pair first.
    pub terminal_pairs: &'static [TerminalPair],
    /// Per-mode reading tolerance, in percent of reading.
    pub tolerances: &'static [(MeterMode, f64)],
}

impl DeviceSpec {
    pub fn tolerance_pct(&self, mode: MeterMode) -> Option<f64> {
        self.tolerances
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, pct)| *pct)
    }

    /// Seed state for a freshly placed instance.
    pub fn initial_state(&self) -> StateMap {
        let value = match self.kind {
            "mpc5522" => json!({
                "power": false,
                "output": false,
                "mode": "DC Voltage",
                "value": 0.0,
                "unit": "V",
                "frequency": 50.0,
            }),
            "wg33500" => json!({
                "power": false,
                "rfOn": false,
                "mode": "AC Voltage",
                "value": 0.1,
                "unit": "V",
                "frequency": 1000.0,
            }),
            "dmm8846" | "dmm34401" => json!({
                "power": false,
                "mode": "DC V",
                "value": 0.0,
                "unit": "V",
            }),
            "counter53131" => json!({
                "power": false,
                "mode": "Frequency",
                "value": 0.0,
                "unit": "Hz",
            }),
            "hygro1620" => json!({
                "power": true,
                "mode": "Temperature",
                "value": 0.0,
                "unit": "°C",
            }),
            "sa1996" => json!({
                "power": false,
                "mode": "Frequency",
                "value": 0.0,
                "unit": "Hz",
            }),
            _ => json!({ "power": false }),
        };
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!("initial state templates are objects"),
        }
    }
}

const DMM_PAIRS: &[TerminalPair] = &[
    TerminalPair {
        primary: Polarity::Hi,
        secondary: Polarity::Lo,
        auxiliary: false,
    },
    TerminalPair {
        primary: Polarity::AuxHi,
        secondary: Polarity::AuxLo,
        auxiliary: true,
    },
];

const HI_LO_PAIR: &[TerminalPair] = &[TerminalPair {
    primary: Polarity::Hi,
    secondary: Polarity::Lo,
    auxiliary: false,
}];

const DMM8846_TOL: &[(MeterMode, f64)] = &[
    (MeterMode::DcV, 0.0024),
    (MeterMode::AcV, 0.06),
    (MeterMode::DcI, 0.05),
    (MeterMode::AcI, 0.1),
    (MeterMode::Ohms, 0.01),
    (MeterMode::Capacitance, 1.0),
    (MeterMode::Frequency, 0.01),
    (MeterMode::Temperature, 0.06),
];

const DMM34401_TOL: &[(MeterMode, f64)] = &[
    (MeterMode::DcV, 0.0035),
    (MeterMode::AcV, 0.06),
    (MeterMode::DcI, 0.05),
    (MeterMode::AcI, 0.1),
    (MeterMode::Ohms, 0.01),
    (MeterMode::Frequency, 0.01),
];

const COUNTER_TOL: &[(MeterMode, f64)] = &[(MeterMode::Frequency, 0.001)];

const HYGRO_TOL: &[(MeterMode, f64)] = &[(MeterMode::Temperature, 0.5)];

/// The built-in instrument roster.
pub const DEVICES: &[DeviceSpec] = &[
    DeviceSpec {
        kind: "mpc5522",
        label: "Multi-Product Calibrator",
        role: DeviceRole::Calibrator,
        output_gate: OutputGate::Output,
        terminal_pairs: &[],
        tolerances: &[],
    },
    DeviceSpec {
        kind: "wg33500",
        label: "Waveform Generator",
        role: DeviceRole::Calibrator,
        output_gate: OutputGate::RfOn,
        terminal_pairs: &[],
        tolerances: &[],
    },
    DeviceSpec {
        kind: "dmm8846",
        label: "6½-Digit Multimeter",
        role: DeviceRole::Uuc,
        output_gate: OutputGate::Output,
        terminal_pairs: DMM_PAIRS,
        tolerances: DMM8846_TOL,
    },
    DeviceSpec {
        kind: "dmm34401",
        label: "Bench Multimeter",
        role: DeviceRole::Uuc,
        output_gate: OutputGate::Output,
        terminal_pairs: DMM_PAIRS,
        tolerances: DMM34401_TOL,
    },
    DeviceSpec {
        kind: "counter53131",
        label: "Universal Counter",
        role: DeviceRole::Uuc,
        output_gate: OutputGate::Output,
        terminal_pairs: HI_LO_PAIR,
        tolerances: COUNTER_TOL,
    },
    DeviceSpec {
        kind: "hygro1620",
        label: "Thermo-Hygrometer",
        role: DeviceRole::Uuc,
        output_gate: OutputGate::Output,
        terminal_pairs: HI_LO_PAIR,
        tolerances: HYGRO_TOL,
    },
    DeviceSpec {
        kind: "sa1996",
        label: "Spectrum Analyzer",
        role: DeviceRole::Analyzer,
        output_gate: OutputGate::Output,
        terminal_pairs: &[],
        tolerances: &[],
    },
];

/// Look up a device kind in the catalog.
pub fn device_spec(kind: &str) -> Option<&'static DeviceSpec> {
    DEVICES.iter().find(|d| d.kind == kind)
}
