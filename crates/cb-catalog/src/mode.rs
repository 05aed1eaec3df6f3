//! Mode vocabularies and the fixed source→meter mapping.

use serde::{Deserialize, Serialize};

/// Output mode of a source (calibrator/generator) device.
///
/// The labels are what the source stores in its `mode` state field and
/// what its front panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceMode {
    #[serde(rename = "DC Voltage")]
    DcVoltage,
    #[serde(rename = "AC Voltage")]
    AcVoltage,
    #[serde(rename = "DC Current")]
    DcCurrent,
    #[serde(rename = "AC Current")]
    AcCurrent,
    #[serde(rename = "Resistance")]
    Resistance,
    #[serde(rename = "Capacitance")]
    Capacitance,
    #[serde(rename = "Frequency")]
    Frequency,
    #[serde(rename = "Temperature")]
    Temperature,
}

impl SourceMode {
    pub const ALL: [SourceMode; 8] = [
        SourceMode::DcVoltage,
        SourceMode::AcVoltage,
        SourceMode::DcCurrent,
        SourceMode::AcCurrent,
        SourceMode::Resistance,
        SourceMode::Capacitance,
        SourceMode::Frequency,
        SourceMode::Temperature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SourceMode::DcVoltage => "DC Voltage",
            SourceMode::AcVoltage => "AC Voltage",
            SourceMode::DcCurrent => "DC Current",
            SourceMode::AcCurrent => "AC Current",
            SourceMode::Resistance => "Resistance",
            SourceMode::Capacitance => "Capacitance",
            SourceMode::Frequency => "Frequency",
            SourceMode::Temperature => "Temperature",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.label() == label)
    }

    /// Whether this mode programs an alternating quantity (carries a
    /// meaningful frequency).
    pub fn is_ac(self) -> bool {
        matches!(self, SourceMode::AcVoltage | SourceMode::AcCurrent)
    }
}

/// Measurement function of a meter-style device.
///
/// This is the vocabulary the measuring instrument displays and the
/// tolerance tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterMode {
    #[serde(rename = "DC V")]
    DcV,
    #[serde(rename = "AC V")]
    AcV,
    #[serde(rename = "DC I")]
    DcI,
    #[serde(rename = "AC I")]
    AcI,
    #[serde(rename = "Ohms")]
    Ohms,
    #[serde(rename = "Capacitance")]
    Capacitance,
    #[serde(rename = "Frequency")]
    Frequency,
    #[serde(rename = "Temperature")]
    Temperature,
}

impl MeterMode {
    pub const ALL: [MeterMode; 8] = [
        MeterMode::DcV,
        MeterMode::AcV,
        MeterMode::DcI,
        MeterMode::AcI,
        MeterMode::Ohms,
        MeterMode::Capacitance,
        MeterMode::Frequency,
        MeterMode::Temperature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MeterMode::DcV => "DC V",
            MeterMode::AcV => "AC V",
            MeterMode::DcI => "DC I",
            MeterMode::AcI => "AC I",
            MeterMode::Ohms => "Ohms",
            MeterMode::Capacitance => "Capacitance",
            MeterMode::Frequency => "Frequency",
            MeterMode::Temperature => "Temperature",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.label() == label)
    }

    /// Display unit for a reading in this mode.
    pub fn unit(self) -> &'static str {
        match self {
            MeterMode::DcV | MeterMode::AcV => "V",
            MeterMode::DcI | MeterMode::AcI => "A",
            MeterMode::Ohms => "Ω",
            MeterMode::Capacitance => "F",
            MeterMode::Frequency => "Hz",
            MeterMode::Temperature => "°C",
        }
    }

    pub fn is_voltage(self) -> bool {
        matches!(self, MeterMode::DcV | MeterMode::AcV)
    }

    pub fn is_current(self) -> bool {
        matches!(self, MeterMode::DcI | MeterMode::AcI)
    }
}

/// Fixed translation from a source's mode to the meter vocabulary.
///
/// A complete circuit overrides whatever the meter's dial is set to; both
/// the displayed function and the tolerance lookup use this mapping.
pub fn map_source_mode(mode: SourceMode) -> MeterMode {
    match mode {
        SourceMode::DcVoltage => MeterMode::DcV,
        SourceMode::AcVoltage => MeterMode::AcV,
        SourceMode::DcCurrent => MeterMode::DcI,
        SourceMode::AcCurrent => MeterMode::AcI,
        SourceMode::Resistance => MeterMode::Ohms,
        SourceMode::Capacitance => MeterMode::Capacitance,
        SourceMode::Frequency => MeterMode::Frequency,
        SourceMode::Temperature => MeterMode::Temperature,
    }
}
