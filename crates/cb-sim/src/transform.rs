//! Measurement transform.
//!
//! Maps a resolved source's programmed quantity into the reading the
//! sink displays: fixed mode mapping, wire-loading correction, auxiliary
//! current reinterpretation, and the Hz-display special case.

use cb_catalog::{map_source_mode, MeterMode, OutputGate};
use cb_store::Component;

/// Assumed meter input impedance, in ohms.
///
/// Fixed at 10 MΩ for every meter on the bench; the loading correction
/// for voltage readings is `programmed * Rmeter / (Rmeter + Rwire)`.
pub const METER_INPUT_IMPEDANCE_OHMS: f64 = 1.0e7;

/// Lead resistance above which current readings pick up a burden-voltage
/// derating.
const BURDEN_THRESHOLD_OHMS: f64 = 1.0;
const BURDEN_DERATING: f64 = 0.9995;

/// A reading produced from a complete circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: &'static str,
    /// Effective measurement function. A complete circuit overrides the
    /// meter's own dial.
    pub mode: MeterMode,
    /// Source frequency in Hz for alternating quantities, 0 otherwise.
    pub frequency: f64,
}

/// Translate a resolved source into the sink's displayed reading.
///
/// Returns `None` when the source is not actively outputting (the
/// role-specific gate: `power && output` for a calibrator, `power &&
/// rfOn` for a generator) or when its programmed state does not decode.
///
/// `selected_mode` is the sink's own dial setting; it only matters for
/// the Hz display special case.
pub fn transform(
    source: &Component,
    auxiliary: bool,
    loading_error: bool,
    wire_resistance: f64,
    selected_mode: Option<MeterMode>,
) -> Option<Measurement> {
    let spec = source.spec()?;

    if !source.state.power() {
        return None;
    }
    let outputting = match spec.output_gate {
        OutputGate::Output => source.state.output(),
        OutputGate::RfOn => source.state.rf_on(),
    };
    if !outputting {
        return None;
    }

    let source_mode = source.state.source_mode()?;
    let programmed = source.state.value();
    if !programmed.is_finite() {
        return None;
    }
    let frequency = if source.state.frequency().is_finite() {
        source.state.frequency()
    } else {
        0.0
    };

    // Auxiliary current-sense terminals read amps regardless of what the
    // source reports generically.
    let mode = if auxiliary {
        if source_mode.is_ac() {
            MeterMode::AcI
        } else {
            MeterMode::DcI
        }
    } else {
        map_source_mode(source_mode)
    };

    // Hz display: a meter dialed to frequency shows the source's
    // programmed frequency for an AC quantity, and 0 for DC.
    if selected_mode == Some(MeterMode::Frequency) {
        match mode {
            MeterMode::AcV | MeterMode::AcI => {
                return Some(Measurement {
                    value: frequency,
                    unit: MeterMode::Frequency.unit(),
                    mode: MeterMode::Frequency,
                    frequency,
                });
            }
            MeterMode::DcV | MeterMode::DcI => {
                return Some(Measurement {
                    value: 0.0,
                    unit: MeterMode::Frequency.unit(),
                    mode: MeterMode::Frequency,
                    frequency: 0.0,
                });
            }
            _ => {}
        }
    }

    let value = if loading_error {
        apply_loading(mode, programmed, wire_resistance)
    } else {
        programmed
    };

    Some(Measurement {
        value,
        unit: mode.unit(),
        mode,
        frequency: if source_mode.is_ac() { frequency } else { 0.0 },
    })
}

/// Wire-loading correction per measurement function.
fn apply_loading(mode: MeterMode, programmed: f64, wire_resistance: f64) -> f64 {
    match mode {
        // Divider against the meter's input impedance.
        MeterMode::DcV | MeterMode::AcV => {
            programmed * (METER_INPUT_IMPEDANCE_OHMS / (METER_INPUT_IMPEDANCE_OHMS + wire_resistance))
        }
        // Two-wire measurement: lead resistance adds directly.
        MeterMode::Ohms => programmed + wire_resistance,
        // Burden voltage only matters for clearly degraded leads.
        MeterMode::DcI | MeterMode::AcI => {
            if wire_resistance > BURDEN_THRESHOLD_OHMS {
                programmed * BURDEN_DERATING
            } else {
                programmed
            }
        }
        _ => programmed,
    }
}
