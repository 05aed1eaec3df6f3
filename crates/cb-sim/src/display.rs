//! Per-device display queries.
//!
//! These are the pure functions the panel layer polls every render:
//! resolve the circuit, transform the source's quantity, and overlay the
//! jitter offset. A `None` is "not measuring", rendered as a dashed
//! placeholder, never an error.

use cb_catalog::DeviceRole;
use cb_core::ComponentId;
use cb_store::Snapshot;

use crate::fluctuation::Fluctuations;
use crate::resolve::{resolve, SourceRef};
use crate::transform::{transform, Measurement};

/// What a measuring device shows right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayReading {
    pub value: f64,
    pub unit: &'static str,
    pub mode: cb_catalog::MeterMode,
    pub frequency: f64,
    /// True when the value carries a live jitter offset.
    pub fluctuating: bool,
}

/// Resolve a measuring device's circuit and transform the source.
///
/// Returns the matched source alongside the true (un-jittered) reading.
pub fn resolved_reading(
    snap: &Snapshot<'_>,
    id: ComponentId,
) -> Option<(SourceRef, Measurement)> {
    let comp = snap.components.iter().find(|c| c.id == id)?;
    let spec = comp.spec()?;
    if spec.role != DeviceRole::Uuc {
        return None;
    }
    // A meter that is switched off displays nothing.
    if !comp.state.power() {
        return None;
    }

    let source_ref = resolve(id, spec.terminal_pairs, snap.components, snap.connections)?;
    let source = snap.components.iter().find(|c| c.id == source_ref.source)?;
    let measurement = transform(
        source,
        source_ref.auxiliary,
        snap.flags.loading_error,
        source_ref.wire_resistance,
        comp.state.meter_mode(),
    )?;
    Some((source_ref, measurement))
}

/// The true transformed reading, without jitter.
pub fn base_reading(snap: &Snapshot<'_>, id: ComponentId) -> Option<Measurement> {
    resolved_reading(snap, id).map(|(_, m)| m)
}

/// The displayed reading: true value plus the current jitter offset.
pub fn display_reading(
    snap: &Snapshot<'_>,
    id: ComponentId,
    fluctuations: &Fluctuations,
) -> Option<DisplayReading> {
    let m = base_reading(snap, id)?;
    let offset = fluctuations.offset(id);
    Some(DisplayReading {
        value: m.value + offset,
        unit: m.unit,
        mode: m.mode,
        frequency: m.frequency,
        fluctuating: fluctuations.is_active(id),
    })
}
