//! Resolution-uncertainty scheduler.
//!
//! While jitter is enabled and a measuring device has a live circuit, its
//! displayed value wanders around the true transformed value inside a
//! tolerance band. Each device owns one schedule: at randomized intervals
//! the offset is resampled; between resamples it holds.
//!
//! The engine is single threaded, so the schedule is an explicit clock
//! advanced by [`Fluctuations::tick`]; the front end pumps it once per
//! frame with the current time. The cadence is keyed by the identity of
//! the enabling condition (which source, which terminal pair): base value
//! or tolerance changes between resamples must not restart it, only a
//! real transition (mode toggle, wire connect/disconnect, power toggle)
//! does. When the condition goes false the slot is dropped and the
//! display reverts to the true value at once.

use std::collections::HashMap;

use cb_catalog::DeviceRole;
use cb_core::{BenchRng, ComponentId};
use cb_store::{Component, Snapshot};

use crate::display::resolved_reading;
use crate::transform::Measurement;

/// Bounds of the randomized resample interval, in seconds.
pub const MIN_RESAMPLE_DELAY_S: f64 = 1.0;
pub const MAX_RESAMPLE_DELAY_S: f64 = 2.0;

/// Identity of a device's enabling condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotKey {
    source: ComponentId,
    auxiliary: bool,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    key: SlotKey,
    next_at: f64,
    offset: f64,
}

/// Per-device fluctuation schedules.
#[derive(Debug)]
pub struct Fluctuations {
    slots: HashMap<ComponentId, Slot>,
    rng: BenchRng,
}

impl Fluctuations {
    pub fn new() -> Self {
        Self::with_rng(BenchRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(BenchRng::seeded(seed))
    }

    fn with_rng(rng: BenchRng) -> Self {
        Self {
            slots: HashMap::new(),
            rng,
        }
    }

    /// Advance every schedule to `now` (seconds, monotonic).
    ///
    /// Creates schedules for devices whose enabling condition just became
    /// true, resamples due offsets, and drops schedules whose condition
    /// went false or whose device no longer exists.
    pub fn tick(&mut self, now: f64, snap: &Snapshot<'_>) {
        if !snap.flags.resolution_active() {
            if !self.slots.is_empty() {
                tracing::debug!("resolution uncertainty disabled; dropping all schedules");
                self.slots.clear();
            }
            return;
        }

        for comp in snap.components {
            if comp.role() != Some(DeviceRole::Uuc) {
                continue;
            }
            match resolved_reading(snap, comp.id) {
                Some((source, measurement)) => {
                    let key = SlotKey {
                        source: source.source,
                        auxiliary: source.auxiliary,
                    };
                    self.advance_slot(now, comp, key, &measurement);
                }
                None => {
                    self.slots.remove(&comp.id);
                }
            }
        }

        // Schedules for removed devices would otherwise linger forever.
        self.slots
            .retain(|id, _| snap.components.iter().any(|c| c.id == *id));
    }

    fn advance_slot(&mut self, now: f64, comp: &Component, key: SlotKey, meas: &Measurement) {
        // A different circuit (or a reconnect) restarts the cadence; the
        // fresh schedule holds the true value until its first resample.
        let stale = self.slots.get(&comp.id).map_or(true, |slot| slot.key != key);
        if stale {
            let next_at = now + self.delay();
            self.slots.insert(
                comp.id,
                Slot {
                    key,
                    next_at,
                    offset: 0.0,
                },
            );
            return;
        }

        let due = self.slots.get(&comp.id).is_some_and(|slot| now >= slot.next_at);
        if !due {
            return;
        }

        let amplitude = meas.value.abs() * (effective_tolerance_pct(comp, meas) / 100.0);
        let offset = self.rng.uniform(-amplitude, amplitude);
        let next_at = now + self.delay();
        if let Some(slot) = self.slots.get_mut(&comp.id) {
            slot.offset = offset;
            slot.next_at = next_at;
        }
    }

    fn delay(&mut self) -> f64 {
        self.rng.uniform(MIN_RESAMPLE_DELAY_S, MAX_RESAMPLE_DELAY_S)
    }

    /// Current jitter offset for a device; 0 when no schedule is live.
    pub fn offset(&self, id: ComponentId) -> f64 {
        self.slots.get(&id).map_or(0.0, |s| s.offset)
    }

    /// Whether a device currently has a live schedule.
    pub fn is_active(&self, id: ComponentId) -> bool {
        self.slots.contains_key(&id)
    }
}

impl Default for Fluctuations {
    fn default() -> Self {
        Self::new()
    }
}

/// Tolerance percentage in effect for a device's current reading.
///
/// The catalog tolerance for the effective mode (the source's mapped mode
/// wins over the dial once a circuit is live), scaled by the device's
/// compliance label.
fn effective_tolerance_pct(comp: &Component, meas: &Measurement) -> f64 {
    let base = comp
        .spec()
        .and_then(|spec| spec.tolerance_pct(meas.mode))
        .unwrap_or(0.0);
    let scale = comp
        .state
        .compliance()
        .map_or(1.0, |status| status.tolerance_scale());
    base * scale
}
