//! The store itself: actions, dispatch, snapshot.

use cb_catalog::{device_spec, DeviceRole, Polarity, StateMap};
use cb_core::{BenchRng, ComponentId};

use crate::compliance::{self, random_status};
use crate::component::Component;
use crate::connection::{Connection, WireProperties};
use crate::flags::{ErrorFlag, SimFlags};
use crate::state::DeviceState;
use crate::validate::{validate_connection, RejectReason};

/// A discrete mutation of bench state.
#[derive(Debug, Clone)]
pub enum Action {
    AddComponent { kind: String, x: f64, y: f64 },
    RemoveComponent { id: ComponentId },
    MoveComponent { id: ComponentId, x: f64, y: f64 },
    /// Merge a partial state update into one device's state map.
    UpdateState { id: ComponentId, patch: StateMap },
    AddConnection {
        from: ComponentId,
        to: ComponentId,
        polarity: Polarity,
    },
    RemoveConnection { index: usize },
    ToggleWireKind { index: usize },
    ToggleUncertainty,
    ToggleErrorFlag(ErrorFlag),
    /// Replace all bench content, e.g. when a project file is opened.
    LoadSnapshot {
        components: Vec<Component>,
        connections: Vec<Connection>,
    },
    Clear,
}

/// Result of a dispatch. Dispatch itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// `AddComponent` reports the freshly assigned id.
    Added(ComponentId),
    /// A wire was refused by the validator; nothing changed. The reason
    /// is surfaced to the user as a transient notification.
    Rejected(RejectReason),
    /// Structurally valid input referencing nothing (stale id, index out
    /// of range, unknown device kind); nothing changed.
    Ignored,
}

/// Read-only view of the bench, valid until the next dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub components: &'a [Component],
    pub connections: &'a [Connection],
    pub flags: SimFlags,
}

/// Canonical, single-writer store of the bench.
#[derive(Debug)]
pub struct Store {
    components: Vec<Component>,
    connections: Vec<Connection>,
    flags: SimFlags,
    /// Strictly increasing; never reused within a session.
    next_id: u64,
    rng: BenchRng,
}

impl Store {
    pub fn new() -> Self {
        Self::with_rng(BenchRng::from_entropy())
    }

    /// Store with a deterministic random stream (compliance tagging).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(BenchRng::seeded(seed))
    }

    fn with_rng(rng: BenchRng) -> Self {
        Self {
            components: Vec::new(),
            connections: Vec::new(),
            flags: SimFlags::default(),
            next_id: 0,
            rng,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            components: &self.components,
            connections: &self.connections,
            flags: self.flags,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn flags(&self) -> SimFlags {
        self.flags
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Apply one action. Synchronous and total: every structurally valid
    /// action returns an [`Outcome`] without panicking, and the effects
    /// are visible to the very next read.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::AddComponent { kind, x, y } => self.add_component(kind, x, y),
            Action::RemoveComponent { id } => self.remove_component(id),
            Action::MoveComponent { id, x, y } => self.move_component(id, x, y),
            Action::UpdateState { id, patch } => self.update_state(id, &patch),
            Action::AddConnection { from, to, polarity } => {
                self.add_connection(from, to, polarity)
            }
            Action::RemoveConnection { index } => self.remove_connection(index),
            Action::ToggleWireKind { index } => self.toggle_wire_kind(index),
            Action::ToggleUncertainty => self.toggle_uncertainty(),
            Action::ToggleErrorFlag(flag) => self.toggle_error_flag(flag),
            Action::LoadSnapshot {
                components,
                connections,
            } => self.load_snapshot(components, connections),
            Action::Clear => self.clear(),
        }
    }

    fn add_component(&mut self, kind: String, x: f64, y: f64) -> Outcome {
        let Some(spec) = device_spec(&kind) else {
            tracing::warn!(kind, "add_component: unknown device kind");
            return Outcome::Ignored;
        };

        let Some(next) = self.next_id.checked_add(1) else {
            tracing::warn!("add_component: id space exhausted");
            return Outcome::Ignored;
        };
        let id = ComponentId::new(self.next_id);
        self.next_id = next;

        let mut state = DeviceState::from_map(spec.initial_state());
        if self.flags.uncertainty_mode && spec.role == DeviceRole::Uuc {
            state.set_compliance(random_status(&mut self.rng));
        }

        self.components.push(Component { id, kind, x, y, state });
        Outcome::Added(id)
    }

    fn remove_component(&mut self, id: ComponentId) -> Outcome {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        if self.components.len() == before {
            return Outcome::Ignored;
        }
        // Cascade: drop every wire touching the removed device.
        self.connections.retain(|c| c.from != id && c.to != id);
        Outcome::Applied
    }

    fn move_component(&mut self, id: ComponentId, x: f64, y: f64) -> Outcome {
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(comp) => {
                comp.x = x;
                comp.y = y;
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }

    fn update_state(&mut self, id: ComponentId, patch: &StateMap) -> Outcome {
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(comp) => {
                comp.state.merge(patch);
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }

    fn add_connection(&mut self, from: ComponentId, to: ComponentId, polarity: Polarity) -> Outcome {
        if let Err(reason) =
            validate_connection(from, to, polarity, &self.components, &self.connections)
        {
            tracing::debug!(%from, %to, ?polarity, %reason, "wire rejected");
            return Outcome::Rejected(reason);
        }
        self.connections.push(Connection {
            from,
            to,
            polarity,
            wire: WireProperties::standard(),
        });
        Outcome::Applied
    }

    fn remove_connection(&mut self, index: usize) -> Outcome {
        if index >= self.connections.len() {
            return Outcome::Ignored;
        }
        self.connections.remove(index);
        Outcome::Applied
    }

    fn toggle_wire_kind(&mut self, index: usize) -> Outcome {
        match self.connections.get_mut(index) {
            Some(conn) => {
                conn.wire.toggle();
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }

    fn toggle_uncertainty(&mut self) -> Outcome {
        self.flags.uncertainty_mode = !self.flags.uncertainty_mode;
        if self.flags.uncertainty_mode {
            // Off→on: every UUC gets a fresh random label. Toggling off
            // leaves existing labels in place.
            compliance::retag_all(&mut self.components, &mut self.rng);
        }
        Outcome::Applied
    }

    fn toggle_error_flag(&mut self, flag: ErrorFlag) -> Outcome {
        match flag {
            ErrorFlag::LoadingError => self.flags.loading_error = !self.flags.loading_error,
            ErrorFlag::ResolutionUncertainty => {
                self.flags.resolution_uncertainty = !self.flags.resolution_uncertainty
            }
            ErrorFlag::InstrumentError => {
                self.flags.instrument_error = !self.flags.instrument_error
            }
        }
        Outcome::Applied
    }

    fn load_snapshot(
        &mut self,
        mut components: Vec<Component>,
        mut connections: Vec<Connection>,
    ) -> Outcome {
        // A component at the very top of the id range would leave no room
        // for fresh ids. Such a record is malformed persisted state and is
        // dropped, together with its wires, like any other.
        components.retain(|c| {
            let keep = c.id.raw().checked_add(1).is_some();
            if !keep {
                tracing::warn!(id = %c.id, "load: component id exhausts the id space; dropped");
            }
            keep
        });
        connections.retain(|w| {
            components.iter().any(|c| c.id == w.from) && components.iter().any(|c| c.id == w.to)
        });

        // Counter restarts above the highest loaded id so ids stay unique
        // across persistence round-trips.
        self.next_id = components
            .iter()
            .map(|c| c.id.raw())
            .max()
            .map_or(0, |max| max + 1);
        self.components = components;
        self.connections = connections;
        Outcome::Applied
    }

    fn clear(&mut self) -> Outcome {
        // The id counter keeps counting: ids are never reused within a
        // session, even across a bench reset.
        self.components.clear();
        self.connections.clear();
        Outcome::Applied
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
