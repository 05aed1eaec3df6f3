//! Conversion between bench files and the live store.

use cb_catalog::device_spec;
use cb_core::ComponentId;
use cb_store::{
    Action, Component, Connection, DeviceState, Snapshot, Store, WireProperties,
};

use crate::migrate::LATEST_VERSION;
use crate::schema::{BenchFile, ComponentDef, ConnectionDef};

/// Materialize a bench file into store components and connections.
///
/// Recoverable defects are defaulted or dropped, never fatal:
/// - unknown device kinds are dropped (they have no role and could never
///   participate in a circuit),
/// - missing state fields are seeded from the catalog template, with the
///   file's fields merged on top,
/// - connections with a dangling endpoint are dropped,
/// - wire resistance is renormalized from the wire kind.
pub fn instantiate(file: &BenchFile) -> (Vec<Component>, Vec<Connection>) {
    let mut components = Vec::with_capacity(file.components.len());
    for def in &file.components {
        match build_component(def) {
            Some(comp) => components.push(comp),
            None => {
                tracing::warn!(id = def.id, kind = %def.kind, "dropping unknown device kind");
            }
        }
    }

    let mut connections = Vec::with_capacity(file.connections.len());
    for (index, def) in file.connections.iter().enumerate() {
        match build_connection(def, &components) {
            Some(conn) => connections.push(conn),
            None => {
                tracing::warn!(index, from = def.from, to = def.to, "dropping dangling wire");
            }
        }
    }

    (components, connections)
}

fn build_component(def: &ComponentDef) -> Option<Component> {
    let spec = device_spec(&def.kind)?;
    let mut state = DeviceState::from_map(spec.initial_state());
    state.merge(&def.state);
    Some(Component {
        id: ComponentId::new(def.id),
        kind: def.kind.clone(),
        x: def.x,
        y: def.y,
        state,
    })
}

fn build_connection(def: &ConnectionDef, components: &[Component]) -> Option<Connection> {
    let from = ComponentId::new(def.from);
    let to = ComponentId::new(def.to);
    let exists = |id: ComponentId| components.iter().any(|c| c.id == id);
    if !exists(from) || !exists(to) {
        return None;
    }

    // kind is authoritative; a resistance that disagrees is a stale or
    // hand-edited field.
    let wire = match def.wire_properties.kind {
        cb_store::WireKind::Standard => WireProperties::standard(),
        cb_store::WireKind::Bad => WireProperties::bad(),
    };

    Some(Connection {
        from,
        to,
        polarity: def.polarity,
        wire,
    })
}

/// Load a bench file into the store, replacing its content.
///
/// The store recomputes its id counter from the loaded ids.
pub fn load_into(store: &mut Store, file: &BenchFile) {
    let (components, connections) = instantiate(file);
    store.dispatch(Action::LoadSnapshot {
        components,
        connections,
    });
}

/// Capture the current bench as a saveable file.
pub fn capture(snap: &Snapshot<'_>, name: impl Into<String>) -> BenchFile {
    BenchFile {
        version: LATEST_VERSION,
        name: name.into(),
        components: snap
            .components
            .iter()
            .map(|comp| ComponentDef {
                id: comp.id.raw(),
                kind: comp.kind.clone(),
                x: comp.x,
                y: comp.y,
                state: comp.state.as_map().clone(),
            })
            .collect(),
        connections: snap
            .connections
            .iter()
            .map(|conn| ConnectionDef {
                from: conn.from.raw(),
                to: conn.to.raw(),
                polarity: conn.polarity,
                wire_properties: conn.wire,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_catalog::{Polarity, StateMap};
    use serde_json::json;

    fn state(value: serde_json::Value) -> StateMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn missing_state_fields_come_from_the_template() {
        let file = BenchFile {
            version: 1,
            name: String::new(),
            components: vec![ComponentDef {
                id: 4,
                kind: "mpc5522".to_string(),
                x: 1.0,
                y: 2.0,
                state: state(json!({ "power": true })),
            }],
            connections: vec![],
        };
        let (components, _) = instantiate(&file);
        let comp = &components[0];
        assert!(comp.state.power());
        // Template fields survive under the merged file state.
        assert_eq!(comp.state.frequency(), 50.0);
    }

    #[test]
    fn unknown_kind_and_its_wires_are_dropped() {
        let file = BenchFile {
            version: 1,
            name: String::new(),
            components: vec![
                ComponentDef {
                    id: 0,
                    kind: "mpc5522".to_string(),
                    x: 0.0,
                    y: 0.0,
                    state: StateMap::new(),
                },
                ComponentDef {
                    id: 1,
                    kind: "flux_capacitor".to_string(),
                    x: 0.0,
                    y: 0.0,
                    state: StateMap::new(),
                },
            ],
            connections: vec![ConnectionDef {
                from: 0,
                to: 1,
                polarity: Polarity::Hi,
                wire_properties: WireProperties::standard(),
            }],
        };
        let (components, connections) = instantiate(&file);
        assert_eq!(components.len(), 1);
        assert!(connections.is_empty());
    }

    #[test]
    fn wire_resistance_is_renormalized_from_kind() {
        let file = BenchFile {
            version: 1,
            name: String::new(),
            components: vec![
                ComponentDef {
                    id: 0,
                    kind: "mpc5522".to_string(),
                    x: 0.0,
                    y: 0.0,
                    state: StateMap::new(),
                },
                ComponentDef {
                    id: 1,
                    kind: "dmm8846".to_string(),
                    x: 0.0,
                    y: 0.0,
                    state: StateMap::new(),
                },
            ],
            connections: vec![ConnectionDef {
                from: 0,
                to: 1,
                polarity: Polarity::Hi,
                wire_properties: WireProperties {
                    kind: cb_store::WireKind::Bad,
                    resistance: 123.0,
                },
            }],
        };
        let (_, connections) = instantiate(&file);
        assert_eq!(connections[0].wire.resistance, 5.0);
    }
}
