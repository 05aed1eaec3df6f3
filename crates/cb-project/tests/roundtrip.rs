//! Bench file round-trips through disk and the store.

use cb_catalog::{Polarity, StateMap};
use cb_core::ComponentId;
use cb_project::{capture, load_into, load_json, load_yaml, save_json, save_yaml, BenchFile};
use cb_store::{Action, Outcome, Store, WireKind};
use serde_json::json;

fn patch(value: serde_json::Value) -> StateMap {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn add(store: &mut Store, kind: &str) -> ComponentId {
    match store.dispatch(Action::AddComponent {
        kind: kind.to_string(),
        x: 10.0,
        y: 20.0,
    }) {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    }
}

fn example_store() -> Store {
    let mut store = Store::with_seed(8);
    let cal = add(&mut store, "mpc5522");
    let dmm = add(&mut store, "dmm8846");
    for polarity in [Polarity::Hi, Polarity::Lo] {
        store.dispatch(Action::AddConnection {
            from: cal,
            to: dmm,
            polarity,
        });
    }
    store.dispatch(Action::ToggleWireKind { index: 1 });
    store.dispatch(Action::UpdateState {
        id: cal,
        patch: patch(json!({ "power": true, "output": true, "value": 10.0 })),
    });
    store
}

#[test]
fn yaml_round_trip_preserves_the_bench() {
    let store = example_store();
    let file = capture(&store.snapshot(), "demo bench");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.yaml");
    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(file, loaded);
}

#[test]
fn json_round_trip_preserves_the_bench() {
    let store = example_store();
    let file = capture(&store.snapshot(), "demo bench");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");
    save_json(&path, &file).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(file, loaded);
}

#[test]
fn store_round_trip_preserves_wires_and_state() {
    let store = example_store();
    let file = capture(&store.snapshot(), "demo bench");

    let mut reloaded = Store::with_seed(0);
    load_into(&mut reloaded, &file);

    assert_eq!(reloaded.components().len(), 2);
    assert_eq!(reloaded.connections().len(), 2);
    assert_eq!(reloaded.connections()[1].wire.kind, WireKind::Bad);
    let cal = reloaded.component(ComponentId::new(0)).unwrap();
    assert!(cal.state.power());
    assert_eq!(cal.state.value(), 10.0);
}

#[test]
fn id_counter_continues_past_loaded_ids() {
    let store = example_store();
    let file = capture(&store.snapshot(), "demo bench");

    let mut reloaded = Store::with_seed(0);
    load_into(&mut reloaded, &file);
    let next = add(&mut reloaded, "dmm34401");
    assert_eq!(next.raw(), 2);
}

#[test]
fn minimal_json_document_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    // A pre-versioned export: no version, no wireProperties, sparse state.
    std::fs::write(
        &path,
        r#"{
            "components": [
                { "id": 0, "type": "mpc5522" },
                { "id": 1, "type": "dmm8846", "x": 5.0, "y": 6.0 }
            ],
            "connections": [
                { "from": 0, "to": 1, "polarity": "hi" }
            ]
        }"#,
    )
    .unwrap();

    let file = load_json(&path).unwrap();
    assert_eq!(file.version, cb_project::LATEST_VERSION);
    assert_eq!(file.connections[0].wire_properties.kind, WireKind::Standard);

    let mut store = Store::with_seed(0);
    load_into(&mut store, &file);
    // Sparse state was seeded from the catalog template.
    let cal = store.component(ComponentId::new(0)).unwrap();
    assert_eq!(cal.state.frequency(), 50.0);
    assert!(!cal.state.power());
}

#[test]
fn id_at_u64_max_loads_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge-id.json");
    std::fs::write(
        &path,
        r#"{
            "version": 1,
            "components": [
                { "id": 0, "type": "mpc5522" },
                { "id": 18446744073709551615, "type": "dmm8846" }
            ],
            "connections": [
                { "from": 0, "to": 18446744073709551615, "polarity": "hi" }
            ]
        }"#,
    )
    .unwrap();

    let file = load_json(&path).unwrap();
    let mut store = Store::with_seed(0);
    load_into(&mut store, &file);

    // The record at the top of the id range is dropped with its wire;
    // fresh ids still come out above everything that survived.
    assert_eq!(store.components().len(), 1);
    assert!(store.connections().is_empty());
    let next = add(&mut store, "dmm34401");
    assert_eq!(next.raw(), 1);
}

#[test]
fn corrupt_documents_are_rejected_not_panicked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_json(&path).is_err());

    let dup = BenchFile {
        version: 1,
        name: String::new(),
        components: vec![],
        connections: vec![],
    };
    // Save path validates too; a clean file is fine.
    let ok_path = dir.path().join("ok.json");
    save_json(&ok_path, &dup).unwrap();
}

#[test]
fn future_version_is_refused_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.json");
    std::fs::write(
        &path,
        r#"{ "version": 99, "components": [], "connections": [] }"#,
    )
    .unwrap();
    assert!(load_json(&path).is_err());
}
