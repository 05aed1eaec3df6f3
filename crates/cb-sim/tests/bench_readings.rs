//! End-to-end readings: store dispatch → resolve → transform.

use cb_catalog::{MeterMode, Polarity, StateMap};
use cb_core::ComponentId;
use cb_sim::base_reading;
use cb_store::{Action, ErrorFlag, Outcome, Store};
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
        x: 0.0,
        y: 0.0,
    }) {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    }
}

fn wired_bench(mode: &str, value: f64) -> (Store, ComponentId, ComponentId) {
    let mut store = Store::with_seed(0);
    let cal = add(&mut store, "mpc5522");
    let dmm = add(&mut store, "dmm8846");
    for polarity in [Polarity::Hi, Polarity::Lo] {
        store.dispatch(Action::AddConnection {
            from: cal,
            to: dmm,
            polarity,
        });
    }
    store.dispatch(Action::UpdateState {
        id: cal,
        patch: patch(json!({
            "power": true, "output": true, "mode": mode, "value": value
        })),
    });
    store.dispatch(Action::UpdateState {
        id: dmm,
        patch: patch(json!({ "power": true })),
    });
    (store, cal, dmm)
}

#[test]
fn ten_volts_with_standard_wires_and_loading_error() {
    let (mut store, _cal, dmm) = wired_bench("DC Voltage", 10.0);
    store.dispatch(Action::ToggleErrorFlag(ErrorFlag::LoadingError));

    let m = base_reading(&store.snapshot(), dmm).unwrap();
    let expected = 10.0 * (1.0e7 / (1.0e7 + 0.1));
    assert!((m.value - expected).abs() < 1e-12);
    assert_eq!(m.mode, MeterMode::DcV);
}

#[test]
fn bad_wires_shift_resistance_more_than_voltage() {
    let (mut store, _cal, dmm) = wired_bench("DC Voltage", 10.0);
    store.dispatch(Action::ToggleErrorFlag(ErrorFlag::LoadingError));
    store.dispatch(Action::ToggleWireKind { index: 0 });
    store.dispatch(Action::ToggleWireKind { index: 1 });

    let volts = base_reading(&store.snapshot(), dmm).unwrap();
    assert!((volts.value - 10.0 * (1.0e7 / (1.0e7 + 10.0))).abs() < 1e-12);
    // Relative error stays under 1 ppm even with 10 Ω of lead.
    assert!((volts.value - 10.0).abs() / 10.0 < 1e-5);

    let (mut store, _cal, dmm) = wired_bench("Resistance", 1000.0);
    store.dispatch(Action::ToggleErrorFlag(ErrorFlag::LoadingError));
    store.dispatch(Action::ToggleWireKind { index: 0 });
    store.dispatch(Action::ToggleWireKind { index: 1 });

    let ohms = base_reading(&store.snapshot(), dmm).unwrap();
    assert_eq!(ohms.value, 1010.0);
    // The same leads cost the resistance reading a full percent.
    assert!((ohms.value - 1000.0) / 1000.0 > 1e-3);
}

#[test]
fn no_circuit_reads_nothing() {
    let mut store = Store::with_seed(0);
    let cal = add(&mut store, "mpc5522");
    let dmm = add(&mut store, "dmm8846");
    store.dispatch(Action::UpdateState {
        id: dmm,
        patch: patch(json!({ "power": true })),
    });
    // Only the HI wire: incomplete circuit.
    store.dispatch(Action::AddConnection {
        from: cal,
        to: dmm,
        polarity: Polarity::Hi,
    });
    store.dispatch(Action::UpdateState {
        id: cal,
        patch: patch(json!({ "power": true, "output": true, "mode": "DC Voltage", "value": 10.0 })),
    });
    assert!(base_reading(&store.snapshot(), dmm).is_none());
}

#[test]
fn removing_the_source_kills_the_reading() {
    let (mut store, cal, dmm) = wired_bench("DC Voltage", 10.0);
    assert!(base_reading(&store.snapshot(), dmm).is_some());

    store.dispatch(Action::RemoveComponent { id: cal });
    // Cascade removed the wires; nothing resolves to the dead id.
    assert!(store.connections().is_empty());
    assert!(base_reading(&store.snapshot(), dmm).is_none());
}

#[test]
fn aux_terminals_read_current() {
    let mut store = Store::with_seed(0);
    let cal = add(&mut store, "mpc5522");
    let dmm = add(&mut store, "dmm8846");
    for polarity in [Polarity::AuxHi, Polarity::AuxLo] {
        store.dispatch(Action::AddConnection {
            from: cal,
            to: dmm,
            polarity,
        });
    }
    store.dispatch(Action::UpdateState {
        id: cal,
        patch: patch(json!({ "power": true, "output": true, "mode": "DC Current", "value": 0.25 })),
    });
    store.dispatch(Action::UpdateState {
        id: dmm,
        patch: patch(json!({ "power": true })),
    });

    let m = base_reading(&store.snapshot(), dmm).unwrap();
    assert_eq!(m.mode, MeterMode::DcI);
    assert_eq!(m.unit, "A");
    assert_eq!(m.value, 0.25);
}

#[test]
fn frequency_dial_shows_generator_frequency() {
    let mut store = Store::with_seed(0);
    let gen = add(&mut store, "wg33500");
    let counter = add(&mut store, "counter53131");
    for polarity in [Polarity::Hi, Polarity::Lo] {
        store.dispatch(Action::AddConnection {
            from: gen,
            to: counter,
            polarity,
        });
    }
    store.dispatch(Action::UpdateState {
        id: gen,
        patch: patch(json!({
            "power": true, "rfOn": true, "mode": "AC Voltage",
            "value": 1.0, "frequency": 12_345.0
        })),
    });
    store.dispatch(Action::UpdateState {
        id: counter,
        patch: patch(json!({ "power": true, "mode": "Frequency" })),
    });

    let m = base_reading(&store.snapshot(), counter).unwrap();
    assert_eq!(m.mode, MeterMode::Frequency);
    assert_eq!(m.value, 12_345.0);
    assert_eq!(m.unit, "Hz");
}

#[test]
fn dispatch_effects_are_visible_to_the_next_read() {
    let (mut store, cal, dmm) = wired_bench("DC Voltage", 10.0);
    assert_eq!(base_reading(&store.snapshot(), dmm).unwrap().value, 10.0);

    store.dispatch(Action::UpdateState {
        id: cal,
        patch: patch(json!({ "value": 5.0 })),
    });
    assert_eq!(base_reading(&store.snapshot(), dmm).unwrap().value, 5.0);

    store.dispatch(Action::UpdateState {
        id: cal,
        patch: patch(json!({ "output": false })),
    });
    assert!(base_reading(&store.snapshot(), dmm).is_none());
}
