//! Circuit resolution.
//!
//! A measuring device reads something only when a complete two-terminal
//! link exists: both polarity wires of one of its terminal pairs present,
//! originating from the same powered source. Anything less is "not
//! measuring": a miss, never an error. Resolution is computed fresh from
//! the current snapshot on every read; nothing is cached across
//! mutations.

use cb_catalog::{Polarity, TerminalPair};
use cb_core::ComponentId;
use cb_store::{Component, Connection};

/// The powered source feeding a sink, as found by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRef {
    pub source: ComponentId,
    /// True when the circuit closed on an auxiliary (current sense)
    /// terminal pair.
    pub auxiliary: bool,
    /// Sum of the two matched wires' lead resistance, in ohms.
    pub wire_resistance: f64,
}

/// Find the unique powered source feeding `sink`.
///
/// Terminal pairs are tried in the order declared by the catalog
/// (primary pair first). Returns `None` when no pair closes a circuit.
pub fn resolve(
    sink: ComponentId,
    pairs: &[TerminalPair],
    components: &[Component],
    connections: &[Connection],
) -> Option<SourceRef> {
    pairs
        .iter()
        .find_map(|pair| resolve_pair(sink, pair, components, connections))
}

fn resolve_pair(
    sink: ComponentId,
    pair: &TerminalPair,
    components: &[Component],
    connections: &[Connection],
) -> Option<SourceRef> {
    let primary = wire_to(sink, pair.primary, connections)?;
    let secondary = wire_to(sink, pair.secondary, connections)?;

    // Both wires must come out of the same device.
    if primary.from != secondary.from {
        return None;
    }

    let source = components.iter().find(|c| c.id == primary.from)?;
    if !source.state.power() {
        return None;
    }

    Some(SourceRef {
        source: source.id,
        auxiliary: pair.auxiliary,
        wire_resistance: primary.wire.resistance + secondary.wire.resistance,
    })
}

fn wire_to(
    sink: ComponentId,
    polarity: Polarity,
    connections: &[Connection],
) -> Option<&Connection> {
    connections
        .iter()
        .find(|c| c.to == sink && c.polarity == polarity)
}
