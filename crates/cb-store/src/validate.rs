//! Connection validation.
//!
//! A proposed wire is checked against the current graph before anything
//! mutates. The rules run in a fixed order so the caller always gets the
//! most fundamental failure first. A rejection is recoverable: the panel
//! shows a transient notification and nothing changes.

use cb_catalog::{DeviceRole, Polarity};
use cb_core::ComponentId;
use thiserror::Error;

use crate::component::Component;
use crate::connection::Connection;

/// Why a proposed wire was refused.
///
/// The display strings double as the user-visible notification text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("device not found")]
    DeviceNotFound,

    #[error("wires can only start at a calibrator output")]
    UnsupportedSourceRole,

    #[error("wires must end at a measuring instrument input")]
    UnsupportedSinkRole,

    #[error("these terminals are already wired together")]
    DuplicatePolarity,
}

/// Decide whether a proposed wire is legal.
///
/// Rule order: existence of both endpoints, source role, sink role,
/// duplicate `(from, to, polarity)` triple. Different polarities between
/// the same device pair are allowed; HI and LO are independent wires,
/// which is why circuit completeness is resolved separately.
pub fn validate_connection(
    from: ComponentId,
    to: ComponentId,
    polarity: Polarity,
    components: &[Component],
    connections: &[Connection],
) -> Result<(), RejectReason> {
    let source = components
        .iter()
        .find(|c| c.id == from)
        .ok_or(RejectReason::DeviceNotFound)?;
    let sink = components
        .iter()
        .find(|c| c.id == to)
        .ok_or(RejectReason::DeviceNotFound)?;

    // Unknown catalog kinds have no role and cannot be wired.
    if source.role() != Some(DeviceRole::Calibrator) {
        return Err(RejectReason::UnsupportedSourceRole);
    }
    if sink.role() != Some(DeviceRole::Uuc) {
        return Err(RejectReason::UnsupportedSinkRole);
    }

    let duplicate = connections
        .iter()
        .any(|c| c.from == from && c.to == to && c.polarity == polarity);
    if duplicate {
        return Err(RejectReason::DuplicatePolarity);
    }

    Ok(())
}
