//! Bench file validation.
//!
//! Only structural corruption is rejected here (duplicate ids, duplicate
//! wire triples). Recoverable problems (unknown device kinds, dangling
//! connection endpoints, missing state fields) are handled by the
//! conversion layer, which defaults or drops them.

use std::collections::HashSet;

use thiserror::Error;

use crate::schema::BenchFile;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate component id {id}")]
    DuplicateComponentId { id: u64 },

    #[error("duplicate wire from {from} to {to} on the same terminal")]
    DuplicateWire { from: u64, to: u64 },
}

pub fn validate_bench(file: &BenchFile) -> Result<(), ValidationError> {
    let mut ids = HashSet::new();
    for comp in &file.components {
        if !ids.insert(comp.id) {
            return Err(ValidationError::DuplicateComponentId { id: comp.id });
        }
    }

    let mut wires = HashSet::new();
    for conn in &file.connections {
        if !wires.insert((conn.from, conn.to, conn.polarity)) {
            return Err(ValidationError::DuplicateWire {
                from: conn.from,
                to: conn.to,
            });
        }
    }

    Ok(())
}
