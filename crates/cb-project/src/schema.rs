//! Bench file schema definitions.
//!
//! Field names follow the original application's persisted format
//! (`type`, `wireProperties`, camelCase state keys), so exports from it
//! load unchanged.

use cb_catalog::{Polarity, StateMap};
use cb_store::WireProperties;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchFile {
    /// Schema version; 0 marks pre-versioned exports.
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Device state; missing fields are seeded from the catalog template
    /// on load.
    #[serde(default)]
    pub state: StateMap,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    pub from: u64,
    pub to: u64,
    pub polarity: Polarity,
    #[serde(default, rename = "wireProperties")]
    pub wire_properties: WireProperties,
}
