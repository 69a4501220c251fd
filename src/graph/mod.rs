//! Incidence-list graph core
//!
//! This module implements the directed graph ADT:
//! - Ownership-stamped, generation-checked vertex and edge handles
//! - Per-vertex outgoing/incoming incidence lists with slot-arena storage
//! - Auxiliary label slots on vertices and edges, cleared in bulk

pub mod label;
pub mod store;
pub mod types;

// Re-export main types
pub use label::LabelValue;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, GraphId, VertexId};
