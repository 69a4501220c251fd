//! Handle types for the incidence-list graph
//!
//! Every vertex and edge handle embeds the identity of the graph instance
//! that issued it plus a slot/generation pair into that graph's arena.
//! A handle presented to a different instance, or outliving its entity,
//! fails validation instead of resolving to the wrong data.

use std::fmt;
use uuid::Uuid;

/// Unique identity of one graph instance.
///
/// Minted once per store; handles carry it as their ownership stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(Uuid);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        GraphId(Uuid::new_v4())
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.0.simple())
    }
}

/// Opaque handle to a vertex, valid only for the graph that issued it.
///
/// The generation is bumped when the slot's occupant is removed, so a
/// handle kept past removal never revalidates even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) owner: GraphId,
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl VertexId {
    pub(crate) fn new(owner: GraphId, slot: u32, generation: u32) -> Self {
        VertexId {
            owner,
            slot,
            generation,
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({}.{})", self.slot, self.generation)
    }
}

/// Opaque handle to an edge, valid only for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub(crate) owner: GraphId,
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl EdgeId {
    pub(crate) fn new(owner: GraphId, slot: u32, generation: u32) -> Self {
        EdgeId {
            owner,
            slot,
            generation,
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}.{})", self.slot, self.generation)
    }
}
