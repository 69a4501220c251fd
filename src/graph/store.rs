//! In-memory incidence-list graph storage
//!
//! Storage is a pair of generational slot arenas (vertices, edges) with
//! free-list reuse. Each vertex record owns its `outgoing` and `incoming`
//! incidence lists; edges are reachable only through them or by handle.
//! Every public operation validates its handles before touching anything:
//! ownership stamp, slot, generation, occupancy, in that order.

use super::label::LabelValue;
use super::types::{EdgeId, GraphId, VertexId};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A handle this graph did not issue, or one whose entity is gone.
    #[error("invalid position: {0}")]
    InvalidPosition(&'static str),

    /// Insertion rejected: duplicate vertex element, duplicate ordered
    /// edge pair, or self-loop.
    #[error("insertion failed: {0}")]
    InsertionFailed(&'static str),

    /// Removal rejected: the vertex still has incident edges.
    #[error("removal failed: {0}")]
    RemovalFailed(&'static str),
}

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug)]
struct VertexRecord<V> {
    element: V,
    label: Option<LabelValue>,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

#[derive(Debug)]
struct EdgeRecord<E> {
    element: E,
    label: Option<LabelValue>,
    source: VertexId,
    target: VertexId,
}

/// One arena slot. The generation counts how many occupants the slot has
/// lost; a handle is live only while its generation matches.
#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    record: Option<T>,
}

impl<T> Slot<T> {
    fn vacant() -> Self {
        Slot {
            generation: 0,
            record: None,
        }
    }
}

/// Directed graph on per-vertex incidence lists.
///
/// - `vertices` / `edges`: slot arenas indexed by handle slot
/// - `free_vertices` / `free_edges`: slots available for reuse
/// - `element_index`: vertex element -> slot, for duplicate detection
///
/// Handles returned from insertion are stamped with this instance's
/// [`GraphId`]; presenting them to any other instance fails with
/// [`GraphError::InvalidPosition`].
#[derive(Debug)]
pub struct GraphStore<V, E> {
    id: GraphId,
    vertices: Vec<Slot<VertexRecord<V>>>,
    edges: Vec<Slot<EdgeRecord<E>>>,
    free_vertices: Vec<u32>,
    free_edges: Vec<u32>,
    element_index: FxHashMap<V, u32>,
    vertex_count: usize,
    edge_count: usize,
}

impl<V, E> GraphStore<V, E> {
    /// Create a new empty graph with a fresh instance identity.
    pub fn new() -> Self {
        GraphStore {
            id: GraphId::fresh(),
            vertices: Vec::new(),
            edges: Vec::new(),
            free_vertices: Vec::new(),
            free_edges: Vec::new(),
            element_index: FxHashMap::default(),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    // Resolve a vertex handle to its record, validating ownership,
    // slot, generation and occupancy.
    fn vertex(&self, id: VertexId) -> GraphResult<&VertexRecord<V>> {
        if id.owner != self.id {
            return Err(GraphError::InvalidPosition(
                "vertex handle belongs to a different graph",
            ));
        }
        self.vertices
            .get(id.slot as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.record.as_ref())
            .ok_or(GraphError::InvalidPosition("stale or unknown vertex handle"))
    }

    fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut VertexRecord<V>> {
        if id.owner != self.id {
            return Err(GraphError::InvalidPosition(
                "vertex handle belongs to a different graph",
            ));
        }
        self.vertices
            .get_mut(id.slot as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.record.as_mut())
            .ok_or(GraphError::InvalidPosition("stale or unknown vertex handle"))
    }

    fn edge(&self, id: EdgeId) -> GraphResult<&EdgeRecord<E>> {
        if id.owner != self.id {
            return Err(GraphError::InvalidPosition(
                "edge handle belongs to a different graph",
            ));
        }
        self.edges
            .get(id.slot as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.record.as_ref())
            .ok_or(GraphError::InvalidPosition("stale or unknown edge handle"))
    }

    fn edge_mut(&mut self, id: EdgeId) -> GraphResult<&mut EdgeRecord<E>> {
        if id.owner != self.id {
            return Err(GraphError::InvalidPosition(
                "edge handle belongs to a different graph",
            ));
        }
        self.edges
            .get_mut(id.slot as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.record.as_mut())
            .ok_or(GraphError::InvalidPosition("stale or unknown edge handle"))
    }

    // The edge must still be linked into both endpoint lists. Cannot
    // trigger under correct use; checked anyway.
    fn check_edge_linked(&self, id: EdgeId) -> GraphResult<()> {
        let record = self.edge(id)?;
        if !self.vertex(record.source)?.outgoing.contains(&id)
            || !self.vertex(record.target)?.incoming.contains(&id)
        {
            return Err(GraphError::InvalidPosition(
                "edge is not linked into its endpoint incidence lists",
            ));
        }
        Ok(())
    }

    /// Check whether a vertex handle is live in this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_ok()
    }

    /// Check whether an edge handle is live in this graph.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_ok()
    }

    /// Insert a directed edge from `source` to `target`.
    ///
    /// Fails with [`GraphError::InvalidPosition`] if either endpoint is
    /// invalid, and with [`GraphError::InsertionFailed`] on a self-loop or
    /// when an edge for the same ordered pair already exists.
    pub fn insert_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        element: E,
    ) -> GraphResult<EdgeId> {
        self.vertex(source)?;
        self.vertex(target)?;

        if source == target {
            return Err(GraphError::InsertionFailed(
                "self-loop edges are not allowed",
            ));
        }

        // Duplicate ordered-pair scan, O(out-degree of source).
        for &eid in &self.vertex(source)?.outgoing {
            if self.edge(eid)?.target == target {
                return Err(GraphError::InsertionFailed(
                    "an edge between these vertices already exists",
                ));
            }
        }

        let slot = match self.free_edges.pop() {
            Some(slot) => slot,
            None => {
                self.edges.push(Slot::vacant());
                (self.edges.len() - 1) as u32
            }
        };
        let generation = self.edges[slot as usize].generation;
        let id = EdgeId::new(self.id, slot, generation);

        self.edges[slot as usize].record = Some(EdgeRecord {
            element,
            label: None,
            source,
            target,
        });
        self.vertex_mut(source)?.outgoing.push(id);
        self.vertex_mut(target)?.incoming.push(id);
        self.edge_count += 1;

        Ok(id)
    }

    /// Remove an edge, detaching it from both endpoint incidence lists,
    /// and return its element. The handle is dead afterwards.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<E> {
        let (source, target) = {
            let record = self.edge(id)?;
            (record.source, record.target)
        };

        // Locate the edge in both lists before touching anything, so a
        // failed consistency check leaves the graph unchanged.
        let out_pos = self
            .vertex(source)?
            .outgoing
            .iter()
            .position(|&e| e == id)
            .ok_or(GraphError::InvalidPosition(
                "edge missing from source incidence list",
            ))?;
        let in_pos = self
            .vertex(target)?
            .incoming
            .iter()
            .position(|&e| e == id)
            .ok_or(GraphError::InvalidPosition(
                "edge missing from target incidence list",
            ))?;

        self.vertex_mut(source)?.outgoing.remove(out_pos);
        self.vertex_mut(target)?.incoming.remove(in_pos);

        let slot = &mut self.edges[id.slot as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let record = slot
            .record
            .take()
            .ok_or(GraphError::InvalidPosition("edge already removed"))?;
        self.free_edges.push(id.slot);
        self.edge_count -= 1;

        Ok(record.element)
    }

    /// All live vertices, recomputed on each call. Order is unspecified.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.record.is_some())
            .map(|(i, slot)| VertexId::new(self.id, i as u32, slot.generation))
            .collect()
    }

    /// All live edges, obtained by concatenating per-vertex outgoing lists.
    /// Order is stable within one vertex's list, unspecified across vertices.
    pub fn edges(&self) -> Vec<EdgeId> {
        self.vertices
            .iter()
            .filter_map(|slot| slot.record.as_ref())
            .flat_map(|record| record.outgoing.iter().copied())
            .collect()
    }

    /// Outgoing incidence list of a vertex.
    pub fn outgoing(&self, id: VertexId) -> GraphResult<&[EdgeId]> {
        Ok(&self.vertex(id)?.outgoing)
    }

    /// Incoming incidence list of a vertex.
    pub fn incoming(&self, id: VertexId) -> GraphResult<&[EdgeId]> {
        Ok(&self.vertex(id)?.incoming)
    }

    /// Tail vertex of an edge (the edge goes FROM this vertex).
    pub fn source(&self, id: EdgeId) -> GraphResult<VertexId> {
        let record = self.edge(id)?;
        if !self.vertex(record.source)?.outgoing.contains(&id) {
            return Err(GraphError::InvalidPosition(
                "edge missing from source incidence list",
            ));
        }
        Ok(record.source)
    }

    /// Head vertex of an edge (the edge goes TO this vertex).
    pub fn target(&self, id: EdgeId) -> GraphResult<VertexId> {
        let record = self.edge(id)?;
        if !self.vertex(record.target)?.incoming.contains(&id) {
            return Err(GraphError::InvalidPosition(
                "edge missing from target incidence list",
            ));
        }
        Ok(record.target)
    }

    /// Borrow a vertex's element.
    pub fn vertex_element(&self, id: VertexId) -> GraphResult<&V> {
        Ok(&self.vertex(id)?.element)
    }

    /// Borrow an edge's element.
    pub fn edge_element(&self, id: EdgeId) -> GraphResult<&E> {
        Ok(&self.edge(id)?.element)
    }

    /// Attach a label to a vertex, overwriting any prior label.
    pub fn set_vertex_label(
        &mut self,
        id: VertexId,
        label: impl Into<LabelValue>,
    ) -> GraphResult<()> {
        self.vertex_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Current label of a vertex, `None` if never set or cleared.
    pub fn vertex_label(&self, id: VertexId) -> GraphResult<Option<&LabelValue>> {
        Ok(self.vertex(id)?.label.as_ref())
    }

    /// Attach a label to an edge, overwriting any prior label.
    pub fn set_edge_label(&mut self, id: EdgeId, label: impl Into<LabelValue>) -> GraphResult<()> {
        self.check_edge_linked(id)?;
        self.edge_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Current label of an edge, `None` if never set or cleared.
    pub fn edge_label(&self, id: EdgeId) -> GraphResult<Option<&LabelValue>> {
        self.check_edge_linked(id)?;
        Ok(self.edge(id)?.label.as_ref())
    }

    /// Reset every vertex and edge label, O(V + E).
    pub fn clear_labels(&mut self) {
        for slot in &mut self.vertices {
            if let Some(record) = slot.record.as_mut() {
                record.label = None;
            }
        }
        for slot in &mut self.edges {
            if let Some(record) = slot.record.as_mut() {
                record.label = None;
            }
        }
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, E> GraphStore<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Insert a vertex carrying `element`.
    ///
    /// Fails with [`GraphError::InsertionFailed`] when a vertex with an
    /// equal element is already present.
    pub fn insert_vertex(&mut self, element: V) -> GraphResult<VertexId> {
        if self.element_index.contains_key(&element) {
            return Err(GraphError::InsertionFailed(
                "a vertex with an equal element already exists",
            ));
        }

        let slot = match self.free_vertices.pop() {
            Some(slot) => slot,
            None => {
                self.vertices.push(Slot::vacant());
                (self.vertices.len() - 1) as u32
            }
        };
        let generation = self.vertices[slot as usize].generation;
        let id = VertexId::new(self.id, slot, generation);

        self.element_index.insert(element.clone(), slot);
        self.vertices[slot as usize].record = Some(VertexRecord {
            element,
            label: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        self.vertex_count += 1;

        Ok(id)
    }

    /// Remove a vertex and return its element.
    ///
    /// Fails with [`GraphError::RemovalFailed`] while any incident edge
    /// remains. The handle is dead afterwards.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<V> {
        let record = self.vertex(id)?;
        if !record.outgoing.is_empty() || !record.incoming.is_empty() {
            return Err(GraphError::RemovalFailed(
                "vertex still has incident edges",
            ));
        }

        let slot = &mut self.vertices[id.slot as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let record = slot
            .record
            .take()
            .ok_or(GraphError::InvalidPosition("vertex already removed"))?;
        self.element_index.remove(&record.element);
        self.free_vertices.push(id.slot);
        self.vertex_count -= 1;

        Ok(record.element)
    }

    /// Look up a live vertex by its element.
    pub fn find_vertex(&self, element: &V) -> Option<VertexId> {
        let &slot = self.element_index.get(element)?;
        let generation = self.vertices.get(slot as usize)?.generation;
        Some(VertexId::new(self.id, slot, generation))
    }
}

impl<V, E> Default for GraphStore<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
