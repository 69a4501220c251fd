//! Single-source shortest-path search
//!
//! Runs over the graph facade only (`outgoing`, `target`, `edge_label`);
//! all tentative-distance and predecessor bookkeeping lives in the
//! engine's own maps, never in the graph's label store. Labels are read
//! once per edge, as the externally supplied weight.

use crate::graph::{EdgeId, GraphResult, GraphStore, LabelValue, VertexId};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Result of a shortest-path search.
#[derive(Debug, Clone)]
pub struct PathResult {
    pub source: VertexId,
    pub target: VertexId,
    /// Traversed edges in order from source to target; empty when
    /// source equals target.
    pub edges: Vec<EdgeId>,
    pub cost: f64,
}

/// State for the priority frontier
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

// Rust's BinaryHeap is a max-heap, so Ord is implemented reversed for
// min-heap behavior
impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weight of an edge, read from its label.
///
/// `Float` and `Integer` labels are the supported weight encodings; a
/// missing or non-numeric label weighs 1.0.
pub(crate) fn edge_weight<V, E>(graph: &GraphStore<V, E>, edge: EdgeId) -> GraphResult<f64> {
    Ok(match graph.edge_label(edge)? {
        Some(LabelValue::Float(f)) => *f,
        Some(LabelValue::Integer(i)) => *i as f64,
        _ => 1.0,
    })
}

/// Dijkstra's algorithm between two vertices of `graph`.
///
/// Returns `Ok(None)` when `target` is unreachable. Handle misuse (a
/// foreign or stale vertex) surfaces as [`crate::graph::GraphError::InvalidPosition`].
///
/// Relaxation updates the tentative distance of an already-seen vertex
/// and re-inserts it into the frontier; stale frontier records are
/// skipped when popped. Each vertex is settled at most once.
pub fn shortest_path<V, E>(
    graph: &GraphStore<V, E>,
    source: VertexId,
    target: VertexId,
) -> GraphResult<Option<PathResult>> {
    // Validate both endpoints before seeding the frontier.
    graph.vertex_element(source)?;
    graph.vertex_element(target)?;

    if source == target {
        return Ok(Some(PathResult {
            source,
            target,
            edges: Vec::new(),
            cost: 0.0,
        }));
    }

    let mut dist: FxHashMap<VertexId, f64> = FxHashMap::default();
    let mut parent: FxHashMap<VertexId, EdgeId> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(State {
        cost: 0.0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == target {
            let edges = reconstruct(graph, &parent, source, target)?;
            return Ok(Some(PathResult {
                source,
                target,
                edges,
                cost,
            }));
        }

        // A shorter record for this vertex was already settled; this one
        // is a stale frontier entry.
        if cost > *dist.get(&vertex).unwrap_or(&f64::INFINITY) {
            continue;
        }

        for &edge in graph.outgoing(vertex)? {
            let weight = edge_weight(graph, edge)?;
            if weight < 0.0 {
                // Negative weights void the shortest-path guarantee.
                tracing::warn!(%edge, weight, "skipping negative-weight edge");
                continue;
            }

            let next = graph.target(edge)?;
            let next_cost = cost + weight;

            if next_cost < *dist.get(&next).unwrap_or(&f64::INFINITY) {
                dist.insert(next, next_cost);
                parent.insert(next, edge);
                heap.push(State {
                    cost: next_cost,
                    vertex: next,
                });
            }
        }
    }

    Ok(None)
}

// Walk the predecessor chain backwards from target; the chain ends at
// the source, which never gains a parent entry.
fn reconstruct<V, E>(
    graph: &GraphStore<V, E>,
    parent: &FxHashMap<VertexId, EdgeId>,
    source: VertexId,
    target: VertexId,
) -> GraphResult<Vec<EdgeId>> {
    let mut edges = Vec::new();
    let mut current = target;
    while current != source {
        match parent.get(&current) {
            Some(&edge) => {
                edges.push(edge);
                current = graph.source(edge)?;
            }
            None => break,
        }
    }
    edges.reverse();
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    fn weighted_edge(
        graph: &mut GraphStore<&'static str, &'static str>,
        from: VertexId,
        to: VertexId,
        name: &'static str,
        weight: f64,
    ) -> EdgeId {
        let e = graph.insert_edge(from, to, name).unwrap();
        graph.set_edge_label(e, weight).unwrap();
        e
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();

        let ab = weighted_edge(&mut graph, a, b, "a-b", 1.0);
        let bc = weighted_edge(&mut graph, b, c, "b-c", 2.0);
        weighted_edge(&mut graph, a, c, "a-c", 5.0);

        let result = shortest_path(&graph, a, c).unwrap().unwrap();
        assert_eq!(result.edges, vec![ab, bc]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_relaxation_updates_tentative_distance() {
        // c is first reached expensively through a, then improved via b;
        // the frontier must honor the update.
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();
        let d = graph.insert_vertex("d").unwrap();

        let ab = weighted_edge(&mut graph, a, b, "a-b", 1.0);
        weighted_edge(&mut graph, a, c, "a-c", 10.0);
        let bc = weighted_edge(&mut graph, b, c, "b-c", 1.0);
        let cd = weighted_edge(&mut graph, c, d, "c-d", 1.0);

        let result = shortest_path(&graph, a, d).unwrap().unwrap();
        assert_eq!(result.edges, vec![ab, bc, cd]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_unreachable_returns_none() {
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let d = graph.insert_vertex("d").unwrap();
        weighted_edge(&mut graph, a, b, "a-b", 1.0);
        // d has no incoming edges.
        weighted_edge(&mut graph, d, a, "d-a", 1.0);

        assert!(shortest_path(&graph, a, d).unwrap().is_none());
        assert!(shortest_path(&graph, b, d).unwrap().is_none());
    }

    #[test]
    fn test_same_source_and_target() {
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();

        let result = shortest_path(&graph, a, a).unwrap().unwrap();
        assert!(result.edges.is_empty());
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_foreign_handle_propagates_invalid_position() {
        let mut graph_a: GraphStore<&str, &str> = GraphStore::new();
        let graph_b: GraphStore<&str, &str> = GraphStore::new();
        let a = graph_a.insert_vertex("a").unwrap();

        let result = shortest_path(&graph_b, a, a);
        assert!(matches!(result, Err(GraphError::InvalidPosition(_))));
    }

    #[test]
    fn test_unlabeled_edges_weigh_one() {
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();
        graph.insert_edge(a, b, "a-b").unwrap();
        graph.insert_edge(b, c, "b-c").unwrap();

        let result = shortest_path(&graph, a, c).unwrap().unwrap();
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_negative_weight_edge_is_skipped() {
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();
        weighted_edge(&mut graph, a, b, "a-b", -5.0);
        weighted_edge(&mut graph, b, c, "b-c", 1.0);
        let ac = weighted_edge(&mut graph, a, c, "a-c", 10.0);

        let result = shortest_path(&graph, a, c).unwrap().unwrap();
        assert_eq!(result.edges, vec![ac]);
        assert_eq!(result.cost, 10.0);
    }

    #[test]
    fn test_integer_labels_are_valid_weights() {
        let mut graph: GraphStore<&str, &str> = GraphStore::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let e = graph.insert_edge(a, b, "a-b").unwrap();
        graph.set_edge_label(e, 3i64).unwrap();

        let result = shortest_path(&graph, a, b).unwrap().unwrap();
        assert_eq!(result.cost, 3.0);
    }
}
