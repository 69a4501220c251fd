//! Wayfinder
//!
//! A directed graph built on per-vertex incidence lists, with
//! ownership-checked handles, an auxiliary label store, a shortest-path
//! search, and a street-network routing layer on top.
//!
//! # Architecture
//!
//! - [`graph`]: the graph ADT with slot-arena storage, incidence lists,
//!   handle validation and labels
//! - [`algo`]: shortest-path search over the graph facade
//! - [`street`]: road-map loading, name resolution and route rendering
//!
//! Handles are stamped with the identity of the graph that issued them;
//! a handle presented to another instance, or kept past removal of its
//! entity, fails with [`graph::GraphError::InvalidPosition`] instead of
//! corrupting anything.
//!
//! # Example Usage
//!
//! ```rust
//! use wayfinder::graph::GraphStore;
//! use wayfinder::shortest_path;
//!
//! let mut graph: GraphStore<&str, &str> = GraphStore::new();
//!
//! let dock = graph.insert_vertex("Dock").unwrap();
//! let plaza = graph.insert_vertex("Plaza").unwrap();
//! let market = graph.insert_vertex("Market").unwrap();
//!
//! let harbor = graph.insert_edge(dock, plaza, "Harbor_St").unwrap();
//! let main_st = graph.insert_edge(plaza, market, "Main_St").unwrap();
//! let ring = graph.insert_edge(dock, market, "Ring_Rd").unwrap();
//!
//! graph.set_edge_label(harbor, 1.5).unwrap();
//! graph.set_edge_label(main_st, 2.0).unwrap();
//! graph.set_edge_label(ring, 5.0).unwrap();
//!
//! let result = shortest_path(&graph, dock, market).unwrap().unwrap();
//! assert_eq!(result.edges, vec![harbor, main_st]);
//! assert_eq!(result.cost, 3.5);
//! ```

pub mod algo;
pub mod graph;
pub mod street;

pub use algo::{shortest_path, PathResult};
pub use graph::{EdgeId, GraphError, GraphResult, GraphStore, LabelValue, VertexId};
pub use street::{Route, RouteStep, StreetNetwork};

/// Crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
