//! Street network layered on the graph store
//!
//! A road map is a text file with one road segment per line:
//!
//! ```text
//! # comment
//! FROM TO DISTANCE NAME
//! ```
//!
//! Fields are whitespace separated; blank lines and `#` comments are
//! skipped. Each segment connects two intersections in both directions
//! (streets are two-way), with the distance attached as a float edge
//! label and the road name as the edge element.

use super::route::{Route, RouteStep};
use crate::algo::dijkstra::{edge_weight, shortest_path};
use crate::graph::{GraphError, GraphResult, GraphStore, VertexId};
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{error, info, warn};

/// A road network: intersections keyed by display name, connected by
/// named road segments with non-negative distances.
#[derive(Debug)]
pub struct StreetNetwork {
    graph: GraphStore<String, String>,
    intersections: IndexMap<String, VertexId>,
}

impl StreetNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        StreetNetwork {
            graph: GraphStore::new(),
            intersections: IndexMap::new(),
        }
    }

    /// Load a network from a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open map file {}", path.display()))?;
        let network = Self::from_reader(BufReader::new(file))?;
        info!(
            intersections = network.intersection_count(),
            roads = network.road_count(),
            "loaded street network from {}",
            path.display()
        );
        Ok(network)
    }

    /// Parse a network from any buffered reader of map data.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut network = Self::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.context("failed to read map data")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let &[from, to, distance, name] = fields.as_slice() else {
                bail!(
                    "line {}: expected `FROM TO DISTANCE NAME`, got {:?}",
                    lineno + 1,
                    line
                );
            };
            let distance: f64 = distance
                .parse()
                .with_context(|| format!("line {}: invalid distance {:?}", lineno + 1, distance))?;
            if distance < 0.0 {
                bail!("line {}: negative distance {}", lineno + 1, distance);
            }

            network.add_road(from, to, name, distance)?;
        }
        Ok(network)
    }

    /// Add a two-way road segment, inserting either endpoint if absent.
    ///
    /// Self-loops and segments already present are skipped with a
    /// warning; map data routinely repeats them.
    pub fn add_road(&mut self, from: &str, to: &str, name: &str, distance: f64) -> Result<()> {
        if from == to {
            warn!(road = name, "skipping self-loop road segment at {from}");
            return Ok(());
        }
        let from_v = self.intersection_or_insert(from)?;
        let to_v = self.intersection_or_insert(to)?;
        self.link(from_v, to_v, name, distance)?;
        self.link(to_v, from_v, name, distance)?;
        Ok(())
    }

    fn intersection_or_insert(&mut self, name: &str) -> Result<VertexId> {
        if let Some(&v) = self.intersections.get(name) {
            return Ok(v);
        }
        let v = self.graph.insert_vertex(name.to_string())?;
        self.intersections.insert(name.to_string(), v);
        Ok(v)
    }

    fn link(&mut self, from: VertexId, to: VertexId, name: &str, distance: f64) -> Result<()> {
        match self.graph.insert_edge(from, to, name.to_string()) {
            Ok(edge) => {
                self.graph.set_edge_label(edge, distance)?;
                Ok(())
            }
            Err(GraphError::InsertionFailed(_)) => {
                warn!(road = name, "skipping duplicate road segment");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Vertex handle of a named intersection, if known.
    pub fn intersection(&self, name: &str) -> Option<VertexId> {
        self.intersections.get(name).copied()
    }

    /// Validate an endpoint name, failing with an argument error naming
    /// the unknown endpoint.
    pub fn check_valid_endpoint(&self, name: &str) -> Result<VertexId> {
        match self.intersection(name) {
            Some(v) => Ok(v),
            None => bail!("{name} is not a known intersection"),
        }
    }

    /// Read access to the underlying graph.
    pub fn graph(&self) -> &GraphStore<String, String> {
        &self.graph
    }

    /// Number of intersections.
    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    /// Number of directed road segments.
    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All intersection names in insertion order.
    pub fn intersection_names(&self) -> impl Iterator<Item = &str> {
        self.intersections.keys().map(String::as_str)
    }

    /// Compute the minimum-distance route between two named intersections.
    ///
    /// An unknown endpoint name is recovered locally: a diagnostic is
    /// logged and `Ok(None)` returned. An unreachable destination also
    /// yields `Ok(None)`. Graph handle misuse propagates as
    /// [`GraphError::InvalidPosition`].
    pub fn find_route(&self, start: &str, end: &str) -> GraphResult<Option<Route>> {
        let (start_v, end_v) = match (
            self.check_valid_endpoint(start),
            self.check_valid_endpoint(end),
        ) {
            (Ok(s), Ok(e)) => (s, e),
            (Err(err), _) | (_, Err(err)) => {
                error!("{err}");
                return Ok(None);
            }
        };

        let Some(result) = shortest_path(&self.graph, start_v, end_v)? else {
            info!("no route between {start} and {end}");
            return Ok(None);
        };

        let mut steps = Vec::with_capacity(result.edges.len());
        for &edge in &result.edges {
            let from_v = self.graph.source(edge)?;
            let to_v = self.graph.target(edge)?;
            steps.push(RouteStep {
                road: self.graph.edge_element(edge)?.clone(),
                from: self.graph.vertex_element(from_v)?.clone(),
                to: self.graph.vertex_element(to_v)?.clone(),
                distance: edge_weight(&self.graph, edge)?,
            });
        }

        Ok(Some(Route {
            start: start.to_string(),
            end: end.to_string(),
            steps,
            total_distance: result.cost,
        }))
    }
}

impl Default for StreetNetwork {
    fn default() -> Self {
        Self::new()
    }
}
