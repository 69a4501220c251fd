//! Street-network routing layer
//!
//! Maps intersection names to graph vertices, loads road maps from text
//! files, and drives the shortest-path search to produce renderable
//! routes.

pub mod network;
pub mod route;

pub use network::StreetNetwork;
pub use route::{Route, RouteStep};
