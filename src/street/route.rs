//! Computed routes and their rendering

use serde::Serialize;
use std::fmt;

/// One traversed road segment of a route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteStep {
    pub road: String,
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// A minimum-distance route between two named intersections.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub steps: Vec<RouteStep>,
    pub total_distance: f64,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route from {} to {} (total distance: {:.2})",
            self.start, self.end, self.total_distance
        )?;
        for step in &self.steps {
            write!(
                f,
                "\n  {} -> {} via {} ({:.2})",
                step.from, step.to, step.road, step.distance
            )?;
        }
        Ok(())
    }
}
