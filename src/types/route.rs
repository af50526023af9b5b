//! The route struct: one directed, weighted connection between two towns.

use serde::Serialize;

/// A directed connection from one town to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    /// Town the route leaves from.
    pub origin: String,
    /// Town the route arrives at.
    pub destination: String,
    /// Length of the route.
    pub distance: u64,
}

impl Route {
    /// Create a new route.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, distance: u64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=>{} ({})", self.origin, self.destination, self.distance)
    }
}
