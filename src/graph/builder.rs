//! Fluent API for building RouteGraph instances.

use crate::types::Route;

use super::RouteGraph;

/// Fluent builder for constructing a RouteGraph.
#[derive(Debug, Default)]
pub struct RouteGraphBuilder {
    routes: Vec<Route>,
}

impl RouteGraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route between two towns.
    pub fn route(&mut self, origin: &str, destination: &str, distance: u64) -> &mut Self {
        self.routes.push(Route::new(origin, destination, distance));
        self
    }

    /// Add an already constructed route.
    pub fn add_route(&mut self, route: Route) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Add every route from an iterator, keeping their order.
    pub fn add_routes(&mut self, routes: impl IntoIterator<Item = Route>) -> &mut Self {
        self.routes.extend(routes);
        self
    }

    /// Number of routes added so far.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes have been added.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the final RouteGraph.
    pub fn build(&mut self) -> RouteGraph {
        RouteGraph::from_routes(std::mem::take(&mut self.routes))
    }
}
