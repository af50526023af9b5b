//! Core graph structure: routes grouped by origin town.

use std::collections::{BTreeSet, HashMap};

use crate::types::Route;

/// An immutable directed multigraph of towns joined by routes.
///
/// Routes leaving the same town keep the order in which they were supplied,
/// so the first route between a pair of towns is always the one found first.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// All routes, grouped by origin. Stable within each group.
    routes: Vec<Route>,
    /// Adjacency index: origin -> (start_index, count) in routes vec.
    adjacency: HashMap<String, (usize, usize)>,
    /// Every town named as an origin or a destination.
    towns: BTreeSet<String>,
}

impl RouteGraph {
    /// Build a graph from routes in input order.
    ///
    /// Duplicate (origin, destination) pairs are kept as given.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut graph = Self {
            routes: routes.into_iter().collect(),
            adjacency: HashMap::new(),
            towns: BTreeSet::new(),
        };
        graph.build_adjacency();
        graph
    }

    fn build_adjacency(&mut self) {
        // sort_by is stable: per-origin input order survives
        self.routes.sort_by(|a, b| a.origin.cmp(&b.origin));

        let mut i = 0;
        while i < self.routes.len() {
            let start = i;
            while i < self.routes.len() && self.routes[i].origin == self.routes[start].origin {
                self.towns.insert(self.routes[i].destination.clone());
                i += 1;
            }
            let origin = self.routes[start].origin.clone();
            self.towns.insert(origin.clone());
            self.adjacency.insert(origin, (start, i - start));
        }
    }

    /// Routes leaving `town`, in input order. Empty if the town has none.
    pub fn routes_from(&self, town: &str) -> &[Route] {
        if let Some(&(start, count)) = self.adjacency.get(town) {
            &self.routes[start..start + count]
        } else {
            &[]
        }
    }

    /// First route from `origin` to `destination`, by input order.
    pub fn first_route(&self, origin: &str, destination: &str) -> Option<&Route> {
        self.routes_from(origin)
            .iter()
            .find(|r| r.destination == destination)
    }

    /// Whether `town` appears anywhere in the graph.
    pub fn contains_town(&self, town: &str) -> bool {
        self.towns.contains(town)
    }

    /// All towns, sorted by name.
    pub fn towns(&self) -> impl Iterator<Item = &str> {
        self.towns.iter().map(String::as_str)
    }

    /// All routes, grouped by origin.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of towns.
    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    /// Number of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of towns with at least one outgoing route.
    pub fn origin_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl FromIterator<Route> for RouteGraph {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self::from_routes(iter)
    }
}
