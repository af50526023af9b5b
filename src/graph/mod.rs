//! In-memory route graph and the traversals that run over it.

pub mod builder;
pub mod route_graph;
pub mod traversal;

pub use builder::RouteGraphBuilder;
pub use route_graph::RouteGraph;
pub use traversal::{count_walks, shortest_simple_path, WalkLimit};
