//! Town routes — queries over a directed, weighted graph of towns.
//!
//! Routes are loaded once into an immutable [`RouteGraph`]; a [`QueryEngine`]
//! then answers distance, trip-count and shortest-route queries against it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{QueryLimits, RoutesConfig};
pub use engine::{QueryEngine, StopLimit, TripParams};
pub use format::RouteReader;
pub use graph::{RouteGraph, RouteGraphBuilder, WalkLimit};
pub use types::{Route, RouteError, RouteResult};
