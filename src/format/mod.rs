//! Text I/O for route lists.

pub mod reader;

pub use reader::{parse_route_line, RouteReader};
