//! Reads route lists into routes and graphs.
//!
//! One route per line as `origin,destination,distance`, for example `A,B,5`.
//! Blank lines and lines starting with `#` are skipped.

use std::io::Read;
use std::path::Path;

use crate::graph::RouteGraph;
use crate::types::{Route, RouteError, RouteResult};

/// Reader for text route lists.
pub struct RouteReader;

impl RouteReader {
    /// Read a route list file.
    pub fn read_from_file(path: &Path) -> RouteResult<Vec<Route>> {
        let text = std::fs::read_to_string(path)?;
        let routes = Self::parse_str(&text)?;
        log::info!("Loaded {} routes from {}", routes.len(), path.display());
        Ok(routes)
    }

    /// Read a route list from any reader.
    pub fn read_from(reader: &mut impl Read) -> RouteResult<Vec<Route>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse_str(&text)
    }

    /// Read a route list file straight into a graph.
    pub fn load_graph(path: &Path) -> RouteResult<RouteGraph> {
        Self::read_from_file(path).map(RouteGraph::from_routes)
    }

    /// Parse a whole route list.
    pub fn parse_str(text: &str) -> RouteResult<Vec<Route>> {
        let mut routes = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            routes.push(parse_route_line(trimmed, idx + 1)?);
        }
        Ok(routes)
    }
}

/// Parse a single `origin,destination,distance` record.
pub fn parse_route_line(line: &str, line_no: usize) -> RouteResult<Route> {
    let parse_err = |message: String| RouteError::Parse {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[origin, destination, distance] = fields.as_slice() else {
        return Err(parse_err(format!(
            "expected 3 comma-separated fields, found {}",
            fields.len()
        )));
    };

    if origin.is_empty() || destination.is_empty() {
        return Err(parse_err("town name is empty".to_string()));
    }

    let distance: u64 = distance
        .parse()
        .map_err(|_| parse_err(format!("invalid distance '{distance}'")))?;

    Ok(Route::new(origin, destination, distance))
}
