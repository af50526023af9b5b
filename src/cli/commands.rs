//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::engine::{QueryEngine, StopLimit, TripParams};
use crate::format::RouteReader;
use crate::graph::RouteGraph;
use crate::types::RouteResult;

/// Text printed when a route does not exist.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// Display information about a route list.
pub fn cmd_info(path: &Path, json: bool) -> RouteResult<()> {
    let graph = RouteReader::load_graph(path)?;
    let towns: Vec<&str> = graph.towns().collect();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "towns": towns,
            "town_count": graph.town_count(),
            "route_count": graph.route_count(),
            "origin_count": graph.origin_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Towns: {} ({})", graph.town_count(), towns.join(", "));
        println!("Routes: {}", graph.route_count());
        println!("Towns with departures: {}", graph.origin_count());
    }
    Ok(())
}

/// Distance along an explicit sequence of towns.
pub fn cmd_distance(
    path: &Path,
    engine: &QueryEngine,
    towns: &[String],
    json: bool,
) -> RouteResult<()> {
    let graph = RouteReader::load_graph(path)?;
    let distance = engine.path_distance(&graph, towns)?;

    if json {
        let out = serde_json::json!({
            "route": towns,
            "distance": distance,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", format_distance(distance));
    }
    Ok(())
}

/// Count trips bounded by number of stops.
pub fn cmd_trips(
    path: &Path,
    engine: &QueryEngine,
    start: &str,
    end: &str,
    stops: i64,
    limit: StopLimit,
    json: bool,
) -> RouteResult<()> {
    let graph = RouteReader::load_graph(path)?;
    let trips = engine.count_trips(
        &graph,
        TripParams {
            start,
            end,
            stops,
            limit,
        },
    )?;

    if json {
        let out = serde_json::json!({
            "from": start,
            "to": end,
            "stops": stops,
            "limit": limit,
            "trips": trips,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", trips);
    }
    Ok(())
}

/// Shortest route between two towns.
pub fn cmd_shortest(
    path: &Path,
    engine: &QueryEngine,
    start: &str,
    end: &str,
    json: bool,
) -> RouteResult<()> {
    let graph = RouteReader::load_graph(path)?;
    let distance = engine.shortest_route(&graph, start, end)?;

    if json {
        let out = serde_json::json!({
            "from": start,
            "to": end,
            "distance": distance,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", format_distance(distance));
    }
    Ok(())
}

/// Count trips shorter than a distance.
pub fn cmd_trips_within(
    path: &Path,
    engine: &QueryEngine,
    start: &str,
    end: &str,
    max_distance: i64,
    json: bool,
) -> RouteResult<()> {
    let graph = RouteReader::load_graph(path)?;
    let trips = engine.count_trips_within_distance(&graph, start, end, max_distance)?;

    if json {
        let out = serde_json::json!({
            "from": start,
            "to": end,
            "max_distance": max_distance,
            "trips": trips,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", trips);
    }
    Ok(())
}

/// One line of the standard report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// Output number, starting at 1.
    pub number: usize,
    /// What was asked.
    pub query: String,
    /// Rendered answer.
    pub answer: String,
}

/// Run the ten standard queries over towns A to E.
pub fn build_report(graph: &RouteGraph, engine: &QueryEngine) -> RouteResult<Vec<ReportLine>> {
    let mut lines = Vec::with_capacity(10);
    let mut push = |query: String, answer: String| {
        let number = lines.len() + 1;
        lines.push(ReportLine {
            number,
            query,
            answer,
        });
    };

    for towns in [
        &["A", "B", "C"][..],
        &["A", "D"][..],
        &["A", "D", "C"][..],
        &["A", "E", "B", "C", "D"][..],
        &["A", "E", "D"][..],
    ] {
        push(
            format!("distance of route {}", towns.join("=>")),
            format_distance(engine.path_distance(graph, towns)?),
        );
    }

    push(
        "trips C to C with at most 3 stops".to_string(),
        engine.count_trips_max_stops(graph, "C", "C", 3)?.to_string(),
    );
    push(
        "trips A to C with exactly 4 stops".to_string(),
        engine.count_trips_exact_stops(graph, "A", "C", 4)?.to_string(),
    );
    push(
        "shortest route A to C".to_string(),
        format_distance(engine.shortest_route(graph, "A", "C")?),
    );
    push(
        "shortest route B to B".to_string(),
        format_distance(engine.shortest_route(graph, "B", "B")?),
    );
    push(
        "trips C to C with distance less than 30".to_string(),
        engine
            .count_trips_within_distance(graph, "C", "C", 30)?
            .to_string(),
    );

    Ok(lines)
}

/// Print the standard report for a route list.
pub fn cmd_report(path: &Path, engine: &QueryEngine, json: bool) -> RouteResult<()> {
    let graph = RouteReader::load_graph(path)?;
    let lines = build_report(&graph, engine)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&lines).unwrap_or_default()
        );
    } else {
        for line in &lines {
            println!("Output #{}: {}", line.number, line.answer);
        }
    }
    Ok(())
}

fn format_distance(distance: Option<u64>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => NO_SUCH_ROUTE.to_string(),
    }
}
