//! Query executor — all route query types.

use serde::Serialize;

use crate::config::QueryLimits;
use crate::graph::traversal::{count_walks, shortest_simple_path, WalkLimit};
use crate::graph::RouteGraph;
use crate::types::{RouteError, RouteResult};

/// How a stop bound is applied when counting trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopLimit {
    /// Trips with one up to `stops` stops.
    AtMost,
    /// Trips with exactly `stops` stops.
    Exactly,
}

/// Parameters for a stop-bounded trip count.
#[derive(Debug, Clone, Copy)]
pub struct TripParams<'q> {
    /// Town the trips start from.
    pub start: &'q str,
    /// Town the trips must end at.
    pub end: &'q str,
    /// Stop bound. Negative values are rejected.
    pub stops: i64,
    /// Whether `stops` is a maximum or an exact count.
    pub limit: StopLimit,
}

/// Runs read-only queries against a RouteGraph.
///
/// Holds no per-query state, so one engine can serve any number of graphs
/// and callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    limits: QueryLimits,
}

impl QueryEngine {
    /// Create a query engine with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query engine with explicit limits.
    pub fn with_limits(limits: QueryLimits) -> Self {
        Self { limits }
    }

    /// The limits this engine applies.
    pub fn limits(&self) -> QueryLimits {
        self.limits
    }

    /// Total distance along an explicit sequence of towns.
    ///
    /// Each hop uses the first route between the two towns in input order.
    /// Returns `None` if any hop has no route, and fails with
    /// `DistanceOverflow` if the total does not fit in a u64.
    pub fn path_distance<S: AsRef<str>>(
        &self,
        graph: &RouteGraph,
        towns: &[S],
    ) -> RouteResult<Option<u64>> {
        if towns.len() < 2 {
            return Err(RouteError::PathTooShort(towns.len()));
        }

        let mut total: u64 = 0;
        for pair in towns.windows(2) {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            match graph.first_route(from, to) {
                Some(route) => {
                    total = total
                        .checked_add(route.distance)
                        .ok_or(RouteError::DistanceOverflow)?;
                }
                None => {
                    log::debug!("path_distance: no route {} => {}", from, to);
                    return Ok(None);
                }
            }
        }

        log::debug!("path_distance over {} towns = {}", towns.len(), total);
        Ok(Some(total))
    }

    /// Count trips from `start` to `end` bounded by number of stops.
    pub fn count_trips(&self, graph: &RouteGraph, params: TripParams<'_>) -> RouteResult<u64> {
        let stops = check_bound("stop bound", params.stops)?;
        let limit = match params.limit {
            StopLimit::AtMost => WalkLimit::MaxStops(stops),
            StopLimit::Exactly => WalkLimit::ExactStops(stops),
        };

        let trips = self.run_count(graph, params.start, params.end, limit)?;
        log::debug!(
            "count_trips {} => {} ({:?} {}) = {}",
            params.start,
            params.end,
            params.limit,
            stops,
            trips
        );
        Ok(trips)
    }

    /// Count trips with between one and `max_stops` stops.
    pub fn count_trips_max_stops(
        &self,
        graph: &RouteGraph,
        start: &str,
        end: &str,
        max_stops: i64,
    ) -> RouteResult<u64> {
        self.count_trips(
            graph,
            TripParams {
                start,
                end,
                stops: max_stops,
                limit: StopLimit::AtMost,
            },
        )
    }

    /// Count trips with exactly `stops` stops.
    pub fn count_trips_exact_stops(
        &self,
        graph: &RouteGraph,
        start: &str,
        end: &str,
        stops: i64,
    ) -> RouteResult<u64> {
        self.count_trips(
            graph,
            TripParams {
                start,
                end,
                stops,
                limit: StopLimit::Exactly,
            },
        )
    }

    /// Shortest distance of a trip from `start` to `end` with no repeated town.
    ///
    /// When `start == end` this is the shortest cycle through `start`.
    /// Returns `None` when no trip exists.
    pub fn shortest_route(
        &self,
        graph: &RouteGraph,
        start: &str,
        end: &str,
    ) -> RouteResult<Option<u64>> {
        let result = shortest_simple_path(graph, start, end, self.limits.max_expansions)
            .inspect_err(|e| log::warn!("shortest_route {} => {}: {}", start, end, e))?;
        log::debug!("shortest_route {} => {} = {:?}", start, end, result);
        Ok(result)
    }

    /// Count trips from `start` to `end` whose total distance is strictly
    /// less than `max_distance`.
    pub fn count_trips_within_distance(
        &self,
        graph: &RouteGraph,
        start: &str,
        end: &str,
        max_distance: i64,
    ) -> RouteResult<u64> {
        let max_distance = check_bound("distance bound", max_distance)?;
        let trips = self.run_count(graph, start, end, WalkLimit::MaxDistance(max_distance))?;
        log::debug!(
            "count_trips_within_distance {} => {} (< {}) = {}",
            start,
            end,
            max_distance,
            trips
        );
        Ok(trips)
    }

    fn run_count(
        &self,
        graph: &RouteGraph,
        start: &str,
        end: &str,
        limit: WalkLimit,
    ) -> RouteResult<u64> {
        count_walks(graph, start, end, limit, self.limits.max_expansions)
            .inspect_err(|e| log::warn!("count {} => {} ({:?}): {}", start, end, limit, e))
    }
}

fn check_bound(name: &'static str, value: i64) -> RouteResult<u64> {
    u64::try_from(value).map_err(|_| RouteError::InvalidBound { name, value })
}
