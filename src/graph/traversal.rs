//! Graph traversal algorithms: bounded walk counting and simple-path search.

use std::collections::HashSet;

use crate::types::{RouteError, RouteResult};

use super::RouteGraph;

/// Cut-off applied to a walk while counting trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkLimit {
    /// At most this many stops; every arrival at the destination counts.
    MaxStops(u64),
    /// Exactly this many stops; earlier arrivals keep walking but don't count.
    ExactStops(u64),
    /// Total distance strictly below this value.
    MaxDistance(u64),
}

impl WalkLimit {
    /// Whether a walk of this shape may still be extended.
    fn admits(self, stops: u64, distance: u64) -> bool {
        match self {
            Self::MaxStops(limit) | Self::ExactStops(limit) => stops <= limit,
            Self::MaxDistance(limit) => distance < limit,
        }
    }

    /// Whether an admitted walk ending at the destination is a trip.
    fn counts(self, stops: u64) -> bool {
        stops > 0
            && match self {
                Self::ExactStops(limit) => stops == limit,
                Self::MaxStops(_) | Self::MaxDistance(_) => true,
            }
    }
}

struct Frame<'a> {
    town: &'a str,
    stops: u64,
    distance: u64,
}

/// Count every walk from `start` that forms a trip to `end` under `limit`.
///
/// Walks may revisit towns and routes. A walk passing through `end` is
/// counted each time it arrives there and then keeps going. Uses an explicit
/// stack, so large stop limits don't grow the call stack. Fails once more
/// than `max_expansions` walk states have been expanded, which also stops
/// zero-distance cycles under a distance limit.
pub fn count_walks<'a>(
    graph: &'a RouteGraph,
    start: &'a str,
    end: &str,
    limit: WalkLimit,
    max_expansions: u64,
) -> RouteResult<u64> {
    if !limit.admits(0, 0) {
        return Ok(0);
    }

    let mut stack = vec![Frame {
        town: start,
        stops: 0,
        distance: 0,
    }];
    let mut expanded: u64 = 0;
    let mut trips: u64 = 0;

    while let Some(frame) = stack.pop() {
        expanded += 1;
        if expanded > max_expansions {
            return Err(RouteError::SearchLimitExceeded(max_expansions));
        }

        if frame.town == end && limit.counts(frame.stops) {
            trips += 1;
        }

        for route in graph.routes_from(frame.town) {
            let next = Frame {
                town: &route.destination,
                stops: frame.stops + 1,
                distance: frame.distance.saturating_add(route.distance),
            };
            if limit.admits(next.stops, next.distance) {
                stack.push(next);
            }
        }
    }

    Ok(trips)
}

/// Depth-first search over simple paths with a backtracking on-path set.
struct SimplePathSearch<'a, 'e> {
    graph: &'a RouteGraph,
    end: &'e str,
    on_path: HashSet<&'a str>,
    expanded: u64,
    max_expansions: u64,
}

impl<'a> SimplePathSearch<'a, '_> {
    fn visit(&mut self, town: &'a str, stops: u64, distance: u64) -> RouteResult<Option<u64>> {
        // Arrival is checked first so a trip may close a cycle on its start.
        if stops > 0 && town == self.end {
            return Ok(Some(distance));
        }
        if !self.on_path.insert(town) {
            return Ok(None);
        }

        self.expanded += 1;
        if self.expanded > self.max_expansions {
            return Err(RouteError::SearchLimitExceeded(self.max_expansions));
        }

        let graph = self.graph;
        let mut best: Option<u64> = None;
        for route in graph.routes_from(town) {
            let next = distance
                .checked_add(route.distance)
                .ok_or(RouteError::DistanceOverflow)?;
            let found = self.visit(&route.destination, stops + 1, next)?;
            if let Some(d) = found {
                best = Some(best.map_or(d, |b| b.min(d)));
            }
        }

        self.on_path.remove(town);
        Ok(best)
    }
}

/// Shortest total distance over simple paths from `start` to `end`.
///
/// A path needs at least one stop, so when `start == end` the result is the
/// shortest cycle back to `start`. Returns `None` if no such path exists.
/// Fails with `DistanceOverflow` if a path's total does not fit in a u64.
pub fn shortest_simple_path<'a>(
    graph: &'a RouteGraph,
    start: &'a str,
    end: &str,
    max_expansions: u64,
) -> RouteResult<Option<u64>> {
    let mut search = SimplePathSearch {
        graph,
        end,
        on_path: HashSet::new(),
        expanded: 0,
        max_expansions,
    };
    search.visit(start, 0, 0)
}
