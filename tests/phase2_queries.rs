//! Phase 2 tests: Query engine.

use rand::{Rng, SeedableRng};

use town_routes::config::QueryLimits;
use town_routes::engine::{QueryEngine, StopLimit, TripParams};
use town_routes::graph::{RouteGraph, RouteGraphBuilder};
use town_routes::types::RouteError;

// ==================== Helper ====================

/// The standard five-town network.
fn standard_graph() -> RouteGraph {
    RouteGraphBuilder::new()
        .route("A", "B", 5)
        .route("B", "C", 4)
        .route("C", "D", 8)
        .route("D", "C", 8)
        .route("D", "E", 6)
        .route("A", "D", 5)
        .route("C", "E", 2)
        .route("E", "B", 3)
        .route("A", "E", 7)
        .build()
}

/// A random graph over `towns` towns with small distances.
fn random_graph(seed: u64, towns: usize, routes: usize) -> RouteGraph {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut builder = RouteGraphBuilder::new();
    for _ in 0..routes {
        let from = format!("T{}", rng.gen_range(0..towns));
        let to = format!("T{}", rng.gen_range(0..towns));
        builder.route(&from, &to, rng.gen_range(1..10));
    }
    builder.build()
}

// ==================== Path Distance ====================

#[test]
fn test_path_distance_standard() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(engine.path_distance(&graph, &["A", "B", "C"]).unwrap(), Some(9));
    assert_eq!(engine.path_distance(&graph, &["A", "D"]).unwrap(), Some(5));
    assert_eq!(engine.path_distance(&graph, &["A", "D", "C"]).unwrap(), Some(13));
    assert_eq!(
        engine
            .path_distance(&graph, &["A", "E", "B", "C", "D"])
            .unwrap(),
        Some(22)
    );
    assert_eq!(engine.path_distance(&graph, &["A", "E", "D"]).unwrap(), None);
}

#[test]
fn test_path_distance_single_hop_equals_route_distance() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    for route in graph.routes() {
        let towns = [route.origin.as_str(), route.destination.as_str()];
        assert_eq!(
            engine.path_distance(&graph, &towns).unwrap(),
            Some(route.distance)
        );
    }
}

#[test]
fn test_path_distance_missing_hop_anywhere() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    // missing at the first, middle and last hop
    assert_eq!(engine.path_distance(&graph, &["B", "A", "D"]).unwrap(), None);
    assert_eq!(engine.path_distance(&graph, &["A", "B", "E", "B"]).unwrap(), None);
    assert_eq!(engine.path_distance(&graph, &["A", "B", "C", "A"]).unwrap(), None);
}

#[test]
fn test_path_distance_unknown_town() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(engine.path_distance(&graph, &["Z", "A"]).unwrap(), None);
    assert_eq!(engine.path_distance(&graph, &["A", "Z"]).unwrap(), None);
}

#[test]
fn test_path_distance_first_match_not_cheapest() {
    let graph = RouteGraphBuilder::new()
        .route("A", "B", 9)
        .route("A", "B", 1)
        .build();
    let engine = QueryEngine::new();
    assert_eq!(engine.path_distance(&graph, &["A", "B"]).unwrap(), Some(9));
}

#[test]
fn test_path_distance_accepts_owned_strings() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    let towns = vec!["A".to_string(), "D".to_string()];
    assert_eq!(engine.path_distance(&graph, &towns).unwrap(), Some(5));
}

#[test]
fn test_path_distance_overflow_is_an_error() {
    let graph = RouteGraphBuilder::new()
        .route("A", "B", u64::MAX)
        .route("B", "C", 5)
        .build();
    let engine = QueryEngine::new();
    assert_eq!(engine.path_distance(&graph, &["A", "B"]).unwrap(), Some(u64::MAX));
    let err = engine.path_distance(&graph, &["A", "B", "C"]).unwrap_err();
    assert!(matches!(err, RouteError::DistanceOverflow));
}

#[test]
fn test_path_distance_too_short() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    let err = engine.path_distance(&graph, &["A"]).unwrap_err();
    assert!(matches!(err, RouteError::PathTooShort(1)));
    let none: [&str; 0] = [];
    let err = engine.path_distance(&graph, &none).unwrap_err();
    assert!(matches!(err, RouteError::PathTooShort(0)));
}

// ==================== Stop-Bounded Trips ====================

#[test]
fn test_trips_max_stops_standard() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    // C=>D=>C, C=>E=>B=>C
    assert_eq!(engine.count_trips_max_stops(&graph, "C", "C", 3).unwrap(), 2);
}

#[test]
fn test_trips_exact_stops_standard() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    // A=>B=>C=>D=>C, A=>D=>C=>D=>C, A=>D=>E=>B=>C
    assert_eq!(engine.count_trips_exact_stops(&graph, "A", "C", 4).unwrap(), 3);
}

#[test]
fn test_trips_via_params() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    let trips = engine
        .count_trips(
            &graph,
            TripParams {
                start: "C",
                end: "C",
                stops: 3,
                limit: StopLimit::AtMost,
            },
        )
        .unwrap();
    assert_eq!(trips, 2);
}

#[test]
fn test_zero_stops_never_counts() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    for town in ["A", "B", "C", "D", "E", "Z"] {
        assert_eq!(engine.count_trips_max_stops(&graph, town, town, 0).unwrap(), 0);
        assert_eq!(engine.count_trips_exact_stops(&graph, town, town, 0).unwrap(), 0);
    }
}

#[test]
fn test_trips_unknown_towns() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(engine.count_trips_max_stops(&graph, "Z", "A", 5).unwrap(), 0);
    assert_eq!(engine.count_trips_max_stops(&graph, "A", "Z", 5).unwrap(), 0);
}

#[test]
fn test_exact_stops_follows_successor_recurrence() {
    let engine = QueryEngine::new();
    for seed in 0..5 {
        let graph = random_graph(seed, 5, 12);
        for stops in 2..6 {
            for start in graph.towns() {
                for end in graph.towns() {
                    let direct = engine
                        .count_trips_exact_stops(&graph, start, end, stops)
                        .unwrap();
                    let via_next: u64 = graph
                        .routes_from(start)
                        .iter()
                        .map(|r| {
                            engine
                                .count_trips_exact_stops(&graph, &r.destination, end, stops - 1)
                                .unwrap()
                        })
                        .sum();
                    assert_eq!(direct, via_next, "{start} => {end} in {stops}");
                }
            }
        }
    }
}

#[test]
fn test_max_stops_is_sum_of_exact_stops() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    let total: u64 = (1..=5)
        .map(|n| engine.count_trips_exact_stops(&graph, "A", "C", n).unwrap())
        .sum();
    assert_eq!(engine.count_trips_max_stops(&graph, "A", "C", 5).unwrap(), total);
}

#[test]
fn test_negative_stop_bound_rejected() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    let err = engine
        .count_trips_max_stops(&graph, "C", "C", -1)
        .unwrap_err();
    assert!(matches!(err, RouteError::InvalidBound { value: -1, .. }));
    let err = engine
        .count_trips_exact_stops(&graph, "C", "C", -3)
        .unwrap_err();
    assert!(matches!(err, RouteError::InvalidBound { value: -3, .. }));
}

// ==================== Shortest Route ====================

#[test]
fn test_shortest_route_standard() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(engine.shortest_route(&graph, "A", "C").unwrap(), Some(9));
    assert_eq!(engine.shortest_route(&graph, "B", "B").unwrap(), Some(9));
}

#[test]
fn test_shortest_route_to_self_is_never_zero() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    for town in graph.towns() {
        assert_ne!(engine.shortest_route(&graph, town, town).unwrap(), Some(0));
    }
    // A has no way back
    assert_eq!(engine.shortest_route(&graph, "A", "A").unwrap(), None);
}

#[test]
fn test_shortest_route_unreachable() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(engine.shortest_route(&graph, "C", "A").unwrap(), None);
    assert_eq!(engine.shortest_route(&graph, "Z", "A").unwrap(), None);
    assert_eq!(engine.shortest_route(&graph, "A", "Z").unwrap(), None);
}

#[test]
fn test_shortest_route_prefers_longer_path_with_less_distance() {
    let graph = RouteGraphBuilder::new()
        .route("S", "T", 100)
        .route("S", "M", 1)
        .route("M", "N", 1)
        .route("N", "T", 1)
        .build();
    let engine = QueryEngine::new();
    assert_eq!(engine.shortest_route(&graph, "S", "T").unwrap(), Some(3));
}

// ==================== Distance-Bounded Trips ====================

#[test]
fn test_trips_within_distance_standard() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(
        engine
            .count_trips_within_distance(&graph, "C", "C", 30)
            .unwrap(),
        7
    );
}

#[test]
fn test_trips_within_distance_is_strict() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    // C=>E=>B=>C is exactly 9
    assert_eq!(
        engine.count_trips_within_distance(&graph, "C", "C", 9).unwrap(),
        0
    );
    assert_eq!(
        engine.count_trips_within_distance(&graph, "C", "C", 10).unwrap(),
        1
    );
}

#[test]
fn test_trips_within_distance_non_decreasing() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    for (start, end) in [("C", "C"), ("A", "C"), ("B", "E")] {
        let mut previous = 0;
        for max in 0..45 {
            let trips = engine
                .count_trips_within_distance(&graph, start, end, max)
                .unwrap();
            assert!(trips >= previous, "{start} => {end} below {max}");
            previous = trips;
        }
    }
}

#[test]
fn test_trips_within_distance_unknown_towns() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    assert_eq!(
        engine.count_trips_within_distance(&graph, "Z", "C", 30).unwrap(),
        0
    );
}

#[test]
fn test_negative_distance_bound_rejected() {
    let graph = standard_graph();
    let engine = QueryEngine::new();
    let err = engine
        .count_trips_within_distance(&graph, "C", "C", -30)
        .unwrap_err();
    assert!(matches!(err, RouteError::InvalidBound { value: -30, .. }));
}

// ==================== Limits ====================

#[test]
fn test_search_limit_exceeded() {
    let graph = standard_graph();
    let engine = QueryEngine::with_limits(QueryLimits { max_expansions: 10 });
    let err = engine
        .count_trips_within_distance(&graph, "C", "C", 30)
        .unwrap_err();
    assert!(matches!(err, RouteError::SearchLimitExceeded(10)));

    let err = engine.count_trips_max_stops(&graph, "A", "C", 10).unwrap_err();
    assert!(matches!(err, RouteError::SearchLimitExceeded(10)));
}

#[test]
fn test_zero_distance_cycle_is_stopped_by_limit() {
    let graph = RouteGraphBuilder::new()
        .route("A", "B", 0)
        .route("B", "A", 0)
        .build();
    let engine = QueryEngine::with_limits(QueryLimits {
        max_expansions: 1_000,
    });
    let err = engine
        .count_trips_within_distance(&graph, "A", "A", 1)
        .unwrap_err();
    assert!(matches!(err, RouteError::SearchLimitExceeded(1_000)));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let graph = &standard_graph();
    let engine = &QueryEngine::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || engine.count_trips_within_distance(graph, "C", "C", 30)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 7);
        }
    });
}
