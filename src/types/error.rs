//! Error types for the town-routes library.

use thiserror::Error;

/// All errors that can occur in the town-routes library.
///
/// A missing route or an unreachable destination is not an error: queries
/// report those as `None`.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A stop or distance bound was negative.
    #[error("Invalid {name}: {value} (must be non-negative)")]
    InvalidBound { name: &'static str, value: i64 },

    /// A path query needs at least two towns.
    #[error("A route needs at least two towns, got {0}")]
    PathTooShort(usize),

    /// A query expanded more walk states than the configured budget allows.
    #[error("Search limit exceeded: more than {0} states expanded")]
    SearchLimitExceeded(u64),

    /// A total distance does not fit in a u64.
    #[error("Total distance overflows a 64-bit integer")]
    DistanceOverflow,

    /// Malformed record in a route list.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for town-routes operations.
pub type RouteResult<T> = Result<T, RouteError>;
