//! All data types for the town-routes library.

pub mod error;
pub mod route;

pub use error::{RouteError, RouteResult};
pub use route::Route;
