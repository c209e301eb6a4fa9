//! Transit data models and the crate error type.

pub mod arrival;
pub mod route;
pub mod stop;
pub mod types;

// Re-exports for convenience
pub use arrival::Arrival;
pub use route::{Route, RoutePattern};
pub use stop::Stop;
pub use types::{Result, TransitError};
