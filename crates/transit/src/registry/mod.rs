//! Registries owning all known stops and routes.
//!
//! One registry of each kind per process by convention: construct it once at
//! startup and pass it by reference to collaborators. Entity identity for a
//! given key is stable for the registry's lifetime; repeated lookups with
//! the same key address the same entry. Tests construct isolated instances
//! freely.

pub mod routes;
pub mod stops;

pub use routes::RouteRegistry;
pub use stops::{StopRegistry, SEARCH_RADIUS_M};
