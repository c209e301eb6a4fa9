//! # busmap-transit
//!
//! Spatial/relational core of a metropolitan bus-network viewer.
//!
//! Tracks stops, routes, and route patterns for a bus network and answers
//! the two spatial questions a map client asks: which stop is nearest to a
//! point, and does a viewport intersect a route segment.
//!
//! ## Features
//!
//! - **Upsert registries**: stops and routes are created lazily on first
//!   reference and enriched in place as richer feed data arrives
//! - **Stable identity**: one entity per key for the registry's lifetime
//! - **Viewport culling**: exact segment-rectangle intersection for deciding
//!   what to draw
//! - **Pluggable feeds** (optional): parsers for the stop and arrivals JSON
//!   feeds behind the `feeds` cargo feature
//!
//! ## Example
//!
//! ```
//! use busmap_transit::prelude::*;
//! use geo::Point;
//!
//! let mut stops = StopRegistry::new();
//! let mut routes = RouteRegistry::new();
//!
//! // Feed data arrives progressively; a stop referenced by id alone gets
//! // placeholder details until the stop feed fills them in.
//! let stop = stops.stop_with_details(
//!     50025,
//!     "W Broadway @ Macdonald St",
//!     Point::new(-123.1690, 49.2635),
//! );
//! routes.route_with_name("99", "UBC B-Line").add_stop(stop);
//!
//! let nearest = stops.nearest_to(Point::new(-123.1700, 49.2640));
//! assert_eq!(nearest.map(|s| s.id()), Some(StopId::new(50025)));
//!
//! // Viewport culling for the map layer
//! let viewport = Viewport::new(Point::new(-123.30, 49.30), Point::new(-123.00, 49.20));
//! assert!(viewport.contains(stops.get(50025).unwrap().location()));
//! ```

pub mod identifiers;
pub mod models;
pub mod registry;
pub mod spatial;

#[cfg(feature = "feeds")]
pub mod feeds;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::{PatternName, RouteNumber, StopId};
    pub use crate::models::{Arrival, Result, Route, RoutePattern, Stop, TransitError};
    pub use crate::registry::{RouteRegistry, StopRegistry, SEARCH_RADIUS_M};
    pub use crate::spatial::{distance_between, slope, Viewport, EARTH_RADIUS_M};

    #[cfg(feature = "feeds")]
    pub use crate::feeds::{parse_arrivals, parse_stops, FeedSource, FileSource};
}

pub use prelude::*;
