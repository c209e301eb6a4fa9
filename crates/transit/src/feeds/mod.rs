//! Parsers for the external stop and arrivals feeds.
//!
//! These are the collaborators that translate the operator's JSON into the
//! model; the rest of the crate never touches wire formats. Enabled with the
//! `feeds` cargo feature.

pub mod arrivals;
pub mod source;
pub mod stops;

pub use arrivals::parse_arrivals;
pub use source::{FeedSource, FileSource};
pub use stops::parse_stops;
