//! Crate error type.

use crate::identifiers::StopId;

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// Attempt to select a stop the registry does not contain.
    #[error("no such stop: {0}")]
    UnknownStop(StopId),

    /// Feed body is not the expected JSON shape (e.g. not an array).
    #[cfg(feature = "feeds")]
    #[error("malformed feed: {0}")]
    MalformedFeed(String),

    /// A stop feed record lacks a required field.
    #[cfg(feature = "feeds")]
    #[error("stop data missing: {0}")]
    StopDataMissing(String),

    /// An arrivals feed yielded zero usable arrivals for a stop.
    #[cfg(feature = "feeds")]
    #[error("no arrivals found for stop {0}")]
    ArrivalsDataMissing(StopId),

    /// A feed source could not be read.
    #[cfg(feature = "feeds")]
    #[error("failed to read feed: {0}")]
    FeedIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransitError>;
