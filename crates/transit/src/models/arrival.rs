//! Predicted bus arrivals at a stop.

use std::sync::Arc;

use crate::identifiers::RouteNumber;

/// A single predicted arrival: countdown in minutes, destination and status
/// text, and the route the bus belongs to.
///
/// Arrivals are ephemeral. They are owned by the stop they were added to and
/// the stop's whole arrival list is replaced on each refresh; nothing else
/// holds on to them.
#[derive(Clone, Debug)]
pub struct Arrival {
    pub countdown: i32,
    pub destination: Arc<str>,
    pub status: Arc<str>,
    pub route: RouteNumber,
}

impl Arrival {
    pub fn new(
        countdown: i32,
        destination: impl Into<Arc<str>>,
        status: impl Into<Arc<str>>,
        route: RouteNumber,
    ) -> Self {
        Self {
            countdown,
            destination: destination.into(),
            status: status.into(),
            route,
        }
    }
}
