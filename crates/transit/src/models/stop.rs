//! A physical bus stop.

use std::collections::BTreeSet;
use std::sync::Arc;

use geo::Point;

use crate::identifiers::{RouteNumber, StopId};
use crate::models::arrival::Arrival;
use crate::models::route::Route;

/// A bus stop: location, current arrivals, and the set of routes serving it.
///
/// Stops are created by [`StopRegistry`](crate::registry::StopRegistry),
/// possibly with placeholder name/location, and enriched in place as feed
/// data arrives. The registry holds exactly one stop per id, so identity is
/// the id and stops carry no equality of their own.
///
/// Invariant: a route number appears at most once in the served-route set.
#[derive(Clone, Debug)]
pub struct Stop {
    id: StopId,
    name: Arc<str>,
    location: Point,
    arrivals: Vec<Arrival>,
    // Route membership is kept in lockstep with each route's stop sequence;
    // see Route::add_stop / Route::remove_stop. BTreeSet iteration order is
    // the route numbers' sort order.
    pub(crate) routes: BTreeSet<RouteNumber>,
}

impl Stop {
    pub(crate) fn new(id: StopId, name: impl Into<Arc<str>>, location: Point) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            arrivals: Vec::new(),
            routes: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn set_name(&mut self, name: impl Into<Arc<str>>) {
        self.name = name.into();
    }

    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Add this stop to `route`, keeping both sides of the relation in sync.
    /// No-op if the route already serves this stop.
    pub fn add_route(&mut self, route: &mut Route) {
        route.add_stop(self);
    }

    /// Remove this stop from `route`, keeping both sides of the relation in
    /// sync. No-op if the route does not serve this stop.
    pub fn remove_route(&mut self, route: &mut Route) {
        route.remove_stop(self);
    }

    /// Whether the route with the given number serves this stop.
    pub fn serves(&self, number: &RouteNumber) -> bool {
        self.routes.contains(number)
    }

    /// Numbers of the routes serving this stop.
    pub fn routes(&self) -> impl Iterator<Item = &RouteNumber> {
        self.routes.iter()
    }

    /// Append a predicted arrival. The display layer replaces the whole list
    /// on each refresh via [`clear_arrivals`](Self::clear_arrivals).
    pub fn add_arrival(&mut self, arrival: Arrival) {
        self.arrivals.push(arrival);
    }

    pub fn clear_arrivals(&mut self) {
        self.arrivals.clear();
    }

    /// Current arrivals, in the order they were added.
    pub fn arrivals(&self) -> impl Iterator<Item = &Arrival> {
        self.arrivals.iter()
    }
}
