//! Registry of all known routes, keyed by route number.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::identifiers::RouteNumber;
use crate::models::Route;

/// Owns the full mapping from route number to [`Route`].
///
/// Routes are created lazily on first reference and enriched in place.
/// Iteration order is insertion order.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: HashMap<RouteNumber, Route>,
    order: Vec<RouteNumber>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The route with the given number, created with an empty name if this
    /// is the first reference to it.
    pub fn route_with_number(&mut self, number: impl Into<RouteNumber>) -> &mut Route {
        let number = number.into();
        match self.routes.entry(number.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(%number, "registering route");
                self.order.push(number.clone());
                entry.insert(Route::new(number))
            }
        }
    }

    /// The route with the given number; its name is overwritten with the
    /// supplied one whether the route existed or not.
    pub fn route_with_name(
        &mut self,
        number: impl Into<RouteNumber>,
        name: impl Into<Arc<str>>,
    ) -> &mut Route {
        let route = self.route_with_number(number);
        route.set_name(name);
        route
    }

    pub fn get(&self, number: &str) -> Option<&Route> {
        self.routes.get(number)
    }

    pub fn get_mut(&mut self, number: &str) -> Option<&mut Route> {
        self.routes.get_mut(number)
    }

    /// Registered routes in the order they were first referenced.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.order.iter().filter_map(move |number| self.routes.get(number))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Empty the registry. The registry itself stays usable.
    pub fn clear(&mut self) {
        self.routes.clear();
        self.order.clear();
    }
}
