//! A bus route and its directional patterns.

use std::sync::Arc;

use crate::identifiers::{PatternName, RouteNumber, StopId};
use crate::models::stop::Stop;

/// A numbered bus line: display name, ordered stop sequence, and named
/// directional patterns.
///
/// Routes are created by [`RouteRegistry`](crate::registry::RouteRegistry)
/// with an empty name and enriched as feed data arrives. One route per
/// number; identity is the number.
///
/// Invariants:
/// - a stop appears at most once in the stop sequence
/// - the stop sequence iterates in insertion order
/// - a stop is in the sequence iff the stop's route set holds this number
#[derive(Clone, Debug)]
pub struct Route {
    number: RouteNumber,
    name: Arc<str>,
    stops: Vec<StopId>,
    patterns: Vec<RoutePattern>,
}

impl Route {
    pub(crate) fn new(number: RouteNumber) -> Self {
        Self {
            number,
            name: "".into(),
            stops: Vec::new(),
            patterns: Vec::new(),
        }
    }

    pub fn number(&self) -> &RouteNumber {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<Arc<str>>) {
        self.name = name.into();
    }

    /// Append `stop` to the stop sequence and record this route on the stop.
    /// Both sides update together; adding an already-present stop is a no-op.
    pub fn add_stop(&mut self, stop: &mut Stop) {
        if self.has_stop(stop.id()) {
            return;
        }
        self.stops.push(stop.id());
        stop.routes.insert(self.number.clone());
    }

    /// Remove `stop` from the stop sequence and clear this route from the
    /// stop. No-op if the stop is absent.
    pub fn remove_stop(&mut self, stop: &mut Stop) {
        if let Some(position) = self.stops.iter().position(|&id| id == stop.id()) {
            self.stops.remove(position);
            stop.routes.remove(&self.number);
        }
    }

    pub fn has_stop(&self, id: StopId) -> bool {
        self.stops.contains(&id)
    }

    /// Stop ids in the order they were added to the route.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// The pattern with the given name, creating and registering it first if
    /// absent. In all cases the pattern's destination and direction are
    /// refreshed to the supplied values.
    pub fn pattern_with_details(
        &mut self,
        name: impl Into<PatternName>,
        destination: impl Into<Arc<str>>,
        direction: impl Into<Arc<str>>,
    ) -> &mut RoutePattern {
        let index = self.pattern_index(name.into());
        let pattern = &mut self.patterns[index];
        pattern.destination = destination.into();
        pattern.direction = direction.into();
        pattern
    }

    /// The pattern with the given name, creating it with empty destination
    /// and direction if absent. An existing pattern is returned untouched.
    pub fn pattern(&mut self, name: impl Into<PatternName>) -> &mut RoutePattern {
        let index = self.pattern_index(name.into());
        &mut self.patterns[index]
    }

    fn pattern_index(&mut self, name: PatternName) -> usize {
        match self.patterns.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                self.patterns.push(RoutePattern::new(name));
                self.patterns.len() - 1
            }
        }
    }

    /// Patterns in the order they were first seen.
    pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
        self.patterns.iter()
    }
}

/// A named directional variant of a route (e.g. "Eastbound to Boundary").
///
/// Lives inside exactly one route's pattern list; the name is unique within
/// that route. Destination and direction are refreshed on every re-parse of
/// the arrivals feed.
#[derive(Clone, Debug)]
pub struct RoutePattern {
    name: PatternName,
    destination: Arc<str>,
    direction: Arc<str>,
}

impl RoutePattern {
    fn new(name: PatternName) -> Self {
        Self {
            name,
            destination: "".into(),
            direction: "".into(),
        }
    }

    pub fn name(&self) -> &PatternName {
        &self.name
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn set_destination(&mut self, destination: impl Into<Arc<str>>) {
        self.destination = destination.into();
    }

    pub fn set_direction(&mut self, direction: impl Into<Arc<str>>) {
        self.direction = direction.into();
    }
}
