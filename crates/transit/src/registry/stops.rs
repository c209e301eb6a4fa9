//! Registry of all known stops, keyed by stop id.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use geo::Point;
use tracing::{debug, trace};

use crate::identifiers::StopId;
use crate::models::{Result, Route, Stop, TransitError};
use crate::spatial::{distance_between, Viewport};

/// Radius in meters beyond which no stop counts as "nearest".
pub const SEARCH_RADIUS_M: f64 = 10_000.0;

/// Placeholder coordinates for stops known only by id, inside the service
/// region. The stop feed overwrites them once the real location is known.
pub fn default_location() -> Point {
    Point::new(-123.243314, 49.263050)
}

/// Owns the full mapping from stop id to [`Stop`], plus the at-most-one
/// "currently selected" stop.
///
/// Stops are created lazily on first reference and enriched in place.
/// Iteration order is insertion order, which also makes the nearest-stop
/// tie-break deterministic.
#[derive(Debug, Default)]
pub struct StopRegistry {
    stops: HashMap<StopId, Stop>,
    order: Vec<StopId>,
    // Resolved against the map on read, so a cleared registry reports no
    // selection without extra bookkeeping.
    selected: Option<StopId>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stop with the given id, created with an empty name and
    /// [`default_location`] if this is the first reference to it.
    pub fn stop_with_id(&mut self, id: impl Into<StopId>) -> &mut Stop {
        let id = id.into();
        match self.stops.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(%id, "registering stop");
                self.order.push(id);
                entry.insert(Stop::new(id, "", default_location()))
            }
        }
    }

    /// The stop with the given id; name and location are overwritten with
    /// the supplied values whether the stop existed or not.
    pub fn stop_with_details(
        &mut self,
        id: impl Into<StopId>,
        name: impl Into<Arc<str>>,
        location: Point,
    ) -> &mut Stop {
        let stop = self.stop_with_id(id);
        stop.set_name(name);
        stop.set_location(location);
        stop
    }

    pub fn get(&self, id: impl Into<StopId>) -> Option<&Stop> {
        self.stops.get(&id.into())
    }

    pub fn get_mut(&mut self, id: impl Into<StopId>) -> Option<&mut Stop> {
        self.stops.get_mut(&id.into())
    }

    /// Record the stop with the given id as selected.
    ///
    /// # Errors
    ///
    /// [`TransitError::UnknownStop`] if the id is not registered; the
    /// previous selection is untouched.
    pub fn set_selected(&mut self, id: impl Into<StopId>) -> Result<()> {
        let id = id.into();
        if !self.stops.contains_key(&id) {
            return Err(TransitError::UnknownStop(id));
        }
        debug!(%id, "stop selected");
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Stop> {
        self.selected.and_then(|id| self.stops.get(&id))
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// The registered stop nearest to `point`, provided it is strictly
    /// closer than [`SEARCH_RADIUS_M`]; `None` otherwise.
    ///
    /// Linear scan in registry order; ties go to the first stop scanned.
    /// Cost grows with the number of registered stops.
    pub fn nearest_to(&self, point: Point) -> Option<&Stop> {
        let mut nearest: Option<(f64, &Stop)> = None;
        for stop in self.iter() {
            let distance = distance_between(point, stop.location());
            if distance < SEARCH_RADIUS_M
                && nearest.as_ref().map_or(true, |&(best, _)| distance < best)
            {
                nearest = Some((distance, stop));
            }
        }
        nearest.map(|(_, stop)| stop)
    }

    /// Registered stops whose location the viewport contains.
    pub fn stops_within<'a>(&'a self, viewport: &'a Viewport) -> impl Iterator<Item = &'a Stop> {
        self.iter().filter(move |stop| viewport.contains(stop.location()))
    }

    /// Consecutive stop-location pairs along a route's stop sequence, for
    /// segment-by-segment viewport culling. Stops missing from this registry
    /// are skipped.
    pub fn segments_of<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = (Point, Point)> + 'a {
        route.stops().windows(2).filter_map(move |pair| {
            let src = self.get(pair[0])?;
            let dst = self.get(pair[1])?;
            Some((src.location(), dst.location()))
        })
    }

    /// Registered stops in the order they were first referenced.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.order.iter().filter_map(move |id| self.stops.get(id))
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Empty the registry. Any selection now resolves to `None`; the
    /// registry itself stays usable.
    pub fn clear(&mut self) {
        debug!(count = self.order.len(), "clearing stop registry");
        self.stops.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RouteRegistry;

    #[test]
    fn same_id_addresses_the_same_stop() {
        let mut registry = StopRegistry::new();

        registry.stop_with_id(50025).set_name("W Broadway @ Macdonald St");
        let again = registry.stop_with_id(50025);

        assert_eq!(again.name(), "W Broadway @ Macdonald St");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn placeholder_stop_gets_default_details() {
        let mut registry = StopRegistry::new();
        let stop = registry.stop_with_id(99999);

        assert_eq!(stop.name(), "");
        assert_eq!(stop.location(), default_location());
    }

    #[test]
    fn detailed_lookup_enriches_in_place() {
        let mut registry = StopRegistry::new();
        registry.stop_with_id(50025);

        let enriched = registry.stop_with_details(
            50025,
            "W Broadway @ Macdonald St",
            Point::new(-123.1690, 49.2635),
        );

        assert_eq!(enriched.name(), "W Broadway @ Macdonald St");
        assert_eq!(enriched.location(), Point::new(-123.1690, 49.2635));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn selection_requires_a_registered_stop() {
        let mut registry = StopRegistry::new();
        registry.stop_with_id(1);

        assert!(matches!(
            registry.set_selected(2),
            Err(TransitError::UnknownStop(id)) if id == StopId::new(2)
        ));
        assert!(registry.selected().is_none());

        registry.set_selected(1).unwrap();
        assert_eq!(registry.selected().map(Stop::id), Some(StopId::new(1)));

        registry.clear_selected();
        assert!(registry.selected().is_none());
    }

    #[test]
    fn failed_selection_keeps_the_previous_one() {
        let mut registry = StopRegistry::new();
        registry.stop_with_id(1);
        registry.set_selected(1).unwrap();

        assert!(registry.set_selected(2).is_err());
        assert_eq!(registry.selected().map(Stop::id), Some(StopId::new(1)));
    }

    #[test]
    fn clear_drops_stops_and_selection() {
        let mut registry = StopRegistry::new();
        registry.stop_with_id(1);
        registry.set_selected(1).unwrap();

        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.selected().is_none());
        assert!(registry.nearest_to(default_location()).is_none());
    }

    #[test]
    fn nearest_on_empty_registry_is_none() {
        let registry = StopRegistry::new();
        assert!(registry.nearest_to(Point::new(-123.20, 49.26)).is_none());
    }

    #[test]
    fn nearest_prefers_the_closer_stop() {
        let mut registry = StopRegistry::new();
        let point = Point::new(-123.2000, 49.2600);

        // ~2,000 m and ~500 m north of the query point
        registry.stop_with_details(1, "far", Point::new(-123.2000, 49.2780));
        registry.stop_with_details(2, "near", Point::new(-123.2000, 49.2645));

        assert_eq!(registry.nearest_to(point).map(Stop::id), Some(StopId::new(2)));
    }

    #[test]
    fn nearest_ignores_stops_beyond_the_radius() {
        let mut registry = StopRegistry::new();

        // ~11.1 km away, outside the 10 km search radius
        registry.stop_with_details(1, "remote", Point::new(-123.2000, 49.3600));

        assert!(registry.nearest_to(Point::new(-123.2000, 49.2600)).is_none());
    }

    #[test]
    fn nearest_tie_goes_to_the_first_registered() {
        let mut registry = StopRegistry::new();
        let point = Point::new(-123.2000, 49.2600);

        // Equidistant: same latitude offset south and north
        registry.stop_with_details(7, "south", Point::new(-123.2000, 49.2555));
        registry.stop_with_details(3, "north", Point::new(-123.2000, 49.2645));

        assert_eq!(registry.nearest_to(point).map(Stop::id), Some(StopId::new(7)));
    }

    #[test]
    fn nearest_across_three_stops() {
        let mut registry = StopRegistry::new();
        registry.stop_with_details(1, "A", Point::new(-123.246, 49.260));
        registry.stop_with_details(2, "B", Point::new(-123.250, 49.270));
        registry.stop_with_details(3, "C", Point::new(-123.900, 49.500));

        let nearest = registry.nearest_to(Point::new(-123.245, 49.261));
        assert_eq!(nearest.map(Stop::name), Some("A"));
    }

    #[test]
    fn stops_within_filters_by_viewport() {
        let mut registry = StopRegistry::new();
        registry.stop_with_details(1, "in", Point::new(-123.15, 49.25));
        registry.stop_with_details(2, "out", Point::new(-123.50, 49.25));

        let viewport = Viewport::new(Point::new(-123.30, 49.30), Point::new(-123.00, 49.20));
        let visible: Vec<&str> = registry.stops_within(&viewport).map(Stop::name).collect();
        assert_eq!(visible, vec!["in"]);
    }

    #[test]
    fn segments_follow_the_route_stop_sequence() {
        let mut stops = StopRegistry::new();
        let mut routes = RouteRegistry::new();

        let route = routes.route_with_number("99");
        route.add_stop(stops.stop_with_details(1, "a", Point::new(-123.10, 49.26)));
        route.add_stop(stops.stop_with_details(2, "b", Point::new(-123.12, 49.26)));
        route.add_stop(stops.stop_with_details(3, "c", Point::new(-123.14, 49.27)));

        let route = routes.get("99").unwrap();
        let segments: Vec<(Point, Point)> = stops.segments_of(route).collect();
        assert_eq!(
            segments,
            vec![
                (Point::new(-123.10, 49.26), Point::new(-123.12, 49.26)),
                (Point::new(-123.12, 49.26), Point::new(-123.14, 49.27)),
            ]
        );

        let viewport = Viewport::new(Point::new(-123.13, 49.28), Point::new(-123.11, 49.25));
        assert!(segments
            .iter()
            .any(|&(src, dst)| viewport.intersects_segment(src, dst)));
    }
}
