//! Parser for the arrivals-at-a-stop feed.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{Arrival, Result, Stop, TransitError};
use crate::registry::RouteRegistry;

/// Arrivals for one route at the queried stop.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ArrivalGroup {
    route_no: String,
    route_name: String,
    direction: String,
    schedules: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ScheduleEntry {
    pattern: String,
    destination: String,
    expected_countdown: i32,
    schedule_status: String,
}

/// Parse an arrivals feed body for `stop`.
///
/// The stop's arrival list is replaced, not merged. Each well-formed group
/// upserts its route (name refreshed) and each well-formed schedule entry
/// upserts the route's pattern, refreshing destination and direction, and
/// appends an [`Arrival`] to the stop. Malformed groups and entries are
/// skipped. Returns the number of arrivals added.
///
/// # Errors
///
/// [`TransitError::MalformedFeed`] if the body is not a JSON array;
/// [`TransitError::ArrivalsDataMissing`] if zero arrivals result.
pub fn parse_arrivals(stop: &mut Stop, routes: &mut RouteRegistry, body: &str) -> Result<usize> {
    let groups: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| TransitError::MalformedFeed(e.to_string()))?;

    stop.clear_arrivals();

    let mut count = 0;
    for value in groups {
        let group: ArrivalGroup = match serde_json::from_value(value) {
            Ok(group) => group,
            Err(error) => {
                warn!(%error, "skipping malformed arrival group");
                continue;
            }
        };

        let route = routes.route_with_name(group.route_no.as_str(), group.route_name.trim());
        for entry in group.schedules {
            let entry: ScheduleEntry = match serde_json::from_value(entry) {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "skipping malformed schedule entry");
                    continue;
                }
            };

            route.pattern_with_details(
                entry.pattern.as_str(),
                entry.destination.as_str(),
                group.direction.as_str(),
            );
            stop.add_arrival(Arrival::new(
                entry.expected_countdown,
                entry.destination,
                entry.schedule_status,
                route.number().clone(),
            ));
            count += 1;
        }
    }

    if count == 0 {
        return Err(TransitError::ArrivalsDataMissing(stop.id()));
    }
    debug!(count, stop = %stop.id(), "parsed arrivals feed");
    Ok(count)
}
