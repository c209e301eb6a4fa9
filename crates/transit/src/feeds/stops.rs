//! Parser for the stop feed.

use geo::Point;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Result, TransitError};
use crate::registry::{RouteRegistry, StopRegistry};

/// One record of the stop feed. Every field is required; a record missing
/// any of them fails the whole parse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StopRecord {
    stop_no: u32,
    name: String,
    routes: String,
    latitude: f64,
    longitude: f64,
}

/// Parse a stop feed body and register everything found in it.
///
/// Each record upserts its stop with full details, and each route number in
/// the record's comma-separated `Routes` list upserts the route and links it
/// to the stop (one `stop_with_id` per (stop, route) pair). Returns the
/// number of stop records parsed.
///
/// # Errors
///
/// [`TransitError::MalformedFeed`] if the body is not a JSON array;
/// [`TransitError::StopDataMissing`] if any record lacks a required field.
pub fn parse_stops(
    stops: &mut StopRegistry,
    routes: &mut RouteRegistry,
    body: &str,
) -> Result<usize> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| TransitError::MalformedFeed(e.to_string()))?;

    let mut count = 0;
    for value in records {
        let record: StopRecord = serde_json::from_value(value)
            .map_err(|e| TransitError::StopDataMissing(e.to_string()))?;

        let location = Point::new(record.longitude, record.latitude);
        let stop_id = stops
            .stop_with_details(record.stop_no, record.name.trim(), location)
            .id();

        for number in record.routes.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let stop = stops.stop_with_id(stop_id);
            routes.route_with_number(number).add_stop(stop);
        }
        count += 1;
    }

    debug!(count, "parsed stop feed");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: &str = r#"[
        {
            "Name": "WB DAVIE ST FS BIDWELL ST ",
            "StopNo": 50001,
            "Routes": "C23",
            "Latitude": 49.286458,
            "Longitude": -123.140424
        },
        {
            "Name": "W BROADWAY @ MACDONALD ST",
            "StopNo": 50025,
            "Routes": "009, 014, 099",
            "Latitude": 49.263500,
            "Longitude": -123.169000
        }
    ]"#;

    #[test]
    fn registers_stops_and_links_routes_both_ways() {
        let mut stops = StopRegistry::new();
        let mut routes = RouteRegistry::new();

        let count = parse_stops(&mut stops, &mut routes, STOPS).unwrap();
        assert_eq!(count, 2);
        assert_eq!(stops.len(), 2);
        assert_eq!(routes.len(), 4);

        let stop = stops.get(50025).unwrap();
        assert_eq!(stop.name(), "W BROADWAY @ MACDONALD ST");
        assert_eq!(stop.routes().count(), 3);
        assert!(stop.serves(&"099".into()));
        assert!(routes.get("099").unwrap().has_stop(stop.id()));
        assert!(routes.get("C23").unwrap().has_stop(stops.get(50001).unwrap().id()));
    }

    #[test]
    fn reparsing_is_idempotent() {
        let mut stops = StopRegistry::new();
        let mut routes = RouteRegistry::new();

        parse_stops(&mut stops, &mut routes, STOPS).unwrap();
        parse_stops(&mut stops, &mut routes, STOPS).unwrap();

        assert_eq!(stops.len(), 2);
        assert_eq!(routes.len(), 4);
        assert_eq!(routes.get("099").unwrap().stops().len(), 1);
    }

    #[test]
    fn missing_required_field_fails_the_parse() {
        let body = r#"[{"Name": "NO LOCATION", "StopNo": 1, "Routes": "99"}]"#;
        let mut stops = StopRegistry::new();
        let mut routes = RouteRegistry::new();

        let result = parse_stops(&mut stops, &mut routes, body);
        assert!(matches!(result, Err(TransitError::StopDataMissing(_))));
    }

    #[test]
    fn non_array_body_is_malformed() {
        let mut stops = StopRegistry::new();
        let mut routes = RouteRegistry::new();

        let result = parse_stops(&mut stops, &mut routes, r#"{"Name": "not a list"}"#);
        assert!(matches!(result, Err(TransitError::MalformedFeed(_))));
    }
}
