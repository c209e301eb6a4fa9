//! Great-circle distance and slope calculations.
//!
//! Points are `geo::Point` in degrees, x = longitude, y = latitude.

use geo::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle surface distance between two points in meters, by the
/// haversine formula over a spherical Earth.
///
/// Symmetric in its arguments, and zero iff the points are equal.
pub fn distance_between(a: Point, b: Point) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Slope of the line through `(x1, y1)` and `(x2, y2)`.
///
/// `None` for a vertical line (`x1 == x2`); the undefined case is encoded in
/// the return type rather than left to float division.
pub fn slope(x1: f64, x2: f64, y1: f64, y2: f64) -> Option<f64> {
    if x1 == x2 {
        None
    } else {
        Some((y2 - y1) / (x2 - x1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(-123.2433, 49.2631);
        assert_eq!(distance_between(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-123.1207, 49.2827);
        let b = Point::new(-123.2460, 49.2606);
        assert_relative_eq!(distance_between(a, b), distance_between(b, a));
    }

    #[test]
    fn distance_along_a_meridian() {
        // 0.0045 degrees of latitude is ~500 m on a 6371 km sphere
        let a = Point::new(-123.2000, 49.2600);
        let b = Point::new(-123.2000, 49.2645);
        assert_relative_eq!(distance_between(a, b), 500.4, max_relative = 1e-3);
    }

    #[test]
    fn distance_between_cities() {
        // NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);
        assert!(relative_eq!(
            distance_between(nyc, la),
            3_936_000.0,
            max_relative = 0.01
        ));
    }

    #[test]
    fn slope_of_a_line() {
        assert_eq!(slope(0.0, 2.0, 0.0, 4.0), Some(2.0));
        assert_eq!(slope(1.0, 3.0, 5.0, 5.0), Some(0.0));
    }

    #[test]
    fn vertical_line_has_no_slope() {
        assert_eq!(slope(2.0, 2.0, 0.0, 4.0), None);
    }
}
