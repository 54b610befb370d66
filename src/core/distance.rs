use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers. NaN inputs yield NaN.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    // Rounding can push `a` just past 1.0 for antipodal points
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinates in kilometers
#[inline]
pub fn distance_km_between(from: Coordinate, to: Coordinate) -> f64 {
    haversine_distance(from.lat, from.lon, to.lat, to.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 343.56).abs() < 0.01, "Distance should be ~343.56km, got {}", distance);
    }

    #[test]
    fn test_bangalore_pair_distance() {
        let distance = haversine_distance(12.9716, 77.6413, 12.9750, 77.6450);
        assert!((distance - 0.551).abs() < 0.001, "Expected ~0.551km, got {}", distance);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let distance = haversine_distance(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((distance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinate::new(12.9716, 77.6413);
        let b = Coordinate::new(-33.8688, 151.2093);

        let forward = distance_km_between(a, b);
        let backward = distance_km_between(b, a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 180.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!(distance.is_finite());
        assert!((distance - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(haversine_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
