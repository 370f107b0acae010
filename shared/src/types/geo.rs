//! Geographic types

use serde::{Deserialize, Serialize};

/// Coordinate for location-based features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Calculate distance to another coordinate (in meters)
    /// Using Haversine formula
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_seoul_busan() {
        let seoul = Coordinate::new(37.5665, 126.9780);
        let busan = Coordinate::new(35.1796, 129.0756);

        let distance_km = seoul.distance_to(&busan) / 1000.0;

        // Roughly 325 km as the crow flies
        assert!((distance_km - 325.0).abs() < 10.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let point = Coordinate::new(33.4996, 126.5312);
        assert!(point.distance_to(&point).abs() < 1e-6);
    }
}
