//! Geographic points, great-circle distance, and border parsing.

use crate::error::{GridError, Result};

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in degrees.
///
/// Latitude ∈ [-90, 90], longitude ∈ [-180, 180]. Range enforcement is
/// delegated to the grid library at the conversion seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Standard haversine formula; angles are converted to radians before the
/// trigonometric steps and the result is non-negative.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Parse a border string of the form `lat1/lon1,lat2/lon2,...` into points.
///
/// Whitespace around each pair is tolerated. A pair that does not split
/// into exactly two numeric values fails with [`GridError::MalformedPoint`];
/// point-count and closure rules are the polygon filter's concern, not the
/// parser's.
pub fn parse_border(border: &str) -> Result<Vec<GeoPoint>> {
    border
        .split(',')
        .map(|pair| {
            let pair = pair.trim();
            let mut parts = pair.split('/');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(lat), Some(lng), None) => {
                    let lat = lat
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| GridError::MalformedPoint(pair.to_string()))?;
                    let lng = lng
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| GridError::MalformedPoint(pair.to_string()))?;
                    Ok(GeoPoint::new(lat, lng))
                }
                _ => Err(GridError::MalformedPoint(pair.to_string())),
            }
        })
        .collect()
}
