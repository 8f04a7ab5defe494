//! Error types for the readings dataset and query engine.

use thiserror::Error;

/// Caller-input errors raised by the grid adapter and query engine.
///
/// Every variant is a 4xx-class input error; none is process-fatal. The
/// HTTP layer maps all of them to client error responses.
#[derive(Error, Debug)]
pub enum GridError {
    /// Cell identifier that the grid library does not recognize.
    #[error("invalid cell index: {0}")]
    InvalidCell(String),

    /// Polygon with fewer than 3 points.
    #[error("polygon requires at least 3 points, got {points}")]
    InvalidPolygon { points: usize },

    /// Coordinate pair that does not parse into two numeric values.
    #[error("malformed coordinate pair '{0}': expected 'lat/lng'")]
    MalformedPoint(String),

    /// Grid-library failure converting a polygon to its covering cells
    /// (e.g. degenerate geometry).
    #[error("polygon conversion failed: {0}")]
    PolygonConversion(#[from] h3o::error::InvalidGeometry),

    /// Resolution outside the [0, 12] range this system serves.
    #[error("resolution must be between 0 and 12, got {0}")]
    InvalidResolution(i64),

    /// Latitude/longitude outside the valid coordinate ranges. Not
    /// reachable from HTTP input; only a misconfigured generator center
    /// can produce it.
    #[error("coordinate out of range: {0}")]
    InvalidCoordinate(#[from] h3o::error::InvalidLatLng),
}

/// Result type for dataset and query operations.
pub type Result<T> = std::result::Result<T, GridError>;
