//! Thin adapter over the `h3o` cell library.
//!
//! Exposes exactly the grid primitives the dataset generator and query
//! engine consume, plus the [0, 12] resolution guard this system adds on
//! top of the library (h3o itself accepts resolutions up to 15).
//!
//! Coordinate order note: the caller-facing API is lat/lng, but the
//! polygon fill goes through `geo-types`, whose coordinates are
//! (x, y) = (lng, lat). [`polygon_to_cells`] owns that flip; nothing else
//! in the crate deals with lng-first ordering.

use crate::error::{GridError, Result};
use crate::geo::GeoPoint;
use geo_types::LineString;
use h3o::geom::{PolyfillConfig, ToCells};
use h3o::{CellIndex, LatLng, Resolution};

/// Finest resolution in this system; all generated readings live here.
pub const DATA_RESOLUTION: Resolution = Resolution::Twelve;

/// Coarsest resolution accepted by queries.
pub const MIN_RESOLUTION: i64 = 0;

/// Finest resolution accepted by queries.
pub const MAX_RESOLUTION: i64 = 12;

/// Validate a raw resolution value against the [0, 12] range.
pub fn resolution(value: i64) -> Result<Resolution> {
    if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&value) {
        return Err(GridError::InvalidResolution(value));
    }
    Resolution::try_from(value as u8).map_err(|_| GridError::InvalidResolution(value))
}

/// Parse a cell index from its canonical hex string form.
pub fn cell_from_str(s: &str) -> Result<CellIndex> {
    s.parse()
        .map_err(|_| GridError::InvalidCell(s.to_string()))
}

/// Resolve a geographic point to its enclosing cell at `resolution`.
pub fn latlng_to_cell(point: GeoPoint, resolution: Resolution) -> Result<CellIndex> {
    Ok(LatLng::new(point.lat, point.lng)?.to_cell(resolution))
}

/// Representative center point of a cell, in degrees.
pub fn cell_center(cell: CellIndex) -> GeoPoint {
    let center = LatLng::from(cell);
    GeoPoint::new(center.lat(), center.lng())
}

/// Ancestor of `cell` at `resolution`.
///
/// Fails if `resolution` is finer than the cell's own, which cannot be an
/// ancestor level.
pub fn cell_parent(cell: CellIndex, resolution: Resolution) -> Result<CellIndex> {
    cell.parent(resolution)
        .ok_or_else(|| GridError::InvalidResolution(u8::from(resolution) as i64))
}

/// All descendants of `cell` at `resolution`.
///
/// For `resolution` equal to the cell's own, yields the cell itself;
/// for a coarser one, yields nothing.
pub fn cell_children(cell: CellIndex, resolution: Resolution) -> Vec<CellIndex> {
    cell.children(resolution).collect()
}

/// All cells within `k` grid steps of `center` (rings 0..=k).
pub fn grid_disk(center: CellIndex, k: u32) -> Vec<CellIndex> {
    center.grid_disk::<Vec<_>>(k)
}

/// Covering cells of a closed ring at `resolution`.
///
/// `ring` must already be closed; the query engine closes open borders
/// before calling in. Grid-library geometry failures surface as
/// [`GridError::PolygonConversion`].
pub fn polygon_to_cells(ring: &[GeoPoint], resolution: Resolution) -> Result<Vec<CellIndex>> {
    // geo-types is lng-first
    let exterior: LineString<f64> =
        ring.iter().map(|p| (p.lng, p.lat)).collect::<Vec<_>>().into();
    let polygon = geo_types::Polygon::new(exterior, vec![]);
    let polygon = h3o::geom::Polygon::from_degrees(polygon)?;
    Ok(polygon.to_cells(PolyfillConfig::new(resolution)).collect())
}
