//! Startup dataset synthesis.
//!
//! Builds the read-only readings collection confined to a circular region:
//! over-fetch a grid disk around the center cell, trim it to the exact
//! radius with the haversine distance, then attach uniform random signal
//! levels and category tags to the surviving cells.

use crate::error::Result;
use crate::geo::{haversine_km, GeoPoint};
use crate::grid::{self, DATA_RESOLUTION};
use crate::reading::{Dataset, Reading};
use h3o::Resolution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Signal level bounds, inclusive.
pub const LEVEL_MIN: i32 = -120;
pub const LEVEL_MAX: i32 = -47;

/// Category tag bounds, inclusive.
pub const CATEGORY_MIN: u32 = 1;
pub const CATEGORY_MAX: u32 = 100;

/// Dataset generation parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Center of the circular region.
    pub center: GeoPoint,
    /// Radius of the circular region in kilometers.
    pub radius_km: f64,
    /// Cell resolution of generated readings.
    pub resolution: Resolution,
    /// Kilometers assumed per traversal ring when sizing the disk
    /// over-fetch. Tuned for resolution 12; coarser resolutions need a
    /// larger step.
    pub ring_step_km: f64,
    /// RNG seed. `None` draws from OS entropy, so levels and categories
    /// differ across runs; only the range and cell-uniqueness invariants
    /// hold. Pin a seed for reproducible datasets.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(56.0, 38.0),
            radius_km: 7.0,
            resolution: DATA_RESOLUTION,
            ring_step_km: 0.5,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Traversal depth covering the requested radius with headroom.
    fn disk_depth(&self) -> u32 {
        (self.radius_km / self.ring_step_km).floor() as u32 + 1
    }
}

/// Generate the immutable readings dataset.
///
/// The disk of [`GeneratorConfig::disk_depth`] rings over-approximates the
/// circle; each candidate cell is kept only if its center lies within
/// `radius_km` of the configured center. The only failure mode is a grid
/// error resolving the center point, which cannot occur for in-range
/// coordinates.
pub fn generate(config: &GeneratorConfig) -> Result<Dataset> {
    let center_cell = grid::latlng_to_cell(config.center, config.resolution)?;
    let depth = config.disk_depth();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut readings = Vec::new();
    for cell in grid::grid_disk(center_cell, depth) {
        let distance = haversine_km(config.center, grid::cell_center(cell));
        if distance <= config.radius_km {
            readings.push(Reading {
                cell,
                level: rng.gen_range(LEVEL_MIN..=LEVEL_MAX),
                category_id: rng.gen_range(CATEGORY_MIN..=CATEGORY_MAX),
            });
        }
    }

    tracing::debug!(
        readings = readings.len(),
        disk_depth = depth,
        radius_km = config.radius_km,
        "generated readings dataset"
    );

    Ok(Dataset::new(readings))
}
