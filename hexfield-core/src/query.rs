//! The three read operations over the dataset.
//!
//! Each operation is a pure read over `&Dataset` and can run on any
//! worker thread without coordination. Filters preserve dataset order;
//! aggregation output is deterministic regardless of hash-map iteration
//! order (groups accumulate in first-seen order, then a stable sort by
//! category applies).

use crate::error::{GridError, Result};
use crate::geo::GeoPoint;
use crate::grid::{self, DATA_RESOLUTION};
use crate::reading::{Dataset, Reading};
use h3o::CellIndex;
use std::collections::{HashMap, HashSet};

/// One output row of [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateRow {
    /// Ancestor cell at the requested resolution.
    pub cell: CellIndex,
    /// Category tag shared by the group's readings.
    pub category_id: u32,
    /// Median signal level of the group, truncated toward zero.
    pub median_level: i32,
}

/// Composite grouping key: equality requires both components equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GroupKey {
    ancestor: CellIndex,
    category_id: u32,
}

/// Readings whose cell descends from `parent`, in dataset order.
///
/// A resolution-12 parent matches at most its own single row. An empty
/// result is a valid non-error outcome. (An unparseable cell string
/// fails earlier, at [`grid::cell_from_str`].)
pub fn descendants(dataset: &Dataset, parent: CellIndex) -> Vec<Reading> {
    let wanted: HashSet<CellIndex> = grid::cell_children(parent, DATA_RESOLUTION)
        .into_iter()
        .collect();
    dataset
        .iter()
        .filter(|r| wanted.contains(&r.cell))
        .copied()
        .collect()
}

/// Readings whose cell falls inside the polygon border, in dataset order.
///
/// The border must have at least 3 points and is implicitly closed when
/// its first and last points differ.
pub fn within_polygon(dataset: &Dataset, border: &[GeoPoint]) -> Result<Vec<Reading>> {
    if border.len() < 3 {
        return Err(GridError::InvalidPolygon {
            points: border.len(),
        });
    }

    let mut ring = border.to_vec();
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    let covering: HashSet<CellIndex> = grid::polygon_to_cells(&ring, DATA_RESOLUTION)?
        .into_iter()
        .collect();
    Ok(dataset
        .iter()
        .filter(|r| covering.contains(&r.cell))
        .copied()
        .collect())
}

/// Median of the group's levels, truncated toward zero.
///
/// Odd-sized groups take the exact middle of the sorted levels; even-sized
/// groups average the two middle values before truncating.
fn median_level(levels: &mut [i32]) -> i32 {
    levels.sort_unstable();
    let n = levels.len();
    if n % 2 == 1 {
        levels[n / 2]
    } else {
        let mid = (levels[n / 2 - 1] + levels[n / 2]) as f64 / 2.0;
        mid.trunc() as i32
    }
}

/// Group readings by (ancestor cell at `resolution`, category) and report
/// each group's median level.
///
/// Fails with [`GridError::InvalidResolution`] outside [0, 12]. Rows come
/// back sorted ascending by category; rows sharing a category keep the
/// order in which their groups were first encountered. An empty dataset
/// yields an empty result.
pub fn aggregate(dataset: &Dataset, resolution: i64) -> Result<Vec<AggregateRow>> {
    let resolution = grid::resolution(resolution)?;

    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<i32>> = HashMap::new();
    for reading in dataset.iter() {
        let ancestor = grid::cell_parent(reading.cell, resolution)?;
        let key = GroupKey {
            ancestor,
            category_id: reading.category_id,
        };
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(reading.level);
    }

    let mut rows = Vec::with_capacity(order.len());
    for key in order {
        if let Some(mut levels) = groups.remove(&key) {
            rows.push(AggregateRow {
                cell: key.ancestor,
                category_id: key.category_id,
                median_level: median_level(&mut levels),
            });
        }
    }
    rows.sort_by_key(|row| row.category_id);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use h3o::Resolution;

    fn cell_at(lat: f64, lng: f64) -> CellIndex {
        grid::latlng_to_cell(GeoPoint::new(lat, lng), DATA_RESOLUTION).unwrap()
    }

    /// First `n` resolution-12 children of the res-10 cell over the
    /// default center. All siblings share every ancestor above res 10.
    fn siblings(n: usize) -> Vec<CellIndex> {
        let parent = grid::cell_parent(cell_at(56.0, 38.0), Resolution::Ten).unwrap();
        grid::cell_children(parent, DATA_RESOLUTION)
            .into_iter()
            .take(n)
            .collect()
    }

    fn reading(cell: CellIndex, level: i32, category_id: u32) -> Reading {
        Reading {
            cell,
            level,
            category_id,
        }
    }

    // --- descendants ---

    #[test]
    fn test_descendants_exact_subset_in_dataset_order() {
        let near = siblings(3);
        let far = cell_at(57.0, 39.0);
        let dataset = Dataset::new(vec![
            reading(near[0], -50, 1),
            reading(far, -60, 2),
            reading(near[1], -70, 3),
            reading(near[2], -80, 4),
        ]);

        let parent = grid::cell_parent(near[0], Resolution::Ten).unwrap();
        let result = descendants(&dataset, parent);
        let cells: Vec<_> = result.iter().map(|r| r.cell).collect();
        assert_eq!(cells, vec![near[0], near[1], near[2]]);
    }

    #[test]
    fn test_descendants_of_finest_cell_is_its_own_row() {
        let near = siblings(2);
        let dataset = Dataset::new(vec![reading(near[0], -50, 1), reading(near[1], -60, 2)]);

        let result = descendants(&dataset, near[0]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].cell, near[0]);
    }

    #[test]
    fn test_descendants_empty_is_not_an_error() {
        let dataset = Dataset::new(vec![reading(cell_at(56.0, 38.0), -50, 1)]);
        let far_parent = grid::cell_parent(cell_at(10.0, 10.0), Resolution::Five).unwrap();
        assert!(descendants(&dataset, far_parent).is_empty());
    }

    // --- within_polygon ---

    fn square(center_lat: f64, center_lng: f64, half_deg: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(center_lat - half_deg, center_lng - half_deg),
            GeoPoint::new(center_lat - half_deg, center_lng + half_deg),
            GeoPoint::new(center_lat + half_deg, center_lng + half_deg),
            GeoPoint::new(center_lat + half_deg, center_lng - half_deg),
        ]
    }

    #[test]
    fn test_within_polygon_covering_returns_full_dataset() {
        let cells = siblings(5);
        let dataset: Dataset = cells.iter().map(|&c| reading(c, -50, 1)).collect();

        // open ring: closed implicitly
        let border = square(56.0, 38.0, 0.01);
        let result = within_polygon(&dataset, &border).unwrap();
        assert_eq!(result.len(), dataset.len());
    }

    #[test]
    fn test_within_polygon_disjoint_returns_empty() {
        let cells = siblings(5);
        let dataset: Dataset = cells.iter().map(|&c| reading(c, -50, 1)).collect();

        let border = square(56.1, 38.1, 0.001);
        let result = within_polygon(&dataset, &border).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_within_polygon_rejects_two_points() {
        let dataset = Dataset::default();
        let border = vec![GeoPoint::new(56.0, 38.0), GeoPoint::new(56.1, 38.1)];
        assert!(matches!(
            within_polygon(&dataset, &border),
            Err(GridError::InvalidPolygon { points: 2 })
        ));
    }

    #[test]
    fn test_within_polygon_accepts_pre_closed_ring() {
        let cells = siblings(2);
        let dataset: Dataset = cells.iter().map(|&c| reading(c, -50, 1)).collect();

        let mut border = square(56.0, 38.0, 0.01);
        border.push(border[0]);
        let result = within_polygon(&dataset, &border).unwrap();
        assert_eq!(result.len(), dataset.len());
    }

    // --- aggregate ---

    #[test]
    fn test_aggregate_at_finest_resolution_is_identity() {
        let cells = siblings(3);
        let dataset = Dataset::new(vec![
            reading(cells[0], -50, 3),
            reading(cells[1], -60, 1),
            reading(cells[2], -70, 2),
        ]);

        let rows = aggregate(&dataset, 12).unwrap();
        assert_eq!(rows.len(), 3);
        // singleton groups report their own level, sorted by category
        assert_eq!(rows[0].category_id, 1);
        assert_eq!(rows[0].median_level, -60);
        assert_eq!(rows[0].cell, cells[1]);
        assert_eq!(rows[1].category_id, 2);
        assert_eq!(rows[2].category_id, 3);
    }

    #[test]
    fn test_aggregate_median_odd_group() {
        let cells = siblings(3);
        let dataset = Dataset::new(vec![
            reading(cells[0], -100, 7),
            reading(cells[1], -90, 7),
            reading(cells[2], -80, 7),
        ]);

        let rows = aggregate(&dataset, 10).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].median_level, -90);
    }

    #[test]
    fn test_aggregate_median_even_group_truncates_toward_zero() {
        let cells = siblings(2);
        let dataset = Dataset::new(vec![
            reading(cells[0], -100, 7),
            reading(cells[1], -90, 7),
        ]);

        let rows = aggregate(&dataset, 10).unwrap();
        assert_eq!(rows.len(), 1);
        // mean -95.0 stays -95; -95.5 would also truncate to -95
        assert_eq!(rows[0].median_level, -95);
    }

    #[test]
    fn test_aggregate_groups_by_ancestor_and_category() {
        let cells = siblings(4);
        let dataset = Dataset::new(vec![
            reading(cells[0], -50, 1),
            reading(cells[1], -60, 1),
            reading(cells[2], -70, 2),
            reading(cells[3], -80, 2),
        ]);

        let rows = aggregate(&dataset, 10).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category_id, 1);
        assert_eq!(rows[0].median_level, -55);
        assert_eq!(rows[1].category_id, 2);
        assert_eq!(rows[1].median_level, -75);
    }

    #[test]
    fn test_aggregate_sorted_by_category_stable_within_ties() {
        // two ancestors share category 5; the dataset meets ancestor B's
        // group first, so its row leads within the tie
        let near = siblings(2);
        let far = cell_at(56.1, 38.1);
        let dataset = Dataset::new(vec![
            reading(far, -40, 9),
            reading(near[0], -50, 5),
            reading(far, -60, 5),
            reading(near[1], -70, 5),
        ]);

        let rows = aggregate(&dataset, 10).unwrap();
        assert_eq!(rows.len(), 3);
        let near_parent = grid::cell_parent(near[0], Resolution::Ten).unwrap();
        assert_eq!(rows[0].category_id, 5);
        assert_eq!(rows[0].cell, near_parent);
        assert_eq!(rows[1].category_id, 5);
        assert_eq!(rows[2].category_id, 9);
    }

    #[test]
    fn test_aggregate_rejects_out_of_range_resolution() {
        let dataset = Dataset::default();
        assert!(matches!(
            aggregate(&dataset, -1),
            Err(GridError::InvalidResolution(-1))
        ));
        assert!(matches!(
            aggregate(&dataset, 13),
            Err(GridError::InvalidResolution(13))
        ));
    }

    #[test]
    fn test_aggregate_empty_dataset() {
        let rows = aggregate(&Dataset::default(), 6).unwrap();
        assert!(rows.is_empty());
    }
}
