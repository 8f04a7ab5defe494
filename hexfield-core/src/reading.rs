//! The `Reading` record and the immutable dataset holding it.

use h3o::CellIndex;

/// One synthetic sensor reading bound to a resolution-12 cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Cell the reading is attached to. Resolution 12 in generated data.
    pub cell: CellIndex,
    /// Signal magnitude, synthetic, in [-120, -47].
    pub level: i32,
    /// Category tag, synthetic, in [1, 100].
    pub category_id: u32,
}

/// Ordered, immutable collection of readings.
///
/// Built once at startup and shared by reference afterwards; there is no
/// mutation API. Cell values are unique within a generated dataset (the
/// disk traversal visits each cell at most once).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate readings in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }
}

impl FromIterator<Reading> for Dataset {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
