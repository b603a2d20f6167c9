//! Uniform-grid spatial index for splash deduplication queries.

use rustc_hash::FxHashMap;

use crate::core_types::vec3::Vec3;

/// Integer grid cell coordinate for a world position.
///
/// Derived by dividing each component by the grid's cell size and flooring,
/// so negative coordinates map to distinct cells (no truncation toward zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    /// Cell index along X
    pub ix: i32,
    /// Cell index along Y
    pub iy: i32,
    /// Cell index along Z
    pub iz: i32,
}

impl CellKey {
    /// Compute the cell key for a position at the given cell size.
    pub fn for_position(position: &Vec3, cell_size: f32) -> Self {
        Self {
            ix: (position.x / cell_size).floor() as i32,
            iy: (position.y / cell_size).floor() as i32,
            iz: (position.z / cell_size).floor() as i32,
        }
    }

    /// Offset this key by whole cells along each axis.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            ix: self.ix + dx,
            iy: self.iy + dy,
            iz: self.iz + dz,
        }
    }
}

/// Hash-grid spatial index answering "is any registered point within
/// distance d of this point?" in O(1) amortized per query.
///
/// Positions are bucketed by [`CellKey`]; a proximity query only scans the
/// 3×3×3 block of cells around the query point. Callers must therefore pick
/// a cell size of at least the largest `min_distance` they will query with
/// (the placement policy uses `2 × splash_spacing`), so any point closer
/// than `min_distance` is at most one cell away on each axis.
///
/// The grid grows monotonically: there is no removal or eviction, and the
/// same position may be registered more than once. Memory is proportional to
/// the total number of registered points over the grid's lifetime, which is
/// bounded by effect lifetime rather than by the grid itself.
pub struct SpatialGrid {
    cells: FxHashMap<CellKey, Vec<Vec3>>,
    cell_size: f32,
}

impl SpatialGrid {
    /// Create an empty grid with a fixed cell size.
    ///
    /// Non-positive or non-finite cell sizes are raised to a small positive
    /// floor so cell keys stay well defined.
    pub fn new(cell_size: f32) -> Self {
        const MIN_CELL_SIZE: f32 = 1e-4;
        let cell_size = if cell_size.is_finite() && cell_size > MIN_CELL_SIZE {
            cell_size
        } else {
            MIN_CELL_SIZE
        };
        Self {
            cells: FxHashMap::default(),
            cell_size,
        }
    }

    /// Insert a position into its cell bucket.
    ///
    /// Duplicates are allowed and insertion order within a bucket is
    /// preserved.
    pub fn register(&mut self, position: Vec3) {
        let key = CellKey::for_position(&position, self.cell_size);
        self.cells.entry(key).or_default().push(position);
    }

    /// Check whether any registered point lies strictly closer than
    /// `min_distance` to `position`.
    ///
    /// Scans the 27 cells centered on the query's cell. Returns `false` on
    /// an empty grid.
    pub fn is_occupied(&self, position: &Vec3, min_distance: f32) -> bool {
        let key = CellKey::for_position(position, self.cell_size);
        let min_dist_sq = min_distance * min_distance;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = self.cells.get(&key.offset(dx, dy, dz)) else {
                        continue;
                    };
                    for stored in bucket {
                        if (position - stored).norm_squared() < min_dist_sq {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Cell size fixed at construction.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of registered points, duplicates included.
    pub fn point_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }
}
