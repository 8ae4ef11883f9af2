//! Terrain snapshots and the CRC-32 signature used for cycle detection.

use std::fmt;

use serde::Serialize;

/// Fold a row-major grid into a CRC-32, one row at a time.
pub fn terrain_checksum(cells: &[i8], width: usize) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for row in cells.chunks(width.max(1)) {
        hasher.update(bytemuck::cast_slice(row));
    }
    hasher.finalize()
}

/// Independent copy of the automaton's grid.
///
/// Each zero element is a dead location; each non-zero element is the age (in
/// generations) of a living cell. Data is stored row-major: `[y * width + x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terrain {
    width: usize,
    height: usize,
    cells: Vec<i8>,
}

impl Terrain {
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<i8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width (columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Age at column `x`, row `y`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<i8> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Whether a living cell occupies `(x, y)`. Out-of-range positions are dead.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|age| age != 0)
    }

    /// Flat row-major cell ages.
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i8]> {
        self.cells.chunks(self.width)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&age| age != 0).count()
    }

    /// CRC-32 of the grid contents; matches [`Model::checksum`](super::Model::checksum).
    pub fn checksum(&self) -> u32 {
        terrain_checksum(&self.cells, self.width)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &age in row {
                f.write_str(if age != 0 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
