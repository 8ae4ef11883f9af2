//! Toroidal neighbor counting.
//!
//! Counts are scattered from each live cell onto its neighbors rather than
//! gathered per cell, so the cost scales with the live population.

/// Pre-allocated neighbor-count buffers for one grid.
///
/// Both buffers are row-major `[y * width + x]` and hold, per cell, the number
/// of live neighbors in the current generation. They are filled by
/// [`NeighborScratch::count`] and must be zeroed again (row by row, via
/// [`NeighborScratch::clear_row`]) before the next count.
#[derive(Debug, Clone)]
pub(crate) struct NeighborScratch {
    width: usize,
    height: usize,
    /// 8-connected (directly or diagonally adjacent) live neighbor counts.
    moore: Vec<u8>,
    /// 4-connected (directly adjacent) live neighbor counts.
    von_neumann: Vec<u8>,
}

impl NeighborScratch {
    /// Allocate zeroed buffers for a `width` x `height` grid.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            moore: vec![0; size],
            von_neumann: vec![0; size],
        }
    }

    /// Accumulate neighbor counts for every live cell of `grid`.
    ///
    /// Rows and columns wrap. On grids smaller than 3 in either dimension the
    /// wrapped neighbors coincide and are counted once per coincidence.
    pub(crate) fn count(&mut self, grid: &[i8]) {
        let (width, height) = (self.width, self.height);

        for i in 0..height {
            let up = (i + height - 1) % height;
            let down = (i + 1) % height;
            for j in 0..width {
                if grid[i * width + j] == 0 {
                    continue;
                }
                let left = (j + width - 1) % width;
                let right = (j + 1) % width;

                for row in [up, i, down] {
                    for col in [left, j, right] {
                        self.moore[row * width + col] += 1;
                    }
                }
                // The 3x3 sweep includes the cell itself.
                self.moore[i * width + j] -= 1;

                self.von_neumann[up * width + j] += 1;
                self.von_neumann[down * width + j] += 1;
                self.von_neumann[i * width + left] += 1;
                self.von_neumann[i * width + right] += 1;
            }
        }
    }

    /// Moore and von Neumann counts for row `y`.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> (&[u8], &[u8]) {
        let range = y * self.width..(y + 1) * self.width;
        (&self.moore[range.clone()], &self.von_neumann[range])
    }

    /// Zero both buffers for row `y`.
    #[inline]
    pub(crate) fn clear_row(&mut self, y: usize) {
        let range = y * self.width..(y + 1) * self.width;
        self.moore[range.clone()].fill(0);
        self.von_neumann[range].fill(0);
    }

    /// Zero both buffers entirely.
    pub(crate) fn clear(&mut self) {
        self.moore.fill(0);
        self.von_neumann.fill(0);
    }

    /// Moore count at `(x, y)`.
    #[cfg(test)]
    pub(crate) fn moore(&self, x: usize, y: usize) -> u8 {
        self.moore[y * self.width + x]
    }

    /// Von Neumann count at `(x, y)`.
    #[cfg(test)]
    pub(crate) fn von_neumann(&self, x: usize, y: usize) -> u8 {
        self.von_neumann[y * self.width + x]
    }
}
