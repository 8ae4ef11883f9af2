//! Model - The toroidal cellular automaton engine.
//!
//! The model owns the live grid of cell ages, the neighbor-count scratch
//! buffers, the generation counter and a cached CRC-32 of the grid.
//!
//! The model is not internally synchronized. If one thread advances the model
//! while another reads it, every call must go through a single mutual-exclusion
//! scope (for example an `Arc<Mutex<Model>>`). Snapshots returned by
//! [`Model::terrain`] are independent copies and can be rendered without
//! holding that lock.

use rand::Rng;

use super::{Conway, NeighborScratch, Rule, Terrain, terrain_checksum};

/// Default width of the terrain.
pub const DEFAULT_WIDTH: usize = 400;
/// Default height of the terrain.
pub const DEFAULT_HEIGHT: usize = 400;

/// Age ceiling; surviving cells stop aging here.
pub const MAX_AGE: i8 = i8::MAX;

/// Errors reported by [`Model`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Density must be within [0, 1] (got {0})")]
    InvalidDensity(f64),
    #[error("Cell age must be non-negative (got {0})")]
    InvalidAge(i8),
}

/// Check that `density` is a probability.
pub fn validate_density(density: f64) -> Result<(), ModelError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(ModelError::InvalidDensity(density))
    }
}

/// 2-D cellular automaton on a toroidal lattice.
#[derive(Debug, Clone)]
pub struct Model<R: Rule = Conway> {
    rule: R,
    width: usize,
    height: usize,
    generation: u64,
    /// Cell ages [y * width + x]; 0 is dead.
    terrain: Vec<i8>,
    neighbors: NeighborScratch,
    /// CRC-32 of `terrain`, `None` after a direct cell edit.
    checksum: Option<u32>,
}

impl Default for Model<Conway> {
    /// A 400 x 400 model using Conway's rules.
    fn default() -> Self {
        let terrain = vec![0; DEFAULT_WIDTH * DEFAULT_HEIGHT];
        let checksum = Some(terrain_checksum(&terrain, DEFAULT_WIDTH));
        Self {
            rule: Conway,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            generation: 0,
            terrain,
            neighbors: NeighborScratch::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            checksum,
        }
    }
}

impl Model<Conway> {
    /// Create a Conway model with the given size.
    pub fn with_size(width: usize, height: usize) -> Result<Self, ModelError> {
        Self::new(width, height, Conway)
    }
}

impl<R: Rule> Model<R> {
    /// Create a model of `width` columns by `height` rows.
    ///
    /// All cells start dead; no randomization is performed here.
    pub fn new(width: usize, height: usize, rule: R) -> Result<Self, ModelError> {
        let size = match width.checked_mul(height) {
            Some(size) if size > 0 => size,
            _ => return Err(ModelError::InvalidDimensions { width, height }),
        };

        let terrain = vec![0; size];
        let checksum = Some(terrain_checksum(&terrain, width));

        Ok(Self {
            rule,
            width,
            height,
            generation: 0,
            terrain,
            neighbors: NeighborScratch::new(width, height),
            checksum,
        })
    }

    /// Clear and randomly populate the terrain.
    ///
    /// Each cell is alive (age 1) with probability `density`, independently.
    /// Resets the generation count to 0.
    pub fn populate(&mut self, density: f64) -> Result<(), ModelError> {
        self.populate_with(density, &mut rand::thread_rng())
    }

    /// Same as [`Model::populate`], drawing from a caller-supplied source so
    /// that runs can be replayed.
    pub fn populate_with<G: Rng>(
        &mut self,
        density: f64,
        rng: &mut G,
    ) -> Result<(), ModelError> {
        validate_density(density)?;

        self.generation = 0;
        self.neighbors.clear();
        let mut hasher = crc32fast::Hasher::new();
        for row in self.terrain.chunks_mut(self.width) {
            for cell in row.iter_mut() {
                *cell = i8::from(rng.gen_bool(density));
            }
            hasher.update(bytemuck::cast_slice(row));
        }
        self.checksum = Some(hasher.finalize());

        log::debug!(
            "populated {}x{} terrain at density {:.3}",
            self.width,
            self.height,
            density
        );
        Ok(())
    }

    /// Kill every cell and reset the generation count to 0.
    pub fn clear(&mut self) {
        self.generation = 0;
        self.terrain.fill(0);
        self.neighbors.clear();
        self.checksum = Some(terrain_checksum(&self.terrain, self.width));
    }

    /// Advance the automaton by one generation.
    pub fn advance(&mut self) {
        let width = self.width;
        self.neighbors.count(&self.terrain);

        let mut hasher = crc32fast::Hasher::new();
        for (y, row) in self.terrain.chunks_mut(width).enumerate() {
            let (moore, von_neumann) = self.neighbors.row(y);
            for ((cell, &m), &v) in row.iter_mut().zip(moore).zip(von_neumann) {
                let age = *cell;
                let alive = age != 0;
                if self.rule.next(alive, m, v) {
                    if !alive {
                        *cell = 1;
                    } else if age < MAX_AGE {
                        *cell += 1;
                    }
                } else if alive {
                    *cell = 0;
                }
            }
            self.neighbors.clear_row(y);
            hasher.update(bytemuck::cast_slice(row));
        }

        let checksum = hasher.finalize();
        self.checksum = Some(checksum);
        self.generation += 1;
        log::trace!("generation {} checksum {:08x}", self.generation, checksum);
    }

    /// Advance the automaton by `steps` generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.advance();
        }
    }

    /// Create a living cell of age 1 at column `x`, row `y`.
    pub fn set_cell(&mut self, x: usize, y: usize) -> Result<(), ModelError> {
        self.set_age(x, y, 1)
    }

    /// Remove any living cell at column `x`, row `y`.
    pub fn clear_cell(&mut self, x: usize, y: usize) -> Result<(), ModelError> {
        self.set_age(x, y, 0)
    }

    /// Create (age 1) or remove the cell at `(x, y)`.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<(), ModelError> {
        self.set_age(x, y, i8::from(alive))
    }

    /// Set the raw age at `(x, y)`. An age of 0 clears the location.
    ///
    /// Negative ages are rejected rather than folded into `0..=127`.
    pub fn set_age(&mut self, x: usize, y: usize, age: i8) -> Result<(), ModelError> {
        if age < 0 {
            return Err(ModelError::InvalidAge(age));
        }
        let idx = self.index(x, y)?;
        self.terrain[idx] = age;
        self.checksum = None;
        Ok(())
    }

    /// Age of the cell at `(x, y)`; 0 when dead.
    pub fn age(&self, x: usize, y: usize) -> Result<i8, ModelError> {
        Ok(self.terrain[self.index(x, y)?])
    }

    /// Whether a living cell occupies `(x, y)`.
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, ModelError> {
        Ok(self.age(x, y)? != 0)
    }

    /// Copy of the terrain, safe to read while the model keeps advancing.
    pub fn terrain(&self) -> Terrain {
        Terrain::from_cells(self.width, self.height, self.terrain.clone())
    }

    /// Generations elapsed since construction or the last populate.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// CRC-32 of the terrain contents.
    ///
    /// Kept current by [`Model::populate`] and [`Model::advance`]; recomputed
    /// here only after direct cell edits. A rolling history of these values can
    /// be used to detect cycles (see [`CycleDetector`](super::CycleDetector)).
    pub fn checksum(&mut self) -> u32 {
        match self.checksum {
            Some(checksum) => checksum,
            None => {
                let checksum = terrain_checksum(&self.terrain, self.width);
                self.checksum = Some(checksum);
                checksum
            }
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

    /// Rule set in use.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, ModelError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(ModelError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
