//! Population statistics for monitoring runs.

use serde::{Deserialize, Serialize};

use super::Terrain;

/// Summary of a terrain snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainStats {
    pub population: usize,
    /// Fraction of cells alive.
    pub density: f64,
    pub max_age: i8,
    /// Mean age over living cells (0 when none are alive).
    pub mean_age: f64,
}

impl TerrainStats {
    /// Compute statistics from a snapshot.
    pub fn from_terrain(terrain: &Terrain) -> Self {
        let mut population = 0usize;
        let mut max_age = 0i8;
        let mut total_age = 0u64;

        for &age in terrain.cells() {
            if age != 0 {
                population += 1;
                max_age = max_age.max(age);
                total_age += age as u64;
            }
        }

        let cells = terrain.cells().len();
        Self {
            population,
            density: if cells == 0 {
                0.0
            } else {
                population as f64 / cells as f64
            },
            max_age,
            mean_age: if population == 0 {
                0.0
            } else {
                total_age as f64 / population as f64
            },
        }
    }
}
