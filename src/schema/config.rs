//! Configuration types for automaton runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Seed;
use crate::compute::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, Model, ModelError, RuleKind, validate_density,
};

fn default_density() -> f64 {
    0.5
}

fn default_cycle_history() -> usize {
    64
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Probability that each cell starts alive.
    #[serde(default = "default_density")]
    pub density: f64,
    /// Transition rule.
    #[serde(default)]
    pub rule: RuleKind,
    /// Initial pattern.
    #[serde(default)]
    pub seed: Seed,
    /// Number of past checksums kept for cycle detection.
    #[serde(default = "default_cycle_history")]
    pub cycle_history: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: default_density(),
            rule: RuleKind::default(),
            seed: Seed::default(),
            cycle_history: default_cycle_history(),
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_grid()?;
        self.seed.validate()
    }

    /// Validate everything except the seed pattern.
    pub(crate) fn validate_grid(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        check_density(self.density)?;
        if self.cycle_history == 0 {
            return Err(ConfigError::InvalidCycleHistory);
        }
        Ok(())
    }

    /// Construct a model and seed it according to this configuration.
    pub fn build(&self) -> Result<Model<RuleKind>, ConfigError> {
        self.validate()?;
        let mut model = Model::new(self.width, self.height, self.rule)?;
        self.seed.apply(&mut model, self.density)?;
        Ok(model)
    }
}

/// Density check shared with the engine, reported as a config error.
pub(crate) fn check_density(density: f64) -> Result<(), ConfigError> {
    validate_density(density).map_err(|_| ConfigError::InvalidDensity(density))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Density must be within [0, 1] (got {0})")]
    InvalidDensity(f64),
    #[error("Cycle history must be non-zero")]
    InvalidCycleHistory,
    #[error("Survey must run at least one soup")]
    InvalidSoupCount,
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
