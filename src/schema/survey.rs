//! Survey configuration: many random soups run to their first cycle.

use serde::{Deserialize, Serialize};

use super::{ConfigError, SimulationConfig};

/// Top-level configuration for a soup survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Grid size, rule, density and cycle history for every soup.
    /// The seed pattern is ignored; each soup is populated at random.
    pub base_config: SimulationConfig,
    /// Number of soups to run.
    pub soups: usize,
    /// Soup `k` is seeded with `first_seed + k`.
    #[serde(default)]
    pub first_seed: u64,
    /// Generation limit per soup.
    pub max_generations: u64,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            base_config: SimulationConfig {
                width: 64,
                height: 64,
                density: 0.35,
                ..Default::default()
            },
            soups: 32,
            first_seed: 0,
            max_generations: 2_000,
        }
    }
}

impl SurveyConfig {
    /// Validate survey configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_config.validate_grid()?;
        if self.soups == 0 {
            return Err(ConfigError::InvalidSoupCount);
        }
        Ok(())
    }
}
