//! Seed types for initializing a model.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use super::config::check_density;
use crate::compute::{Model, ModelError, Rule};

/// Complete seed specification for model initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Initial terrain patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Independent Bernoulli trial per cell.
    Random {
        /// Overrides the configuration density.
        #[serde(default)]
        density: Option<f64>,
        /// Random seed; `None` draws from entropy.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Explicit living cells on an otherwise empty terrain.
    Custom {
        /// List of (x, y, age) entries.
        cells: Vec<(usize, usize, i8)>,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Random {
            density: None,
            seed: None,
        }
    }
}

impl Seed {
    /// Check pattern parameters that do not depend on the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.pattern {
            Pattern::Random {
                density: Some(density),
                ..
            } => check_density(*density),
            Pattern::Custom { cells } => match cells.iter().find(|&&(_, _, age)| age < 0) {
                Some(&(_, _, age)) => Err(ModelError::InvalidAge(age).into()),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    /// Seed `model`, leaving it at generation 0 with a current checksum.
    ///
    /// `default_density` is used when a random pattern does not set its own.
    pub fn apply<R: Rule>(
        &self,
        model: &mut Model<R>,
        default_density: f64,
    ) -> Result<(), ModelError> {
        match &self.pattern {
            Pattern::Random { density, seed } => {
                let density = density.unwrap_or(default_density);
                match seed {
                    Some(seed) => model.populate_with(density, &mut StdRng::seed_from_u64(*seed)),
                    None => model.populate(density),
                }
            }
            Pattern::Custom { cells } => {
                let (width, height) = (model.width(), model.height());
                if let Some(&(x, y, _)) = cells.iter().find(|&&(x, y, _)| x >= width || y >= height)
                {
                    return Err(ModelError::OutOfRange {
                        x,
                        y,
                        width,
                        height,
                    });
                }
                if let Some(&(_, _, age)) = cells.iter().find(|&&(_, _, age)| age < 0) {
                    return Err(ModelError::InvalidAge(age));
                }
                model.clear();
                for &(x, y, age) in cells {
                    model.set_age(x, y, age)?;
                }
                model.checksum();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_pattern() {
        let seed = Seed {
            pattern: Pattern::Custom {
                cells: vec![(1, 2, 1), (2, 2, 5), (3, 2, 1)],
            },
        };
        let mut model = Model::with_size(5, 5).unwrap();
        model.populate(1.0).unwrap();
        model.advance();

        seed.apply(&mut model, 0.5).unwrap();
        let terrain = model.terrain();
        assert_eq!(model.generation(), 0);
        assert_eq!(terrain.population(), 3);
        assert_eq!(terrain.get(2, 2), Some(5));
        assert_eq!(model.checksum(), terrain.checksum());
    }

    #[test]
    fn test_rejected_custom_pattern_leaves_model_untouched() {
        let mut model = Model::with_size(5, 5).unwrap();
        model.populate(0.5).unwrap();
        model.advance();
        let before = model.terrain();

        for cells in [vec![(0, 0, 1), (5, 1, 1)], vec![(1, 1, 1), (2, 2, -3)]] {
            let seed = Seed {
                pattern: Pattern::Custom { cells },
            };
            assert!(seed.apply(&mut model, 0.5).is_err());
            assert_eq!(model.terrain(), before);
            assert_eq!(model.generation(), 1);
        }

        let seed = Seed {
            pattern: Pattern::Custom {
                cells: vec![(2, 7, 1)],
            },
        };
        assert_eq!(
            seed.apply(&mut model, 0.5),
            Err(ModelError::OutOfRange {
                x: 2,
                y: 7,
                width: 5,
                height: 5
            })
        );
    }

    #[test]
    fn test_random_density_override() {
        let seed = Seed {
            pattern: Pattern::Random {
                density: Some(1.0),
                seed: Some(3),
            },
        };
        let mut model = Model::with_size(6, 6).unwrap();
        seed.apply(&mut model, 0.0).unwrap();
        assert_eq!(model.terrain().population(), 36);
    }

    #[test]
    fn test_validate() {
        let bad_density = Seed {
            pattern: Pattern::Random {
                density: Some(2.0),
                seed: None,
            },
        };
        assert!(bad_density.validate().is_err());

        let bad_age = Seed {
            pattern: Pattern::Custom {
                cells: vec![(0, 0, -1)],
            },
        };
        assert!(matches!(
            bad_age.validate(),
            Err(ConfigError::Model(ModelError::InvalidAge(-1)))
        ));

        assert!(Seed::default().validate().is_ok());
    }

    #[test]
    fn test_pattern_json() {
        let seed: Seed =
            serde_json::from_str(r#"{"pattern": {"type": "Custom", "cells": [[0, 1, 1]]}}"#)
                .unwrap();
        assert!(matches!(seed.pattern, Pattern::Custom { ref cells } if cells == &[(0, 1, 1)]));
    }
}
