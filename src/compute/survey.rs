//! Soup survey - Run many random soups in parallel until each one cycles.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{CycleDetector, Model};
use crate::schema::{ConfigError, SurveyConfig};

/// Result of running a single soup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoupOutcome {
    /// Random seed the soup was populated with.
    pub seed: u64,
    /// Generation at which the run stopped.
    pub generation: u64,
    /// Cycle period, or `None` if the generation limit was reached first.
    pub period: Option<u64>,
    /// Living cells when the run stopped.
    pub population: usize,
}

/// Run every soup described by `config`.
///
/// Soups are independent and run in parallel; results are ordered by seed and
/// are identical between runs of the same configuration.
pub fn run_survey(config: &SurveyConfig) -> Result<Vec<SoupOutcome>, ConfigError> {
    config.validate()?;
    let base = &config.base_config;

    log::info!(
        "surveying {} soups of {}x{} at density {:.3}",
        config.soups,
        base.width,
        base.height,
        base.density
    );

    (0..config.soups as u64)
        .into_par_iter()
        .map(|k| -> Result<SoupOutcome, ConfigError> {
            let seed = config.first_seed.wrapping_add(k);
            let mut model = Model::new(base.width, base.height, base.rule)?;
            let mut detector = CycleDetector::new(base.cycle_history)?;
            model.populate_with(base.density, &mut StdRng::seed_from_u64(seed))?;

            let mut period = detector.observe(0, model.checksum()).map(|c| c.period);
            while period.is_none() && model.generation() < config.max_generations {
                model.advance();
                period = detector
                    .observe(model.generation(), model.checksum())
                    .map(|c| c.period);
            }

            let outcome = SoupOutcome {
                seed,
                generation: model.generation(),
                period,
                population: model.terrain().population(),
            };
            log::debug!("soup {}: {:?}", seed, outcome);
            Ok(outcome)
        })
        .collect()
}

/// Aggregate view of a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySummary {
    pub soups: usize,
    /// Soups that entered a cycle within the generation limit.
    pub settled: usize,
    /// Mean generation at which settled soups were detected.
    pub mean_settle_generation: f64,
    /// Number of settled soups per cycle period.
    pub periods: BTreeMap<u64, usize>,
}

impl SurveySummary {
    pub fn from_outcomes(outcomes: &[SoupOutcome]) -> Self {
        let mut periods = BTreeMap::new();
        let mut total_generation = 0u64;

        for outcome in outcomes {
            if let Some(period) = outcome.period {
                *periods.entry(period).or_insert(0) += 1;
                total_generation += outcome.generation;
            }
        }

        let settled: usize = periods.values().sum();
        Self {
            soups: outcomes.len(),
            settled,
            mean_settle_generation: if settled == 0 {
                0.0
            } else {
                total_generation as f64 / settled as f64
            },
            periods,
        }
    }
}
