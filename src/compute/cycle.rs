//! Cycle detection from a rolling history of terrain checksums.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::schema::ConfigError;

/// A repeated terrain signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Most recent earlier generation recorded with the same checksum.
    pub first_seen: u64,
    /// Generations between the two sightings.
    pub period: u64,
}

/// Remembers the last `capacity` checksums and reports when one repeats.
///
/// Matching is by CRC-32 only, so a reported cycle is very likely but not
/// certain.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    capacity: usize,
    history: VecDeque<(u64, u32)>,
}

impl CycleDetector {
    /// Create a detector with a window of `capacity` generations.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCycleHistory);
        }
        Ok(Self {
            capacity,
            history: VecDeque::with_capacity(capacity),
        })
    }

    /// Record the checksum for `generation`.
    ///
    /// Returns the cycle if the same checksum is already in the window. The
    /// observation is recorded either way.
    pub fn observe(&mut self, generation: u64, checksum: u32) -> Option<Cycle> {
        let cycle = self
            .history
            .iter()
            .rev()
            .find(|&&(_, seen)| seen == checksum)
            .map(|&(first_seen, _)| Cycle {
                first_seen,
                period: generation.saturating_sub(first_seen),
            });

        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back((generation, checksum));
        cycle
    }

    /// Forget all observations, e.g. after the model is repopulated.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Number of observations currently held.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
