//! Transition rules for the automaton.
//!
//! A rule decides the next-generation liveness of a single cell from its current
//! state and the number of live neighbors in both the Moore (8-connected) and
//! von Neumann (4-connected) neighborhoods.

use serde::{Deserialize, Serialize};

/// Cellular automaton rule set.
///
/// Implementations must be pure: the result depends only on the arguments.
/// `moore` is in `0..=8` and `von_neumann` in `0..=4` on any grid of at least
/// 3x3 cells.
pub trait Rule {
    /// Live/dead state of a cell in the next generation.
    fn next(&self, current: bool, moore: u8, von_neumann: u8) -> bool;
}

/// Conway's classic B3/S23 rules: a cell is born with exactly 3 live neighbors
/// and survives with 2 or 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conway;

impl Rule for Conway {
    #[inline]
    fn next(&self, current: bool, moore: u8, _von_neumann: u8) -> bool {
        moore == 3 || (current && moore == 2)
    }
}

/// Rule selection for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleKind {
    /// B3/S23.
    #[default]
    Conway,
}

impl Rule for RuleKind {
    #[inline]
    fn next(&self, current: bool, moore: u8, von_neumann: u8) -> bool {
        match self {
            RuleKind::Conway => Conway.next(current, moore, von_neumann),
        }
    }
}
