//! Compute module - The automaton engine and the tools built on it.

mod cycle;
mod model;
mod neighbors;
mod rule;
mod stats;
mod survey;
mod terrain;

pub use cycle::*;
pub use model::*;
pub(crate) use neighbors::NeighborScratch;
pub use rule::*;
pub use stats::*;
pub use survey::*;
pub use terrain::*;
