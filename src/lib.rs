//! Toroidal cellular automaton engine with aged cells.
//!
//! This crate provides a 2-D cellular automaton on a wrapping lattice. Cells
//! carry an age (generations survived), the transition rule is pluggable, and a
//! CRC-32 of the grid is maintained as a cheap signature for cycle detection.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and seeding for runs and surveys
//! - `compute`: The engine (rules, neighbor counting, model) and tools built on
//!   it (snapshots, statistics, cycle detection, parallel surveys)
//!
//! # Example
//!
//! ```rust
//! use life_ca::compute::{CycleDetector, Model};
//!
//! let mut model = Model::with_size(64, 64).unwrap();
//! model.populate(0.3).unwrap();
//!
//! let mut detector = CycleDetector::new(32).unwrap();
//! for _ in 0..100 {
//!     model.advance();
//!     if let Some(cycle) = detector.observe(model.generation(), model.checksum()) {
//!         println!("period {} cycle from generation {}", cycle.period, cycle.first_seen);
//!         break;
//!     }
//! }
//!
//! let terrain = model.terrain();
//! println!("{} cells alive", terrain.population());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{
    Conway, CycleDetector, Model, ModelError, Rule, RuleKind, Terrain, TerrainStats,
};
pub use schema::{ConfigError, Pattern, Seed, SimulationConfig, SurveyConfig};
