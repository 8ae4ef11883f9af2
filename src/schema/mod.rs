//! Schema module - Configuration and seeding types for automaton runs.

mod config;
mod seed;
mod survey;

pub use config::*;
pub use seed::*;
pub use survey::*;
