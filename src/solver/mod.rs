pub mod constants;
mod core;
mod dedup;
mod errors;
mod solutions;
mod stats;

pub use self::core::{Solver, SolverConfig};
pub use errors::SolverError;
pub use solutions::SolutionSet;
pub use stats::SearchStats;

#[cfg(test)]
mod tests;
