//! Countdown - An exhaustive solver for the Countdown numbers round
//!
//! Given a pool of positive integers and a target, this library finds every
//! distinct way to reach the target by repeatedly combining two values with
//! `+`, `-`, `*` or exact `/`, and classifies the solutions it finds.

pub mod analysis;
pub mod combiner;
pub mod report;
pub mod solver;
pub mod step;
pub mod utils;

// Re-export the main public API
pub use analysis::{
    all_intermediate_subtotals_used, has_unused_intermediate_subtotal, is_golden_path,
};
pub use combiner::combine;
pub use solver::{SearchStats, SolutionSet, Solver, SolverConfig, SolverError};
pub use step::{Number, Operator, Solution, Step, StepError, format_operator};
pub use utils::UtilsError;

/// Find every way to reach `target` from `numbers`
///
/// This is a convenience function that validates the input and runs a default solver.
///
/// # Arguments
///
/// * `numbers` - The pool, at least two positive integers
/// * `target` - The positive value to reach
///
/// # Returns
///
/// * `Ok(Some(SolutionSet))` - If at least one solution exists
/// * `Ok(None)` - If the search finished without finding one
/// * `Err(SolverError)` - If the input is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * Fewer than two numbers are given, or more than the default pool limit
/// * Any number, or the target, is zero or negative
///
/// # Examples
///
/// ```
/// use countdown::{Operator, Step, solve};
///
/// let solutions = solve(&[1, 2, 4], 12).unwrap().unwrap();
/// assert_eq!(solutions.len(), 1);
/// assert!(solutions.contains(&[
///     Step::new(1, Operator::Add, 2, 3),
///     Step::new(3, Operator::Mul, 4, 12),
/// ]));
///
/// assert!(solve(&[1, 2], 4).unwrap().is_none());
/// assert!(solve(&[7], 7).is_err());
/// ```
pub fn solve(numbers: &[Number], target: Number) -> Result<Option<SolutionSet>, SolverError> {
    Solver::default().solve(numbers, target)
}
