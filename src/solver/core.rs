use log::{debug, info, trace};

use crate::combiner::combine;
use crate::solver::constants::{DEFAULT_MAX_POOL_SIZE, MIN_POOL_SIZE};
use crate::solver::dedup::deduplicate;
use crate::solver::errors::SolverError;
use crate::solver::solutions::SolutionSet;
use crate::solver::stats::SearchStats;
use crate::step::{Number, Solution, Step};
use crate::utils::{validate_pool, validate_target};

/// Configuration for the validated entry point
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_pool_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        }
    }
}

/// Exhaustive solver for the numbers round
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate the input, then find every way to reach `target` from `numbers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not positive, or if `numbers` has fewer
    /// than two values, more than `max_pool_size` values, or a non-positive value.
    pub fn solve(
        &self,
        numbers: &[Number],
        target: Number,
    ) -> Result<Option<SolutionSet>, SolverError> {
        validate_target(target)?;
        validate_pool(numbers, self.config.max_pool_size)?;
        Ok(self.search(numbers, target))
    }

    /// Find every way to reach `target` from `pool` without validating the input.
    ///
    /// Returns `None` when no solution exists, including for pools of fewer than
    /// two values.
    pub fn search(&self, pool: &[Number], target: Number) -> Option<SolutionSet> {
        self.search_with_stats(pool, target).0
    }

    /// Same as [`Solver::search`], also returning counters from the search
    pub fn search_with_stats(
        &self,
        pool: &[Number],
        target: Number,
    ) -> (Option<SolutionSet>, SearchStats) {
        info!("Searching for {} using pool {:?}", target, pool);

        let mut stats = SearchStats::default();
        let solutions = search_pool(pool, target, &mut stats);

        info!(
            "Found {} solutions ({} pools explored, {} steps generated, {} duplicates removed)",
            solutions.len(),
            stats.pools_explored,
            stats.steps_generated,
            stats.duplicates_removed
        );

        (SolutionSet::from_solutions(solutions), stats)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Try every pair of positions in `pool`, returning deduplicated solutions
fn search_pool(pool: &[Number], target: Number, stats: &mut SearchStats) -> Vec<Solution> {
    if pool.len() < MIN_POOL_SIZE {
        return Vec::new();
    }

    stats.pools_explored += 1;
    debug!("Exploring pool {:?}", pool);

    let mut found = Vec::new();
    for (i, &a) in pool.iter().enumerate() {
        for (j, &b) in pool.iter().enumerate().skip(i + 1) {
            for step in combine(a, b) {
                stats.steps_generated += 1;
                found.extend(solutions_for_step(step, pool, (i, j), target, stats));
            }
        }
    }

    stats.raw_solutions += found.len();
    let before = found.len();
    let unique = deduplicate(found);
    stats.duplicates_removed += before - unique.len();
    unique
}

/// Solutions that start with `step`, taken on the values at `consumed`
fn solutions_for_step(
    step: Step,
    pool: &[Number],
    consumed: (usize, usize),
    target: Number,
    stats: &mut SearchStats,
) -> Vec<Solution> {
    if step.result == target {
        trace!("Step reaches target: {}", step);
        return vec![vec![step]];
    }

    let remaining = derive_pool(pool, consumed, step.result);
    if remaining.len() < MIN_POOL_SIZE {
        return Vec::new();
    }

    // A continuation must consume the value this step just produced
    search_pool(&remaining, target, stats)
        .into_iter()
        .filter(|sub| sub.iter().any(|later| later.consumes(step.result)))
        .map(|sub| {
            let mut solution = Vec::with_capacity(sub.len() + 1);
            solution.push(step);
            solution.extend(sub);
            solution
        })
        .collect()
}

/// A fresh pool without the two consumed positions, with `result` appended
fn derive_pool(pool: &[Number], consumed: (usize, usize), result: Number) -> Vec<Number> {
    let (i, j) = consumed;
    pool.iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, &n)| n)
        .chain(std::iter::once(result))
        .collect()
}
