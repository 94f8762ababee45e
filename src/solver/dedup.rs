use std::collections::HashSet;

use crate::step::{Solution, Step};

/// Steps sorted under the `Step` ordering; equal keys mean the same solution
pub fn canonical_key(solution: &[Step]) -> Vec<Step> {
    let mut key = solution.to_vec();
    key.sort_unstable();
    key
}

/// Keep the first solution for each canonical key, preserving input order
pub fn deduplicate(solutions: Vec<Solution>) -> Vec<Solution> {
    let mut seen = HashSet::with_capacity(solutions.len());
    solutions
        .into_iter()
        .filter(|solution| seen.insert(canonical_key(solution)))
        .collect()
}
