use std::collections::BTreeMap;

use crate::analysis::is_golden_path;
use crate::solver::SolutionSet;
use crate::step::Solution;

/// Solutions sharing the same number of steps
#[derive(Debug, Clone, PartialEq)]
pub struct StepGroup<'a> {
    pub step_count: usize,
    pub solutions: Vec<&'a Solution>,
    /// Some solution in the group is a golden path
    pub has_golden_path: bool,
}

/// Group solutions by step count, fewest steps first.
///
/// Solutions keep their solution-set order within a group.
pub fn group_by_step_count(set: &SolutionSet) -> Vec<StepGroup<'_>> {
    let mut by_count: BTreeMap<usize, Vec<&Solution>> = BTreeMap::new();
    for solution in set {
        by_count.entry(solution.len()).or_default().push(solution);
    }

    by_count
        .into_iter()
        .map(|(step_count, solutions)| {
            let has_golden_path = solutions.iter().any(|s| is_golden_path(s));
            StepGroup {
                step_count,
                solutions,
                has_golden_path,
            }
        })
        .collect()
}
