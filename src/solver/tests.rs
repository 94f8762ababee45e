use crate::analysis::all_intermediate_subtotals_used;
use crate::solver::{SearchStats, SolutionSet, Solver, SolverConfig, SolverError};
use crate::step::{Operator, Solution, Step};
use crate::utils::UtilsError;

fn add(left: i64, right: i64) -> Step {
    Step::new(left, Operator::Add, right, left + right)
}

fn mul(left: i64, right: i64) -> Step {
    Step::new(left, Operator::Mul, right, left * right)
}

fn sub(left: i64, right: i64) -> Step {
    Step::new(left, Operator::Sub, right, left - right)
}

fn div(left: i64, right: i64) -> Step {
    Step::new(left, Operator::Div, right, left / right)
}

fn solve(numbers: &[i64], target: i64) -> Option<SolutionSet> {
    let solver = Solver::default();
    match solver.solve(numbers, target) {
        Ok(result) => result,
        Err(e) => panic!("unexpected error: {}", e),
    }
}

fn assert_well_formed(set: &SolutionSet, target: i64) {
    for solution in set {
        assert!(!solution.is_empty());
        assert_eq!(solution.last().map(|s| s.result), Some(target));
        assert!(
            all_intermediate_subtotals_used(solution),
            "wasted subtotal in {:?}",
            solution
        );
        for step in solution {
            match step.operator {
                Operator::Sub => assert_ne!(step.left, step.right),
                Operator::Div => assert_eq!(step.left % step.right, 0),
                Operator::Add | Operator::Mul => {}
            }
        }
    }
}

#[test]
fn test_no_solution() {
    assert!(solve(&[1, 2], 4).is_none());
}

#[test]
fn test_single_step_addition() {
    let result = solve(&[1, 2], 3);
    assert_eq!(result.map(SolutionSet::into_vec), Some(vec![vec![add(1, 2)]]));
}

#[test]
fn test_single_step_multiplication() {
    let result = solve(&[2, 3], 6);
    assert_eq!(result.map(SolutionSet::into_vec), Some(vec![vec![mul(2, 3)]]));
}

#[test]
fn test_single_step_subtraction() {
    let result = solve(&[2, 3], 1);
    assert_eq!(result.map(SolutionSet::into_vec), Some(vec![vec![sub(3, 2)]]));
}

#[test]
fn test_single_step_division() {
    let result = solve(&[2, 6], 3);
    assert_eq!(result.map(SolutionSet::into_vec), Some(vec![vec![div(6, 2)]]));
}

#[test]
fn test_division_does_not_round() {
    assert!(solve(&[2, 7], 3).is_none());
}

#[test]
fn test_multi_step() {
    let result = solve(&[1, 2, 4], 12);
    assert_eq!(
        result.map(SolutionSet::into_vec),
        Some(vec![vec![add(1, 2), mul(3, 4)]])
    );
}

#[test]
fn test_duplicate_values_are_deduplicated() {
    let result = solve(&[2, 2, 3], 5);
    assert_eq!(result.map(SolutionSet::into_vec), Some(vec![vec![add(2, 3)]]));
}

#[test]
fn test_distinct_solutions_are_kept() {
    let result = solve(&[2, 2], 4);
    assert!(result.is_some());
    if let Some(set) = result {
        assert_eq!(set.len(), 2);
        assert!(set.contains(&[add(2, 2)]));
        assert!(set.contains(&[mul(2, 2)]));
    }
}

#[test]
fn test_unused_result_is_pruned() {
    let result = solve(&[1, 2, 3, 4], 5);
    assert!(result.is_some());
    if let Some(set) = result {
        assert_well_formed(&set, 5);
        assert!(set.contains(&[add(2, 3)]));
        assert!(set.contains(&[add(1, 4)]));
        // 1 * 4 = 4 is never consumed by 2 + 3
        assert!(!set.contains(&[mul(1, 4), add(2, 3)]));
    }
}

#[test]
fn test_pruned_chain_alternatives() {
    let result = solve(&[1, 2, 3], 3);
    assert!(result.is_some());
    if let Some(set) = result {
        assert_well_formed(&set, 3);
        assert!(set.contains(&[add(1, 2)]));
        assert!(set.contains(&[mul(1, 3)]));
        assert!(set.contains(&[div(3, 1)]));
        assert!(set.contains(&[sub(2, 1), mul(1, 3)]));
        assert!(set.contains(&[sub(2, 1), div(3, 1)]));
        assert_eq!(set.len(), 5);
    }
}

#[test]
fn test_contains_ignores_step_order() {
    let set = SolutionSet::from_solutions(vec![vec![add(1, 2), mul(4, 5), add(3, 20)]]);
    assert!(set.is_some());
    if let Some(set) = set {
        assert!(set.contains(&[mul(4, 5), add(1, 2), add(3, 20)]));
        assert!(!set.contains(&[mul(4, 5), add(3, 20)]));
    }
}

#[test]
fn test_five_number_pool() {
    let result = solve(&[25, 50, 75, 100, 3], 253);
    assert!(result.is_some());
    if let Some(set) = result {
        assert_well_formed(&set, 253);
        assert!(set.iter().any(|s| s.len() == 4));
    }
}

#[test]
fn test_results_are_deterministic() {
    let first = solve(&[3, 7, 8, 10], 24);
    let second = solve(&[3, 7, 8, 10], 24);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_no_two_solutions_share_steps() {
    let result = solve(&[1, 1, 2, 3], 6);
    assert!(result.is_some());
    if let Some(set) = result {
        assert_well_formed(&set, 6);
        let mut keys: Vec<Solution> = set
            .iter()
            .map(|s| {
                let mut key = s.clone();
                key.sort();
                key
            })
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}

#[test]
fn test_search_small_pools_have_no_solution() {
    let solver = Solver::default();
    assert!(solver.search(&[], 5).is_none());
    assert!(solver.search(&[5], 5).is_none());
}

#[test]
fn test_solve_rejects_invalid_input() {
    let solver = Solver::default();
    assert_eq!(
        solver.solve(&[5], 5),
        Err(SolverError::InvalidInput(UtilsError::TooFewNumbers(1)))
    );
    assert_eq!(
        solver.solve(&[1, 2], 0),
        Err(SolverError::InvalidInput(UtilsError::NonPositiveTarget(0)))
    );
    assert_eq!(
        solver.solve(&[1, 0], 1),
        Err(SolverError::InvalidInput(UtilsError::NonPositiveNumber(0)))
    );
}

#[test]
fn test_custom_pool_limit() {
    let solver = Solver::new(SolverConfig { max_pool_size: 3 });
    assert_eq!(solver.config().max_pool_size, 3);
    assert_eq!(
        solver.solve(&[1, 2, 3, 4], 10),
        Err(SolverError::InvalidInput(UtilsError::TooManyNumbers {
            count: 4,
            max: 3
        }))
    );
    assert!(matches!(solver.solve(&[1, 2, 4], 12), Ok(Some(_))));
}

#[test]
fn test_search_stats() {
    let solver = Solver::default();
    let (result, stats) = solver.search_with_stats(&[2, 2, 3], 5);
    assert!(result.is_some());
    assert!(stats.pools_explored >= 1);
    assert!(stats.steps_generated >= 8);
    assert_eq!(stats.raw_solutions - stats.duplicates_removed, 1);
    assert!(stats.duplicates_removed >= 1);

    let (result, stats) = solver.search_with_stats(&[7], 7);
    assert!(result.is_none());
    assert_eq!(stats, SearchStats::default());
}
