use crate::step::{Number, Step};

fn uses_previous_result(step: &Step, previous: Number) -> bool {
    step.left == previous || (step.operator.is_commutative() && step.right == previous)
}

/// True when every step builds directly on the result of the step before it.
///
/// The previous result must be the left operand, or either operand for `+` and `*`.
/// An empty solution is not golden; a single step always is.
pub fn is_golden_path(solution: &[Step]) -> bool {
    match solution {
        [] => false,
        [_] => true,
        _ => solution
            .windows(2)
            .all(|pair| matches!(pair, [prev, next] if uses_previous_result(next, prev.result))),
    }
}
