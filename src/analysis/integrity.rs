use log::debug;

use crate::step::Step;

/// True when some non-final step produces a value no later step consumes.
///
/// A solution of zero or one steps has no intermediate values and is never flagged.
pub fn has_unused_intermediate_subtotal(solution: &[Step]) -> bool {
    if solution.len() <= 1 {
        return false;
    }

    solution
        .iter()
        .enumerate()
        .take(solution.len() - 1)
        .any(|(i, step)| {
            let consumed = solution
                .iter()
                .skip(i + 1)
                .any(|later| later.consumes(step.result));
            if !consumed {
                debug!("Subtotal {} from step {} is never used", step.result, i);
            }
            !consumed
        })
}

pub fn all_intermediate_subtotals_used(solution: &[Step]) -> bool {
    !has_unused_intermediate_subtotal(solution)
}
