use log::trace;

use crate::step::{Number, Operator, Step};

/// Produce every valid step combining `a` and `b`.
///
/// The operands are ordered internally, so `combine(a, b)` and `combine(b, a)`
/// agree. Candidates that would give a zero difference, an inexact quotient or
/// an overflowing value are left out. Output order is `+`, `*`, `-`, `/`.
pub fn combine(a: Number, b: Number) -> Vec<Step> {
    let (smaller, larger) = if a <= b { (a, b) } else { (b, a) };
    let mut steps = Vec::with_capacity(4);

    if let Some(sum) = smaller.checked_add(larger) {
        steps.push(Step::new(smaller, Operator::Add, larger, sum));
    }

    if let Some(product) = smaller.checked_mul(larger) {
        steps.push(Step::new(smaller, Operator::Mul, larger, product));
    }

    if larger != smaller
        && let Some(difference) = larger.checked_sub(smaller)
    {
        steps.push(Step::new(larger, Operator::Sub, smaller, difference));
    }

    if smaller != 0
        && larger.checked_rem(smaller) == Some(0)
        && let Some(quotient) = larger.checked_div(smaller)
    {
        steps.push(Step::new(larger, Operator::Div, smaller, quotient));
    }

    trace!("combine({}, {}) -> {} steps", a, b, steps.len());
    steps
}
