use crate::combiner::combine;
use crate::step::{Operator, Step};

#[test]
fn test_combine_all_four_operators() {
    let steps = combine(2, 6);
    assert_eq!(
        steps,
        vec![
            Step::new(2, Operator::Add, 6, 8),
            Step::new(2, Operator::Mul, 6, 12),
            Step::new(6, Operator::Sub, 2, 4),
            Step::new(6, Operator::Div, 2, 3),
        ]
    );
}

#[test]
fn test_combine_orders_operands() {
    assert_eq!(combine(6, 2), combine(2, 6));
    assert_eq!(combine(9, 4), combine(4, 9));
}

#[test]
fn test_combine_skips_inexact_division() {
    let steps = combine(2, 7);
    assert_eq!(steps.len(), 3);
    assert!(steps.iter().all(|s| s.operator != Operator::Div));
}

#[test]
fn test_combine_skips_zero_difference() {
    let steps = combine(5, 5);
    assert!(steps.iter().all(|s| s.operator != Operator::Sub));
    assert!(steps.contains(&Step::new(5, Operator::Div, 5, 1)));
    assert_eq!(steps.len(), 3);
}

#[test]
fn test_combine_with_one() {
    let steps = combine(1, 8);
    assert_eq!(steps.len(), 4);
    assert!(steps.contains(&Step::new(8, Operator::Sub, 1, 7)));
    assert!(steps.contains(&Step::new(8, Operator::Div, 1, 8)));
}

#[test]
fn test_combine_never_produces_invalid_steps() {
    for a in 1..=12 {
        for b in 1..=12 {
            let steps = combine(a, b);
            assert!((2..=4).contains(&steps.len()));
            for step in steps {
                match step.operator {
                    Operator::Add => assert_eq!(step.left + step.right, step.result),
                    Operator::Mul => assert_eq!(step.left * step.right, step.result),
                    Operator::Sub => {
                        assert!(step.left > step.right);
                        assert_eq!(step.left - step.right, step.result);
                    }
                    Operator::Div => {
                        assert_eq!(step.left % step.right, 0);
                        assert_eq!(step.left / step.right, step.result);
                    }
                }
            }
        }
    }
}

#[test]
fn test_combine_zero_divisor_is_skipped() {
    let steps = combine(0, 4);
    assert!(steps.iter().all(|s| s.operator != Operator::Div));
}

#[test]
fn test_combine_prunes_overflow() {
    let steps = combine(i64::MAX, 2);
    assert!(steps.iter().all(|s| s.operator != Operator::Add));
    assert!(steps.iter().all(|s| s.operator != Operator::Mul));
    assert!(steps.contains(&Step::new(i64::MAX, Operator::Sub, 2, i64::MAX - 2)));
}
