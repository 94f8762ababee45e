use thiserror::Error;

use crate::step::Number;

/// Errors raised while parsing or validating puzzle input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Not a whole number: '{0}'")]
    InvalidNumber(String),
    #[error("Numbers must be positive, got {0}")]
    NonPositiveNumber(Number),
    #[error("Target must be positive, got {0}")]
    NonPositiveTarget(Number),
    #[error("At least 2 numbers are required, got {0}")]
    TooFewNumbers(usize),
    #[error("At most {max} numbers are allowed, got {count}")]
    TooManyNumbers { count: usize, max: usize },
}
