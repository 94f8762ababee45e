use log::{debug, warn};

use crate::step::Number;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the target is zero or negative.
pub fn validate_target(target: Number) -> Result<(), UtilsError> {
    if target <= 0 {
        warn!("Target is not positive: {}", target);
        return Err(UtilsError::NonPositiveTarget(target));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the pool has fewer than two numbers, more than
/// `max_pool_size` numbers, or contains a number that is not positive.
pub fn validate_pool(numbers: &[Number], max_pool_size: usize) -> Result<(), UtilsError> {
    debug!("Validating pool: {:?}", numbers);

    if numbers.len() < 2 {
        warn!("Pool too small: {} numbers", numbers.len());
        return Err(UtilsError::TooFewNumbers(numbers.len()));
    }

    if numbers.len() > max_pool_size {
        warn!(
            "Pool too large: {} numbers (max {})",
            numbers.len(),
            max_pool_size
        );
        return Err(UtilsError::TooManyNumbers {
            count: numbers.len(),
            max: max_pool_size,
        });
    }

    if let Some(&bad) = numbers.iter().find(|&&n| n <= 0) {
        warn!("Pool contains a non-positive number: {}", bad);
        return Err(UtilsError::NonPositiveNumber(bad));
    }

    debug!("Pool validation successful");
    Ok(())
}
