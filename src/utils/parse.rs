use log::{debug, warn};

use crate::step::Number;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the trimmed text is empty or is not a whole number
/// that fits in a `Number`.
pub fn parse_number(text: &str) -> Result<Number, UtilsError> {
    let trimmed = text.trim();
    debug!("Parsing number from '{}'", trimmed);

    if trimmed.is_empty() {
        warn!("Number text is empty");
        return Err(UtilsError::EmptyInput);
    }

    trimmed.parse::<Number>().map_err(|_| {
        warn!("Rejecting non-integer input: '{}'", trimmed);
        UtilsError::InvalidNumber(trimmed.to_string())
    })
}

/// Parse every number found in `args`, where each argument may itself hold
/// several numbers separated by commas or whitespace.
///
/// # Errors
///
/// Returns an error if no numbers are present or any fragment fails to parse.
pub fn parse_numbers<S: AsRef<str>>(args: &[S]) -> Result<Vec<Number>, UtilsError> {
    let numbers = args
        .iter()
        .flat_map(|arg| arg.as_ref().split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|fragment| !fragment.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        warn!("No numbers supplied");
        return Err(UtilsError::EmptyInput);
    }

    debug!("Parsed numbers: {:?}", numbers);
    Ok(numbers)
}
