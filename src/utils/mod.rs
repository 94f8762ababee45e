//! Parsing and validation of puzzle input

mod errors;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use parse::{parse_number, parse_numbers};
pub use validation::{validate_pool, validate_target};
