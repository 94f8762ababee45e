//! Arithmetic steps and the solutions built from them

mod display;
mod errors;
mod types;

pub use display::format_operator;
pub use errors::StepError;
pub use types::{Number, Operator, Solution, Step};
