use std::fmt;

use crate::step::types::{Operator, Step};

/// Map a raw operator character to its display symbol.
///
/// Characters without a mapping are returned unchanged.
pub fn format_operator(operator: char) -> String {
    match operator {
        '+' => "+".to_string(),
        '-' => "−".to_string(),
        '*' => "×".to_string(),
        '/' => "÷".to_string(),
        other => other.to_string(),
    }
}

impl Operator {
    /// Display symbol (`−`, `×`, `÷` instead of the ASCII forms)
    pub fn symbol(self) -> String {
        format_operator(self.as_char())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}
