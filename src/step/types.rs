use crate::step::errors::StepError;

/// Integer value held in a pool or produced by a step
pub type Number = i64;

/// An ordered chain of steps whose final result is the target
pub type Solution = Vec<Step>;

/// The four arithmetic operators available in the numbers round.
///
/// Variant order defines the operator ordering used when canonicalizing solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Raw ASCII character for the operator
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// `+` and `*` may take their operands in either order
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }
}

impl TryFrom<char> for Operator {
    type Error = StepError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(StepError::UnknownOperator(other)),
        }
    }
}

/// One pairwise combination: `left operator right = result`.
///
/// Field order matters: the derived `Ord` compares `left`, then `operator`,
/// then `right`, then `result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step {
    pub left: Number,
    pub operator: Operator,
    pub right: Number,
    pub result: Number,
}

impl Step {
    pub fn new(left: Number, operator: Operator, right: Number, result: Number) -> Self {
        Self {
            left,
            operator,
            right,
            result,
        }
    }

    /// True when `value` is one of this step's operands
    pub fn consumes(&self, value: Number) -> bool {
        self.left == value || self.right == value
    }
}
