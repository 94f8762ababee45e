use crate::solver::dedup::canonical_key;
use crate::step::{Solution, Step};

/// Non-empty, deduplicated solutions in the order the search found them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
}

impl SolutionSet {
    /// Wrap `solutions`, or `None` when there are none
    pub(crate) fn from_solutions(solutions: Vec<Solution>) -> Option<Self> {
        if solutions.is_empty() {
            None
        } else {
            Some(Self { solutions })
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Never true for a set produced by the solver
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_vec(self) -> Vec<Solution> {
        self.solutions
    }

    /// True when some solution uses the same steps as `solution`, in any order
    pub fn contains(&self, solution: &[Step]) -> bool {
        let key = canonical_key(solution);
        self.solutions.iter().any(|s| canonical_key(s) == key)
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl IntoIterator for SolutionSet {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}
