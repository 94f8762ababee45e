/// Counters gathered while searching; they never affect the result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pools of two or more values that were expanded
    pub pools_explored: usize,
    /// Candidate steps produced by the combiner
    pub steps_generated: usize,
    /// Solutions found before deduplication, summed over every recursion level
    pub raw_solutions: usize,
    /// Solutions dropped as reorderings of one already found
    pub duplicates_removed: usize,
}
