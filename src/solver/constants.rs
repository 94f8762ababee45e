// Largest pool accepted by the validated entry point (a standard numbers round)
pub const DEFAULT_MAX_POOL_SIZE: usize = 6;
// A pool needs two values before any step can be taken
pub const MIN_POOL_SIZE: usize = 2;
