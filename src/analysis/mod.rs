//! Quality checks over a finished solution
//!
//! Both checks are independent predicates: the subtotal check accepts a result
//! reused anywhere later, the golden path check demands it feed the very next step.

mod golden;
mod integrity;

pub use golden::is_golden_path;
pub use integrity::{all_intermediate_subtotals_used, has_unused_intermediate_subtotal};
