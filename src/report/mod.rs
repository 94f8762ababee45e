//! Text presentation of solver output

mod group;
mod render;

pub use group::{StepGroup, group_by_step_count};
pub use render::{RenderStyle, render_no_solution, render_report, render_solution};
