use std::collections::HashSet;

use crate::analysis::is_golden_path;
use crate::report::group::group_by_step_count;
use crate::solver::SolutionSet;
use crate::step::{Number, Operator, Step};

/// How operators are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// `−`, `×`, `÷`
    #[default]
    Symbols,
    /// `-`, `*`, `/`
    Ascii,
}

impl RenderStyle {
    fn operator(self, operator: Operator) -> String {
        match self {
            RenderStyle::Symbols => operator.symbol(),
            RenderStyle::Ascii => operator.as_char().to_string(),
        }
    }
}

fn operand(value: Number, intermediate: bool) -> String {
    if intermediate {
        format!("[{}]", value)
    } else {
        value.to_string()
    }
}

fn render_step(step: &Step, earlier: &HashSet<Number>, style: RenderStyle) -> String {
    format!(
        "{} {} {} = {}",
        operand(step.left, earlier.contains(&step.left)),
        style.operator(step.operator),
        operand(step.right, earlier.contains(&step.right)),
        step.result
    )
}

/// One line per step. Operands equal to an earlier step's result are bracketed.
pub fn render_solution(solution: &[Step], style: RenderStyle) -> Vec<String> {
    let mut earlier = HashSet::new();
    solution
        .iter()
        .map(|step| {
            let line = render_step(step, &earlier, style);
            earlier.insert(step.result);
            line
        })
        .collect()
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Full report: a header, then solutions grouped by step count.
///
/// Groups holding a golden path are starred. With `golden_only`, only golden
/// solutions are listed and the header counts those.
pub fn render_report(set: &SolutionSet, style: RenderStyle, golden_only: bool) -> String {
    let groups: Vec<_> = group_by_step_count(set)
        .into_iter()
        .filter_map(|mut group| {
            if golden_only {
                group.solutions.retain(|s| is_golden_path(s));
            }
            (!group.solutions.is_empty()).then_some(group)
        })
        .collect();

    let listed: usize = groups.iter().map(|g| g.solutions.len()).sum();
    let mut lines = vec![format!("Found {}", plural(listed, "solution"))];

    for group in &groups {
        let star = if group.has_golden_path { " ⭐" } else { "" };
        lines.push(String::new());
        lines.push(format!(
            "{} ({}){}",
            plural(group.step_count, "step"),
            group.solutions.len(),
            star
        ));
        for (idx, solution) in group.solutions.iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            lines.extend(
                render_solution(solution, style)
                    .into_iter()
                    .map(|line| format!("  {}", line)),
            );
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_no_solution(target: Number) -> String {
    format!("No way to reach {} with the given numbers.", target)
}
