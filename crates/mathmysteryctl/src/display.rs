//! Terminal rendering of problems and their visual explanations
//!
//! Plain-text stand-ins for the plotted number line, group grid and fact
//! web. Every renderer has an empty state instead of failing.

use mathmystery_common::{ColorMode, GroupLayout, NumberLineAxis, Problem, ProblemView, Verdict};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Filled cell in a group
const ITEM_MARK: char = '●';

/// Unused cell in a group's square
const EMPTY_MARK: char = '·';

/// Optional ANSI coloring
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Basic => true,
            ColorMode::None => false,
        };
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bad(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render_prompt(problem: &Problem, palette: &Palette) -> String {
    palette.heading(&problem.prompt())
}

pub fn render_verdict(verdict: &Verdict, palette: &Palette) -> String {
    if verdict.correct {
        palette.good("✓ Correct!")
    } else {
        match verdict.submitted {
            Some(_) => palette.bad(&format!("✗ Not quite. The answer is {}.", verdict.expected)),
            None => palette.bad(&format!(
                "✗ That isn't a number. The answer is {}.",
                verdict.expected
            )),
        }
    }
}

/// Jumps from zero, then the tick labels for the axis
pub fn render_number_line(steps: &[u32], axis: Option<&NumberLineAxis>) -> String {
    let Some(axis) = axis else {
        return "  No steps to show.".to_string();
    };

    let mut out = String::from("  0");
    let mut last = 0u32;
    for step in steps {
        out.push_str(&format!(" ─(+{})→ {}", step - last, step));
        last = *step;
    }

    let ticks: Vec<String> = axis.ticks.iter().map(|t| t.to_string()).collect();
    out.push_str(&format!("\n  axis: {}", ticks.join(" | ")));
    out
}

/// One block of marks per group, at most five groups to a row
pub fn render_groups(layout: &GroupLayout) -> String {
    if layout.is_empty() {
        return "  No groups to show.".to_string();
    }

    let side = layout.grid_side as usize;
    let items = layout.items_per_group as usize;
    let grid = layout.arrangement();
    let columns = grid.columns as usize;
    let labels: Vec<String> = (1..=layout.group_count).map(|g| format!("G{}", g)).collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let width = (side * 2 - 1).max(label_width);

    let block_lines: Vec<String> = (0..side)
        .map(|row| {
            (0..side)
                .map(|col| {
                    if row * side + col < items {
                        ITEM_MARK
                    } else {
                        EMPTY_MARK
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let mut lines = vec![format!(
        "  {} groups of {}",
        layout.group_count, layout.items_per_group
    )];
    for row_labels in labels.chunks(columns) {
        let blanks = columns - row_labels.len();
        let header: Vec<String> = row_labels
            .iter()
            .map(|l| format!("{:<width$}", l, width = width))
            .chain(std::iter::repeat(" ".repeat(width)).take(blanks))
            .collect();
        lines.push(format!("  {}", header.join("   ").trim_end()));

        for block in &block_lines {
            let cells: Vec<String> = std::iter::repeat(format!("{:<width$}", block, width = width))
                .take(row_labels.len())
                .collect();
            lines.push(format!("  {}", cells.join("   ").trim_end()));
        }
    }
    lines.join("\n")
}

pub fn render_fact_family(facts: Option<&[String]>) -> String {
    match facts {
        Some(facts) => {
            let rows: Vec<String> = facts
                .chunks(2)
                .map(|pair| format!("  {}", pair.join("    ")))
                .collect();
            rows.join("\n")
        }
        None => "  No fact family for zero: it would divide by zero.".to_string(),
    }
}

/// All three explanations with section headings
pub fn render_view(view: &ProblemView, palette: &Palette) -> String {
    [
        palette.heading("[NUMBER LINE]"),
        render_number_line(&view.steps, view.axis.as_ref()),
        palette.heading("[EQUAL GROUPS]"),
        render_groups(&view.layout),
        palette.heading("[FACT FAMILY]"),
        render_fact_family(view.facts.as_deref()),
    ]
    .join("\n")
}
