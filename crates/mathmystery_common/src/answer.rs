//! Comparing a learner's answer with the expected one.
//!
//! Equality is the only thing the story layer needs to know.

use crate::problem::Problem;
use serde::Serialize;

/// Outcome of one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub correct: bool,
    pub expected: u32,
    /// `None` when the text was not a number
    pub submitted: Option<i64>,
}

/// Trimmed integer parse of what the learner typed
pub fn parse_answer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

pub fn judge(problem: &Problem, text: &str) -> Verdict {
    let submitted = parse_answer(text);
    Verdict {
        correct: submitted.is_some_and(|n| problem.check(n)),
        expected: problem.answer(),
        submitted,
    }
}
