//! Everything a renderer needs for one problem, derived in one place.

use crate::equal_groups::{GroupGrid, GroupLayout};
use crate::error::MysteryResult;
use crate::fact_family::FactFamily;
use crate::number_line::{self, NumberLineAxis};
use crate::problem::Problem;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProblemView {
    pub problem: Problem,
    pub steps: Vec<u32>,
    pub axis: Option<NumberLineAxis>,
    pub layout: GroupLayout,
    pub grid: GroupGrid,
    /// `None` when a zero factor leaves no fact family
    pub facts: Option<Vec<String>>,
}

impl ProblemView {
    pub fn derive(problem: Problem) -> Self {
        let steps = number_line::steps(&problem);
        let axis = NumberLineAxis::for_steps(&steps);
        let layout = GroupLayout::derive(&problem);
        let facts = FactFamily::derive(&problem).ok().map(|f| f.to_strings());
        Self {
            problem,
            steps,
            axis,
            grid: layout.arrangement(),
            layout,
            facts,
        }
    }

    pub fn to_json(&self) -> MysteryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
