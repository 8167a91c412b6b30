//! Math Mystery Common - problem generation and visual explanations.
//!
//! Multiplication and division fact practice: parse the allowed factors,
//! generate a problem, then derive the number-line walk, the equal-groups
//! layout and the fact family that explain its answer.

pub mod answer;
pub mod config;
pub mod equal_groups;
pub mod error;
pub mod fact_family;
pub mod factors;
pub mod generator;
pub mod number_line;
pub mod problem;
pub mod random;
pub mod visuals;

pub use answer::{judge, parse_answer, Verdict};
pub use config::{ColorMode, MysteryConfig};
pub use equal_groups::{GroupGrid, GroupLayout};
pub use error::{MysteryError, MysteryResult};
pub use fact_family::{Fact, FactFamily};
pub use factors::{FactorSet, ParseReport, DEFAULT_FACTORS};
pub use generator::{generate, generate_with, ProblemStream};
pub use number_line::{steps, NumberLineAxis};
pub use problem::{DivideProblem, Mode, MultiplyProblem, Operation, Problem};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use visuals::ProblemView;
