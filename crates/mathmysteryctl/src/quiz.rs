//! Interactive practice loop
//!
//! Reads one answer per line. End of input stops the quiz early and the
//! score covers only the rounds actually asked.

use crate::display::{self, Palette};
use anyhow::{Context, Result};
use mathmystery_common::{judge, FactorSet, Mode, ProblemStream, ProblemView, RandomSource};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::info;

/// Knobs for one quiz
#[derive(Debug, Clone)]
pub struct QuizSettings {
    pub factors: FactorSet,
    pub mode: Mode,
    pub rounds: u32,
    pub show_visuals: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub asked: u32,
    pub correct: u32,
}

pub fn run_quiz<R, W, S>(
    settings: &QuizSettings,
    rng: S,
    input: &mut R,
    output: &mut W,
    palette: &Palette,
) -> Result<QuizOutcome>
where
    R: BufRead,
    W: Write,
    S: RandomSource,
{
    let mut outcome = QuizOutcome::default();
    let problems = ProblemStream::new(settings.factors.clone(), settings.mode, rng);

    for (round, problem) in (1..=settings.rounds).zip(problems) {
        writeln!(
            output,
            "Round {}/{}: {}",
            round,
            settings.rounds,
            display::render_prompt(&problem, palette)
        )?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read answer")?;
        if read == 0 {
            writeln!(output)?;
            info!(round, "Input closed, ending quiz");
            break;
        }

        let verdict = judge(&problem, &line);
        outcome.asked += 1;
        if verdict.correct {
            outcome.correct += 1;
        }
        info!(round, correct = verdict.correct, expected = verdict.expected, "Answer judged");

        writeln!(output, "{}", display::render_verdict(&verdict, palette))?;
        if settings.show_visuals {
            let view = ProblemView::derive(problem);
            writeln!(output, "{}", display::render_view(&view, palette))?;
        }
        writeln!(output)?;
    }

    writeln!(
        output,
        "{}",
        palette.heading(&format!("Score: {}/{}", outcome.correct, outcome.asked))
    )?;
    Ok(outcome)
}
