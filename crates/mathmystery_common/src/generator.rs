//! Problem generation.
//!
//! Operands are sampled with replacement from the configured factors, so
//! `a` and `b` may be equal and may both be zero.

use crate::factors::FactorSet;
use crate::problem::{Mode, Operation, Problem};
use crate::random::{RandomSource, ThreadRandom};
use tracing::debug;

/// Generate one problem using the thread-local generator
pub fn generate(factors: &FactorSet, mode: Mode) -> Problem {
    generate_with(factors, mode, &mut ThreadRandom)
}

/// Generate one problem from an explicit randomness source.
///
/// Draw order: mode coin flip (mixed only), `a`, `b`, then the divisor
/// pick between `a` and `b` for divisions.
pub fn generate_with<R: RandomSource>(factors: &FactorSet, mode: Mode, rng: &mut R) -> Problem {
    let problem = match mode.resolve(rng) {
        Operation::Multiply => multiply(factors, rng),
        Operation::Divide => divide(factors, rng),
    };

    debug!(
        mode = %mode,
        op = ?problem.op(),
        a = problem.a(),
        b = problem.b(),
        answer = problem.answer(),
        "Generated problem"
    );

    problem
}

fn multiply<R: RandomSource>(factors: &FactorSet, rng: &mut R) -> Problem {
    let a = rng.pick(factors.as_slice());
    let b = rng.pick(factors.as_slice());
    Problem::drawn_product(a, b)
}

fn divide<R: RandomSource>(factors: &FactorSet, rng: &mut R) -> Problem {
    let a = rng.pick(factors.as_slice());
    let b = rng.pick(factors.as_slice());
    let sampled = rng.pick(&[a, b]);
    Problem::drawn_quotient(a, b, sampled)
}

/// Endless stream of problems for a practice session
pub struct ProblemStream<R: RandomSource> {
    factors: FactorSet,
    mode: Mode,
    rng: R,
}

impl<R: RandomSource> ProblemStream<R> {
    pub fn new(factors: FactorSet, mode: Mode, rng: R) -> Self {
        Self { factors, mode, rng }
    }
}

impl<R: RandomSource> Iterator for ProblemStream<R> {
    type Item = Problem;

    fn next(&mut self) -> Option<Problem> {
        Some(generate_with(&self.factors, self.mode, &mut self.rng))
    }
}
