//! The practice problem record.
//!
//! A problem is either a multiplication or a division fact. Division keeps
//! the two sampled factors alongside the dividend and divisor so every
//! visualization can be derived from the record alone.

use crate::error::{MysteryError, MysteryResult};
use crate::factors::{MAX_FACTOR, MIN_FACTOR};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mode selected by the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    Multiply,
    Divide,
    #[default]
    Mixed,
}

impl Mode {
    /// Pick the concrete operation. `Mixed` costs exactly one coin flip;
    /// the other modes consume no randomness.
    pub fn resolve(self, rng: &mut impl RandomSource) -> Operation {
        match self {
            Mode::Multiply => Operation::Multiply,
            Mode::Divide => Operation::Divide,
            Mode::Mixed => {
                if rng.coin_flip() {
                    Operation::Multiply
                } else {
                    Operation::Divide
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Multiply => "multiply",
            Mode::Divide => "divide",
            Mode::Mixed => "mixed",
        }
    }
}

impl FromStr for Mode {
    type Err = MysteryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "multiply" | "mul" | "x" | "*" | "×" => Ok(Mode::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Mode::Divide),
            "mixed" | "mix" | "both" => Ok(Mode::Mixed),
            _ => Err(MysteryError::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = MysteryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyProblem {
    a: u32,
    b: u32,
}

impl MultiplyProblem {
    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    pub fn product(&self) -> u32 {
        self.a * self.b
    }
}

/// `dividend == a * b`; `divisor` is `a` or `b`, or 1 when that pick was 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideProblem {
    a: u32,
    b: u32,
    dividend: u32,
    divisor: u32,
}

impl DivideProblem {
    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    pub fn dividend(&self) -> u32 {
        self.dividend
    }

    /// Never zero
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Integer (floor) quotient
    pub fn quotient(&self) -> u32 {
        self.dividend / self.divisor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Multiply(MultiplyProblem),
    Divide(DivideProblem),
}

fn check_operand(value: u32) -> MysteryResult<u32> {
    if value > MAX_FACTOR {
        return Err(MysteryError::InvalidProblem(format!(
            "operand {} is outside {}-{}",
            value, MIN_FACTOR, MAX_FACTOR
        )));
    }
    Ok(value)
}

impl Problem {
    /// `a × b` with both operands in the factor range
    pub fn multiply(a: u32, b: u32) -> MysteryResult<Self> {
        Ok(Self::drawn_product(check_operand(a)?, check_operand(b)?))
    }

    /// `(a * b) ÷ sampled_divisor`, where the divisor must be `a` or `b`.
    /// A zero divisor becomes 1.
    pub fn divide(a: u32, b: u32, sampled_divisor: u32) -> MysteryResult<Self> {
        let (a, b) = (check_operand(a)?, check_operand(b)?);
        if sampled_divisor != a && sampled_divisor != b {
            return Err(MysteryError::InvalidProblem(format!(
                "divisor {} is neither {} nor {}",
                sampled_divisor, a, b
            )));
        }
        Ok(Self::drawn_quotient(a, b, sampled_divisor))
    }

    /// Operands come from a `FactorSet`, so they are already in range
    pub(crate) fn drawn_product(a: u32, b: u32) -> Self {
        Problem::Multiply(MultiplyProblem { a, b })
    }

    /// Operands come from a `FactorSet` and the divisor is one of them
    pub(crate) fn drawn_quotient(a: u32, b: u32, sampled_divisor: u32) -> Self {
        let divisor = if sampled_divisor == 0 { 1 } else { sampled_divisor };
        Problem::Divide(DivideProblem {
            a,
            b,
            dividend: a * b,
            divisor,
        })
    }

    pub fn a(&self) -> u32 {
        match self {
            Problem::Multiply(p) => p.a,
            Problem::Divide(p) => p.a,
        }
    }

    pub fn b(&self) -> u32 {
        match self {
            Problem::Multiply(p) => p.b,
            Problem::Divide(p) => p.b,
        }
    }

    pub fn op(&self) -> Operation {
        match self {
            Problem::Multiply(_) => Operation::Multiply,
            Problem::Divide(_) => Operation::Divide,
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Problem::Multiply(p) => format!("{} × {} = ?", p.a, p.b),
            Problem::Divide(p) => format!("{} ÷ {} = ?", p.dividend, p.divisor),
        }
    }

    pub fn answer(&self) -> u32 {
        match self {
            Problem::Multiply(p) => p.product(),
            Problem::Divide(p) => p.quotient(),
        }
    }

    /// Where the number line ends: product or dividend
    pub fn target(&self) -> u32 {
        match self {
            Problem::Multiply(p) => p.product(),
            Problem::Divide(p) => p.dividend,
        }
    }

    /// Compare a learner's answer with the expected one
    pub fn check(&self, submitted: i64) -> bool {
        submitted == i64::from(self.answer())
    }
}

/// Flat wire form handed to hosts: the variant fields plus prompt and answer
#[derive(Serialize)]
struct ProblemWire<'a> {
    op: Operation,
    a: u32,
    b: u32,
    prompt: &'a str,
    answer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    dividend: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    divisor: Option<u32>,
}

impl Serialize for Problem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let prompt = self.prompt();
        let (dividend, divisor) = match self {
            Problem::Multiply(_) => (None, None),
            Problem::Divide(p) => (Some(p.dividend), Some(p.divisor)),
        };
        ProblemWire {
            op: self.op(),
            a: self.a(),
            b: self.b(),
            prompt: &prompt,
            answer: self.answer(),
            dividend,
            divisor,
        }
        .serialize(serializer)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_multiply_record() {
        let p = Problem::multiply(4, 7).unwrap();
        assert_eq!(p.prompt(), "4 × 7 = ?");
        assert_eq!(p.answer(), 28);
        assert_eq!(p.target(), 28);
        assert_eq!(p.op(), Operation::Multiply);
    }

    #[test]
    fn test_divide_substitutes_zero_divisor() {
        let p = Problem::divide(0, 5, 0).unwrap();
        match p {
            Problem::Divide(d) => {
                assert_eq!(d.dividend, 0);
                assert_eq!(d.divisor, 1);
            }
            _ => panic!("expected division"),
        }
        assert_eq!(p.prompt(), "0 ÷ 1 = ?");
        assert_eq!(p.answer(), 0);
    }

    #[test]
    fn test_check_answer() {
        let p = Problem::divide(3, 6, 3).unwrap();
        assert!(p.check(6));
        assert!(!p.check(5));
        assert!(!p.check(-6));
    }

    #[test]
    fn test_constructors_reject_out_of_range_operands() {
        assert!(matches!(
            Problem::multiply(70000, 70000),
            Err(MysteryError::InvalidProblem(_))
        ));
        assert!(Problem::multiply(13, 2).is_err());
        assert!(Problem::divide(3, 99, 3).is_err());
        assert!(Problem::multiply(12, 12).is_ok());
    }

    #[test]
    fn test_divide_requires_divisor_from_operands() {
        assert!(matches!(Problem::divide(3, 4, 7), Err(MysteryError::InvalidProblem(_))));
        assert!(Problem::divide(3, 4, 0).is_err());

        let p = Problem::divide(0, 5, 0).unwrap();
        let Problem::Divide(d) = p else {
            panic!("expected division");
        };
        assert_ne!(d.divisor(), 0);
        assert_eq!(d.quotient(), 0);
    }

    #[test]
    fn test_mode_deserializes_like_from_str() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: Mode,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{"mode": "Multiply"}"#).unwrap();
        assert_eq!(parsed.mode, Mode::Multiply);
        let parsed: Wrapper = serde_json::from_str(r#"{"mode": "÷"}"#).unwrap();
        assert_eq!(parsed.mode, Mode::Divide);
        assert!(serde_json::from_str::<Wrapper>(r#"{"mode": "add"}"#).is_err());
        assert_eq!(serde_json::to_value(Mode::Mixed).unwrap(), "mixed");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Multiply".parse::<Mode>().unwrap(), Mode::Multiply);
        assert_eq!(" ÷ ".parse::<Mode>().unwrap(), Mode::Divide);
        assert_eq!("mixed".parse::<Mode>().unwrap(), Mode::Mixed);
        assert!("add".parse::<Mode>().is_err());
    }

    #[test]
    fn test_resolve_flips_once_for_mixed() {
        let mut rng = ScriptedRandom::new(vec![1]);
        assert_eq!(Mode::Mixed.resolve(&mut rng), Operation::Divide);
        assert_eq!(rng.consumed(), 1);
        assert_eq!(Mode::Multiply.resolve(&mut rng), Operation::Multiply);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Problem::multiply(3, 4).unwrap()).unwrap();
        assert_eq!(json["op"], "multiply");
        assert_eq!(json["answer"], 12);
        assert_eq!(json["prompt"], "3 × 4 = ?");
        assert!(json.get("divisor").is_none());

        let json = serde_json::to_value(Problem::divide(3, 4, 4).unwrap()).unwrap();
        assert_eq!(json["op"], "divide");
        assert_eq!(json["dividend"], 12);
        assert_eq!(json["divisor"], 4);
        assert_eq!(json["answer"], 3);
    }
}
