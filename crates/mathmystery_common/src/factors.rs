//! Factor configuration parsing.
//!
//! Turns free-form text like `"3, 4, 99, x, 12"` into the bounded pool of
//! operands a practice round may draw from. Malformed input never fails:
//! bad tokens are dropped and an unusable list falls back to the defaults.

use crate::error::MysteryError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest allowed factor
pub const MIN_FACTOR: u32 = 0;

/// Largest allowed factor
pub const MAX_FACTOR: u32 = 12;

/// Used whenever parsing leaves nothing usable
pub const DEFAULT_FACTORS: [u32; 5] = [0, 1, 2, 5, 10];

/// Ordered, distinct, non-empty set of factors in `[0, 12]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", try_from = "Vec<u32>")]
pub struct FactorSet(Vec<u32>);

/// What happened to each token during parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Tokens kept
    pub accepted: usize,
    /// Tokens that were not integers
    pub non_numeric: Vec<String>,
    /// Integers outside `[0, 12]`
    pub out_of_range: Vec<i64>,
    /// Repeats of an already accepted factor
    pub duplicates: usize,
    /// Nothing survived and the defaults were used
    pub used_fallback: bool,
}

impl ParseReport {
    pub fn dropped(&self) -> usize {
        self.non_numeric.len() + self.out_of_range.len() + self.duplicates
    }
}

impl FactorSet {
    /// Parse comma-separated text. Never fails.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_report(text).0
    }

    /// Parse and also describe which tokens were dropped.
    pub fn parse_with_report(text: &str) -> (Self, ParseReport) {
        let mut report = ParseReport::default();
        let mut factors: Vec<u32> = Vec::new();

        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let value = match token.parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    report.non_numeric.push(token.to_string());
                    continue;
                }
            };

            let factor = match u32::try_from(value) {
                Ok(f) if (MIN_FACTOR..=MAX_FACTOR).contains(&f) => f,
                _ => {
                    report.out_of_range.push(value);
                    continue;
                }
            };

            if factors.contains(&factor) {
                report.duplicates += 1;
            } else {
                factors.push(factor);
            }
        }

        report.accepted = factors.len();
        if factors.is_empty() {
            report.used_fallback = true;
            factors = DEFAULT_FACTORS.to_vec();
        }

        if report.dropped() > 0 || report.used_fallback {
            debug!(
                non_numeric = report.non_numeric.len(),
                out_of_range = report.out_of_range.len(),
                duplicates = report.duplicates,
                fallback = report.used_fallback,
                "Dropped factor tokens"
            );
        }

        (Self(factors), report)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true once parsed; parsing always yields at least one factor
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, factor: u32) -> bool {
        self.0.contains(&factor)
    }
}

/// Stored lists must already be a valid set: nothing is dropped or
/// replaced with the defaults.
impl TryFrom<Vec<u32>> for FactorSet {
    type Error = MysteryError;

    fn try_from(factors: Vec<u32>) -> Result<Self, Self::Error> {
        if factors.is_empty() {
            return Err(MysteryError::InvalidFactors("no factors".to_string()));
        }
        for (i, factor) in factors.iter().enumerate() {
            if *factor > MAX_FACTOR {
                return Err(MysteryError::InvalidFactors(format!(
                    "{} is outside {}-{}",
                    factor, MIN_FACTOR, MAX_FACTOR
                )));
            }
            if factors[..i].contains(factor) {
                return Err(MysteryError::InvalidFactors(format!("{} appears twice", factor)));
            }
        }
        Ok(Self(factors))
    }
}

impl From<FactorSet> for Vec<u32> {
    fn from(set: FactorSet) -> Self {
        set.0
    }
}

impl Default for FactorSet {
    fn default() -> Self {
        Self(DEFAULT_FACTORS.to_vec())
    }
}

impl std::fmt::Display for FactorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}
