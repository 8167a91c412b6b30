//! Fact families: the four statements tying two factors to their product.

use crate::error::{MysteryError, MysteryResult};
use crate::problem::{Operation, Problem};
use serde::Serialize;

/// One arithmetic statement `left op right = result`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub left: u32,
    pub op: Operation,
    pub right: u32,
    pub result: u32,
}

impl Fact {
    fn times(left: u32, right: u32, result: u32) -> Self {
        Self { left, op: Operation::Multiply, right, result }
    }

    fn over(left: u32, right: u32, result: u32) -> Self {
        Self { left, op: Operation::Divide, right, result }
    }

    /// Whether the statement is arithmetically true
    pub fn holds(&self) -> bool {
        match self.op {
            Operation::Multiply => self.left.checked_mul(self.right) == Some(self.result),
            Operation::Divide => {
                self.right != 0
                    && self.left % self.right == 0
                    && self.left / self.right == self.result
            }
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}={}", self.left, self.op.symbol(), self.right, self.result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactFamily([Fact; 4]);

impl FactFamily {
    /// Both factors must be non-zero; a zero would put a division by zero
    /// in the family.
    pub fn derive(problem: &Problem) -> MysteryResult<Self> {
        let (x, y, whole) = match problem {
            Problem::Multiply(p) => (p.a(), p.b(), p.product()),
            Problem::Divide(p) => (p.divisor(), p.quotient(), p.dividend()),
        };

        if x == 0 || y == 0 {
            return Err(MysteryError::ZeroFactor {
                fact_op: problem.op().symbol(),
                detail: format!("{} and {} make {}", x, y, whole),
            });
        }

        Ok(Self([
            Fact::times(x, y, whole),
            Fact::times(y, x, whole),
            Fact::over(whole, x, y),
            Fact::over(whole, y, x),
        ]))
    }

    pub fn facts(&self) -> &[Fact; 4] {
        &self.0
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Fact::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_family() {
        let family = FactFamily::derive(&Problem::multiply(3, 4).unwrap()).unwrap();
        assert_eq!(family.to_strings(), vec!["3×4=12", "4×3=12", "12÷3=4", "12÷4=3"]);
        assert!(family.facts().iter().all(Fact::holds));
    }

    #[test]
    fn test_divide_family() {
        let family = FactFamily::derive(&Problem::divide(2, 9, 9).unwrap()).unwrap();
        assert_eq!(family.to_strings(), vec!["9×2=18", "2×9=18", "18÷9=2", "18÷2=9"]);
        assert!(family.facts().iter().all(Fact::holds));
    }

    #[test]
    fn test_zero_factor_rejected() {
        assert!(matches!(
            FactFamily::derive(&Problem::multiply(0, 4).unwrap()),
            Err(MysteryError::ZeroFactor { .. })
        ));
        // 0 ÷ 5 = 0 has a zero quotient
        assert!(FactFamily::derive(&Problem::divide(0, 5, 5).unwrap()).is_err());
    }

    #[test]
    fn test_holds_detects_false_claims() {
        assert!(!Fact::times(2, 3, 7).holds());
        assert!(!Fact::over(7, 2, 3).holds());
        assert!(!Fact::over(4, 0, 0).holds());
    }
}
