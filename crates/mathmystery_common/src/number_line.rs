//! Number-line walk: equal jumps from zero to the problem's target.

use crate::problem::Problem;
use serde::Serialize;

/// Fewest axis intervals drawn under the jumps
pub const MIN_TICKS: u32 = 5;

/// Most axis intervals drawn under the jumps
pub const MAX_TICKS: u32 = 10;

/// Cumulative jump positions.
///
/// Multiplication makes `b` jumps of size `a` (none when `b == 0`).
/// Division jumps by the divisor `max(1, dividend / divisor)` times, so a
/// zero dividend still shows a single jump.
pub fn steps(problem: &Problem) -> Vec<u32> {
    match problem {
        Problem::Multiply(p) => (1..=p.b()).map(|i| i * p.a()).collect(),
        Problem::Divide(p) => {
            let step = p.divisor().max(1);
            let jumps = (p.dividend() / step).max(1);
            (1..=jumps).map(|i| i * step).collect()
        }
    }
}

/// Labelled axis positions under a step sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLineAxis {
    /// Right end of the axis (last step)
    pub max: u32,
    /// Tick positions from 0 to `max` inclusive
    pub ticks: Vec<u32>,
}

impl NumberLineAxis {
    /// `None` when there are no steps to draw
    pub fn for_steps(steps: &[u32]) -> Option<Self> {
        let max = *steps.last()?;
        let intervals = max.div_ceil(2).clamp(MIN_TICKS, MAX_TICKS);
        let ticks = (0..=intervals)
            .map(|i| {
                let pos = f64::from(i) * f64::from(max) / f64::from(intervals);
                pos.round() as u32
            })
            .collect();
        Some(Self { max, ticks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_steps() {
        assert_eq!(steps(&Problem::multiply(3, 4).unwrap()), vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_multiply_zero_b_is_empty() {
        assert!(steps(&Problem::multiply(7, 0).unwrap()).is_empty());
    }

    #[test]
    fn test_multiply_zero_a_repeats_zero() {
        // zero-size jumps: b entries, all at 0
        assert_eq!(steps(&Problem::multiply(0, 3).unwrap()), vec![0, 0, 0]);
    }

    #[test]
    fn test_divide_zero_dividend_single_step() {
        assert_eq!(steps(&Problem::divide(0, 5, 0).unwrap()), vec![1]);
        assert_eq!(steps(&Problem::divide(0, 5, 5).unwrap()), vec![5]);
    }

    #[test]
    fn test_divide_steps() {
        assert_eq!(steps(&Problem::divide(4, 3, 4).unwrap()), vec![4, 8, 12]);
    }

    #[test]
    fn test_axis_small_target_uses_min_ticks() {
        let axis = NumberLineAxis::for_steps(&[2, 4]).unwrap();
        assert_eq!(axis.max, 4);
        assert_eq!(axis.ticks.len(), 6);
        assert_eq!(axis.ticks.first(), Some(&0));
        assert_eq!(axis.ticks.last(), Some(&4));
    }

    #[test]
    fn test_axis_large_target_caps_ticks() {
        let axis = NumberLineAxis::for_steps(&[72, 144]).unwrap();
        assert_eq!(axis.ticks.len(), 11);
        assert_eq!(axis.ticks[5], 72);
        assert_eq!(axis.ticks[10], 144);
    }

    #[test]
    fn test_axis_none_without_steps() {
        assert!(NumberLineAxis::for_steps(&[]).is_none());
    }
}
