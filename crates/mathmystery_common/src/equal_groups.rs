//! Equal-groups layout: the answer split into same-sized groups.

use crate::problem::Problem;
use serde::Serialize;

/// Groups per display row
pub const MAX_COLUMNS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupLayout {
    pub group_count: u32,
    pub items_per_group: u32,
    /// Side of the smallest square holding `items_per_group` marks, at least 1
    pub grid_side: u32,
}

/// How the groups sit on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupGrid {
    pub columns: u32,
    pub rows: u32,
    /// Blank cells after the last group in the final row
    pub placeholders: u32,
}

impl GroupLayout {
    /// Multiplication shows `a` groups of `b`; division shows `divisor`
    /// groups of the quotient.
    pub fn derive(problem: &Problem) -> Self {
        let (group_count, items_per_group) = match problem {
            Problem::Multiply(p) => (p.a(), p.b()),
            Problem::Divide(p) => (p.divisor(), p.quotient()),
        };
        Self {
            group_count,
            items_per_group,
            grid_side: grid_side(items_per_group),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group_count == 0
    }

    pub fn arrangement(&self) -> GroupGrid {
        if self.group_count == 0 {
            return GroupGrid {
                columns: 0,
                rows: 0,
                placeholders: 0,
            };
        }
        let columns = self.group_count.min(MAX_COLUMNS);
        let rows = self.group_count.div_ceil(MAX_COLUMNS);
        GroupGrid {
            columns,
            rows,
            placeholders: rows * columns - self.group_count,
        }
    }
}

/// `ceil(sqrt(n))`, floored at 1
pub fn grid_side(items: u32) -> u32 {
    let mut side = 1u32;
    while side * side < items {
        side += 1;
    }
    side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_layout() {
        let layout = GroupLayout::derive(&Problem::multiply(3, 4).unwrap());
        assert_eq!(layout.group_count, 3);
        assert_eq!(layout.items_per_group, 4);
        assert_eq!(layout.grid_side, 2);
    }

    #[test]
    fn test_divide_layout() {
        let layout = GroupLayout::derive(&Problem::divide(6, 2, 2).unwrap());
        assert_eq!(layout.group_count, 2);
        assert_eq!(layout.items_per_group, 6);
        assert_eq!(layout.grid_side, 3);
    }

    #[test]
    fn test_grid_side() {
        assert_eq!(grid_side(0), 1);
        assert_eq!(grid_side(1), 1);
        assert_eq!(grid_side(2), 2);
        assert_eq!(grid_side(9), 3);
        assert_eq!(grid_side(10), 4);
        assert_eq!(grid_side(144), 12);
    }

    #[test]
    fn test_zero_groups() {
        let layout = GroupLayout::derive(&Problem::multiply(0, 9).unwrap());
        assert!(layout.is_empty());
        let grid = layout.arrangement();
        assert_eq!((grid.columns, grid.rows, grid.placeholders), (0, 0, 0));
    }

    #[test]
    fn test_arrangement_wraps_at_five() {
        let layout = GroupLayout::derive(&Problem::multiply(7, 2).unwrap());
        let grid = layout.arrangement();
        assert_eq!(grid.columns, 5);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.placeholders, 3);

        let grid = GroupLayout::derive(&Problem::multiply(3, 2).unwrap()).arrangement();
        assert_eq!((grid.columns, grid.rows, grid.placeholders), (3, 1, 0));
    }
}
