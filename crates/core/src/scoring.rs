//! Scoring module - line clearing and the score policy
//!
//! Scoring is linear: every cleared line is worth the same number of points,
//! with no multi-line bonus. The per-line value defaults to 1 and is part of
//! the session configuration.

use crate::grid::Grid;
use crate::types::DEFAULT_POINTS_PER_LINE;

/// Clear every full row and return how many were removed.
///
/// Scans bottom to top. After a clear the rows above have shifted down into
/// the current index, so the same index is checked again before moving on;
/// this catches stacked full rows in a single pass.
pub fn clear_completed_lines(grid: &mut Grid) -> u32 {
    let mut cleared = 0;
    let mut row = grid.rows();
    while row > 0 {
        if grid.is_row_full(row - 1) {
            grid.clear_row(row - 1);
            cleared += 1;
        } else {
            row -= 1;
        }
    }
    cleared
}

/// Linear score policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    points_per_line: u32,
}

impl ScoringPolicy {
    pub fn linear(points_per_line: u32) -> Self {
        Self { points_per_line }
    }

    pub fn points_per_line(&self) -> u32 {
        self.points_per_line
    }

    /// Points for clearing `lines` lines at once.
    pub fn award(&self, lines: u32) -> u32 {
        lines.saturating_mul(self.points_per_line)
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::linear(DEFAULT_POINTS_PER_LINE)
    }
}
