//! Read-only session snapshots for renderers and headless hosts.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Coord, Phase, PieceKind, PIECE_CELLS};

/// Owned, point-in-time view of a session for renderers.
///
/// Nothing here borrows from the session; mutating the session afterwards
/// never changes a snapshot already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    /// `rows` vectors of `cols` occupancy flags each.
    pub grid: Vec<Vec<bool>>,
    /// Absolute cells of the falling piece, including any above row 0.
    pub active_cells: ArrayVec<Coord, PIECE_CELLS>,
    pub active_kind: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
}

impl Snapshot {
    /// Whether a visible grid cell is covered by the falling piece.
    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        self.active_cells
            .iter()
            .any(|&(r, c)| r >= 0 && c >= 0 && r as usize == row && c as usize == col)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active_cells: ArrayVec::new(),
            active_kind: None,
            score: 0,
            lines: 0,
            phase: Phase::Running,
        }
    }
}
