//! The active (falling) piece.

use serde::Serialize;

use crate::pieces::{shape_for, shape_width, Shape};
use crate::types::{Coord, PieceKind, Rotation, PIECE_CELLS};

/// Active falling piece
///
/// The anchor `(row, col)` is the top-left corner of the shape's bounding
/// box. Only the anchor and the rotation ever change; a new piece replaces
/// the old one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, rotation: Rotation, row: i32, col: i32) -> Self {
        Self {
            kind,
            rotation,
            row,
            col,
        }
    }

    /// A piece at the spawn position: row 0, horizontally centred.
    ///
    /// When the shape is wider than the grid the column goes negative, which
    /// makes the spawn illegal.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let width = shape_width(shape_for(kind, Rotation::North));
        let col = (cols as i32 - width).div_euclid(2);
        Self::new(kind, Rotation::North, 0, col)
    }

    /// Get the shape for the current rotation
    pub fn shape(&self) -> &'static Shape {
        shape_for(self.kind, self.rotation)
    }

    /// Absolute grid coordinates of every cell.
    pub fn cells(&self) -> [Coord; PIECE_CELLS] {
        self.shape().map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// The same piece moved by `(drow, dcol)`.
    pub fn translated(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// The same piece at the same anchor in another rotation.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..*self }
    }
}
