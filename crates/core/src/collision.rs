//! Collision and placement.
//!
//! Legality is checked against the grid bounds first and occupancy second,
//! so [`Grid::is_occupied`] is never asked about a cell outside the grid.
//! Cells above row 0 are allowed while a piece is spawning: they are still
//! column-bounded but skip the occupancy check.

use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::types::Coord;

/// Absolute cells of a piece.
pub fn absolute_cells(piece: &ActivePiece) -> impl Iterator<Item = Coord> {
    piece.cells().into_iter()
}

fn cell_is_legal(grid: &Grid, (row, col): Coord) -> bool {
    if col < 0 || col as usize >= grid.cols() {
        return false;
    }
    if row >= 0 && row as usize >= grid.rows() {
        return false;
    }
    row < 0 || !grid.is_occupied(row as usize, col as usize)
}

/// Whether a piece fits the grid at its current anchor and rotation.
pub fn is_legal(piece: &ActivePiece, grid: &Grid) -> bool {
    absolute_cells(piece).all(|cell| cell_is_legal(grid, cell))
}

/// The piece moved by `(drow, dcol)`, or `None` when that position collides.
pub fn try_move(piece: &ActivePiece, drow: i32, dcol: i32, grid: &Grid) -> Option<ActivePiece> {
    let moved = piece.translated(drow, dcol);
    is_legal(&moved, grid).then_some(moved)
}

/// The piece rotated in place, or `None` when the new orientation collides.
pub fn try_rotate(piece: &ActivePiece, clockwise: bool, grid: &Grid) -> Option<ActivePiece> {
    let rotated = piece.rotated(clockwise);
    is_legal(&rotated, grid).then_some(rotated)
}

/// Whether the piece cannot move one row further down.
pub fn is_grounded(piece: &ActivePiece, grid: &Grid) -> bool {
    try_move(piece, 1, 0, grid).is_none()
}

/// Merge a piece into the grid.
///
/// Cells above the grid are dropped. Returns how many cells were written.
pub fn lock(piece: &ActivePiece, grid: &mut Grid) -> usize {
    let mut written = 0;
    for (row, col) in absolute_cells(piece) {
        if row < 0 {
            continue;
        }
        grid.occupy(row as usize, col as usize);
        written += 1;
    }
    written
}
