//! Pieces module - the shape catalog
//!
//! Every tetromino has four rotation states. Offsets are `(row, col)` pairs
//! normalised so the smallest row offset and the smallest column offset are
//! both 0; the anchor is therefore the top-left corner of the bounding box.
//! The catalog is constant data and is shared by every session.

use crate::types::{PieceKind, Rotation, PIECE_CELLS};

/// Offset of a single cell relative to the piece anchor, `(row, col)`
pub type CellOffset = (i32, i32);

/// Shape of a piece in one orientation
pub type Shape = [CellOffset; PIECE_CELLS];

/// Get the shape for a piece kind and rotation
pub fn shape_for(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    let table = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    &table[rotation.index()]
}

/// Width of a shape in columns.
pub fn shape_width(shape: &Shape) -> i32 {
    shape.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1
}

/// Height of a shape in rows.
pub fn shape_height(shape: &Shape) -> i32 {
    shape.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1
}

type RotationTable = [Shape; Rotation::COUNT];

const I_SHAPES: RotationTable = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
];

// Same square in every orientation
const O_SHAPES: RotationTable = [[(0, 0), (0, 1), (1, 0), (1, 1)]; Rotation::COUNT];

const T_SHAPES: RotationTable = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

const S_SHAPES: RotationTable = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const Z_SHAPES: RotationTable = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const J_SHAPES: RotationTable = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
];

const L_SHAPES: RotationTable = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_shape_is_normalised_and_distinct() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = shape_for(kind, rotation);
                let min_r = shape.iter().map(|&(r, _)| r).min().unwrap();
                let min_c = shape.iter().map(|&(_, c)| c).min().unwrap();
                assert_eq!((min_r, min_c), (0, 0), "{kind:?} {rotation:?}");

                for (i, a) in shape.iter().enumerate() {
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{kind:?} {rotation:?} repeats a cell");
                    }
                }
            }
        }
    }

    #[test]
    fn square_is_two_by_two() {
        let shape = shape_for(PieceKind::O, Rotation::North);
        assert_eq!(shape_width(shape), 2);
        assert_eq!(shape_height(shape), 2);
        assert_eq!(shape_for(PieceKind::O, Rotation::West), shape);
    }

    #[test]
    fn i_piece_swaps_width_and_height() {
        let flat = shape_for(PieceKind::I, Rotation::North);
        let upright = shape_for(PieceKind::I, Rotation::East);
        assert_eq!((shape_width(flat), shape_height(flat)), (4, 1));
        assert_eq!((shape_width(upright), shape_height(upright)), (1, 4));
    }

    #[test]
    fn spawn_orientations_are_two_rows_tall_except_i() {
        for kind in PieceKind::ALL {
            let expected = if kind == PieceKind::I { 1 } else { 2 };
            assert_eq!(shape_height(shape_for(kind, Rotation::North)), expected);
        }
    }
}
