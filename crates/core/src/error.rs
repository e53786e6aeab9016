//! Configuration errors.
//!
//! Gameplay never fails: illegal moves are silent no-ops and a blocked spawn
//! is a phase change. The only rejected input is a session that cannot be
//! built in the first place.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid of {rows}x{cols} exceeds the addressable coordinate range")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("drop interval must be greater than zero")]
    ZeroDropInterval,

    #[error("points per line must be greater than zero")]
    ZeroPointsPerLine,

    #[error("piece set must contain at least one piece kind")]
    EmptyPieceSet,

    #[error("grid is {actual_rows}x{actual_cols} but the session expects {rows}x{cols}")]
    GridMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("row {row} has {len} cells, expected {cols}")]
    RaggedRow { row: usize, len: usize, cols: usize },
}
