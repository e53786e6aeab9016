//! Shared types and constants for the blockfall workspace.
//!
//! Everything here is plain data: the piece kinds, rotation states, the
//! discrete inputs a host can feed into a session, and the session phase.
//! The engine, the terminal view and the input mapping all speak these types,
//! so the input mapping never has to depend on the engine.
//!
//! # Grid coordinates
//!
//! Cells are addressed as `(row, col)`. Row 0 is the top of the grid and rows
//! grow downwards; column 0 is the left edge. Piece math uses signed
//! coordinates because a freshly spawned piece may reach above row 0.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 20 | Grid height |
//! | `DEFAULT_COLS` | 10 | Grid width |
//! | `DEFAULT_DROP_INTERVAL_MS` | 500 | Gravity step interval |
//! | `DEFAULT_POINTS_PER_LINE` | 1 | Score awarded per cleared line |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Input, PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Input::from_str("softDrop"), Some(Input::SoftDrop));
//! ```

use serde::Serialize;

/// Default grid height in rows.
pub const DEFAULT_ROWS: usize = 20;

/// Default grid width in columns.
pub const DEFAULT_COLS: usize = 10;

/// Default gravity interval (one row per 500ms).
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 500;

/// Default score awarded for each cleared line.
pub const DEFAULT_POINTS_PER_LINE: u32 = 1;

/// Number of cells in every tetromino.
pub const PIECE_CELLS: usize = 4;

/// A single cell position, `(row, col)`.
pub type Coord = (i32, i32);

/// The seven tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states of a piece.
///
/// The cycle goes North -> East -> South -> West -> North. North is the spawn
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Number of rotation states.
    pub const COUNT: usize = 4;

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Orientation index, 0 for North through 3 for West.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Orientation for an index, wrapping modulo [`Rotation::COUNT`].
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Discrete inputs a host can apply to a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Shift one column left
    Left,
    /// Shift one column right
    Right,
    /// Step one row down immediately, same as a gravity tick
    SoftDrop,
    /// Rotate 90° clockwise in place
    RotateCw,
    /// Rotate 90° counter-clockwise in place
    RotateCcw,
}

impl Input {
    /// Parse an input name (case-insensitive, camelCase accepted).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Input::Left),
            "right" => Some(Input::Right),
            "softdrop" => Some(Input::SoftDrop),
            "rotatecw" => Some(Input::RotateCw),
            "rotateccw" => Some(Input::RotateCcw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Input::Left => "left",
            Input::Right => "right",
            Input::SoftDrop => "softDrop",
            Input::RotateCw => "rotateCw",
            Input::RotateCcw => "rotateCcw",
        }
    }
}

/// Top-level mode of a session.
///
/// `GameOver` is terminal: a session never leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "RUNNING",
            Phase::GameOver => "GAME_OVER",
        }
    }
}
