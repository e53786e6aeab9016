//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block engine: the grid, the shape
//! catalog, collision and locking, line clearing and scoring, and the session
//! state machine that ties them together. It has **no dependencies** on a
//! terminal, a clock, or any I/O, which makes it:
//!
//! - **Deterministic**: the same seed and configuration replay the same game
//! - **Headless**: every rule can be exercised from plain unit tests
//! - **Embeddable**: any front end drives it through `tick` and `handle_input`
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy matrix with row clearing
//! - [`pieces`]: shape catalog, seven tetrominoes in four orientations
//! - [`piece`]: the active piece and its absolute cells
//! - [`collision`]: legality checks, moves, rotation, locking
//! - [`scoring`]: full-row scanning and the linear score policy
//! - [`rng`]: seeded uniform piece selection
//! - [`session`]: the RUNNING / GAME_OVER state machine
//! - [`snapshot`]: owned read views for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{create_session, StepOutcome};
//! use blockfall_core::types::{Input, Phase};
//!
//! let mut session = create_session(20, 10, 500).unwrap();
//!
//! session.handle_input(Input::Left);
//! assert_eq!(session.tick(), StepOutcome::Moved);
//!
//! let snap = session.snapshot();
//! assert_eq!(snap.phase, Phase::Running);
//! assert_eq!(snap.grid.len(), 20);
//! ```
//!
//! # Timing
//!
//! The engine owns no clock. A host calls
//! [`Session::tick`](session::Session::tick) once per
//! [`drop_interval`](session::Session::drop_interval) while the phase is
//! running, and forwards discrete inputs as they arrive. Both calls must be
//! serialised onto one thread of control.

pub mod collision;
pub mod config;
pub mod error;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{absolute_cells, is_grounded, is_legal, lock, try_move, try_rotate};
pub use config::SessionConfig;
pub use error::ConfigError;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use pieces::{shape_for, shape_height, shape_width, Shape};
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{clear_completed_lines, ScoringPolicy};
pub use session::{create_session, LockEvent, Session, StepOutcome};
pub use snapshot::Snapshot;
