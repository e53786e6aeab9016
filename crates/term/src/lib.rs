//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders
//! session snapshots into a simple framebuffer that is then flushed to the
//! terminal, without any widget or layout library.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and writes only what changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
