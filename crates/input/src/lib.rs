//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the discrete [`crate::types::Input`]
//! values a session accepts. Every key press is one input; there is no
//! auto-repeat layer, so terminals without key-release events behave the same
//! as those with them.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
