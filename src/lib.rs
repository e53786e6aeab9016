//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and adds the host-side
//! [`clock`] that decides when a session should be ticked.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod clock;
pub mod script;
