//! Terminal falling-block puzzle game.
//!
//! The crate splits into a pure simulation core and a thin terminal shell:
//!
//! - [`core`]: well, pieces, row clearing, and the game session
//! - [`term`]: framebuffer, diff renderer, and the game view
//! - [`input`]: key-to-action mapping
//! - [`types`]: shared constants and plain data types

pub mod core;
pub mod input;
pub mod term;
pub mod types;
