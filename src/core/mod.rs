//! Core module - pure game logic with no external dependencies
//!
//! Everything under here is deterministic and I/O-free: the well, the
//! pieces, the row-clear machinery, and the session state machine.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;

// Re-export commonly used types
pub use board::Board;
pub use game::GameState;
pub use piece::{Cell, Piece};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng};
