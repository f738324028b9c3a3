//! RNG module - seedable shape selection
//!
//! A small LCG keeps spawning deterministic: the same seed produces the same
//! run of shapes, so tests can script an entire game. Shapes are drawn
//! uniformly from the seven kinds.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw one shape uniformly at random.
    pub fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// Anything the controller can draw spawn shapes from. The game uses
/// [`SimpleRng`]; tests inject a scripted sequence.
pub trait ShapeSource: std::fmt::Debug {
    fn draw(&mut self) -> ShapeKind;
}

impl ShapeSource for SimpleRng {
    fn draw(&mut self) -> ShapeKind {
        self.next_shape()
    }
}

/// Repeats a fixed sequence of shapes forever. Intended for tests.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    shapes: Vec<ShapeKind>,
    index: usize,
}

impl ScriptedShapes {
    pub fn new(shapes: Vec<ShapeKind>) -> Self {
        assert!(!shapes.is_empty(), "scripted shape list must not be empty");
        Self { shapes, index: 0 }
    }
}

impl ShapeSource for ScriptedShapes {
    fn draw(&mut self) -> ShapeKind {
        let shape = self.shapes[self.index % self.shapes.len()];
        self.index += 1;
        shape
    }
}
