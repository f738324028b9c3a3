//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Well dimensions in grid cells.
pub const WELL_WIDTH: i8 = 10;
pub const WELL_HEIGHT: i8 = 18;

/// Fixed simulation tick length (milliseconds).
pub const TICK_MS: u32 = 16;

/// Gravity cadence: the falling piece moves down once every this many ticks.
pub const FRAMES_PER_DROP: u32 = 15;

/// The seven tetromino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    T,
    I,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];
}

/// Opaque color tag carried by each cell.
///
/// The core never interprets these; the terminal view maps them to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
    Cyan,
    Purple,
}

/// Discrete player inputs consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
    Restart,
}
