//! Shape definitions - fixed coordinate tables for the seven pieces
//!
//! Each shape is data, not a type of its own: a spawn layout in board
//! coordinates, a preview layout in panel-local coordinates, an optional
//! pivot index, and a color tag per cell. Grid y grows upward; the spawn
//! layouts sit in the top two rows of the well, centered, with three-wide
//! shapes pushed one column left of center.

use crate::types::{BlockColor, ShapeKind};

/// Static description of one shape.
pub struct ShapeData {
    /// Absolute board coordinates at spawn time.
    pub spawn: [(i8, i8); 4],
    /// Panel-local coordinates for the next-piece preview.
    pub preview: [(i8, i8); 4],
    /// Index into the cell array of the rotation pivot, if the shape rotates.
    pub pivot: Option<usize>,
    /// Color tag per cell, in the same order as the layouts.
    pub colors: [BlockColor; 4],
}

/// Look up the table for a shape.
pub fn shape_data(kind: ShapeKind) -> &'static ShapeData {
    match kind {
        ShapeKind::O => &O_DATA,
        ShapeKind::T => &T_DATA,
        ShapeKind::I => &I_DATA,
        ShapeKind::J => &J_DATA,
        ShapeKind::L => &L_DATA,
        ShapeKind::S => &S_DATA,
        ShapeKind::Z => &Z_DATA,
    }
}

// The square carries one color per cell and has no pivot: it never rotates.
const O_DATA: ShapeData = ShapeData {
    spawn: [(4, 17), (5, 17), (4, 16), (5, 16)],
    preview: [(1, 1), (2, 1), (1, 0), (2, 0)],
    pivot: None,
    colors: [
        BlockColor::Orange,
        BlockColor::Green,
        BlockColor::Red,
        BlockColor::Blue,
    ],
};

const T_DATA: ShapeData = ShapeData {
    spawn: [(3, 17), (4, 17), (5, 17), (4, 16)],
    preview: [(0, 1), (1, 1), (2, 1), (1, 0)],
    pivot: Some(1),
    colors: [BlockColor::Purple; 4],
};

const I_DATA: ShapeData = ShapeData {
    spawn: [(3, 17), (4, 17), (5, 17), (6, 17)],
    preview: [(0, 1), (1, 1), (2, 1), (3, 1)],
    pivot: Some(1),
    colors: [BlockColor::Cyan; 4],
};

const J_DATA: ShapeData = ShapeData {
    spawn: [(3, 17), (4, 17), (5, 17), (5, 16)],
    preview: [(0, 1), (1, 1), (2, 1), (2, 0)],
    pivot: Some(1),
    colors: [BlockColor::Blue; 4],
};

const L_DATA: ShapeData = ShapeData {
    spawn: [(3, 17), (4, 17), (5, 17), (3, 16)],
    preview: [(0, 1), (1, 1), (2, 1), (0, 0)],
    pivot: Some(1),
    colors: [BlockColor::Orange; 4],
};

const S_DATA: ShapeData = ShapeData {
    spawn: [(4, 17), (5, 17), (3, 16), (4, 16)],
    preview: [(1, 1), (2, 1), (0, 0), (1, 0)],
    pivot: Some(3),
    colors: [BlockColor::Green; 4],
};

const Z_DATA: ShapeData = ShapeData {
    spawn: [(3, 17), (4, 17), (4, 16), (5, 16)],
    preview: [(0, 1), (1, 1), (1, 0), (2, 0)],
    pivot: Some(1),
    colors: [BlockColor::Red; 4],
};
