//! Piece module - a live tetromino and the cells it owns
//!
//! A piece is the unit of simulation before and after locking: it falls as a
//! rigid body, and once settled it keeps owning its cells so row clears can
//! carve them out piecemeal. Every move is attempt/rollback: shift all four
//! cells, test the result, undo on violation. Nothing ever commits a partial
//! move.

use arrayvec::ArrayVec;

use crate::core::shapes::shape_data;
use crate::types::{BlockColor, ShapeKind, WELL_HEIGHT, WELL_WIDTH};

/// One occupied grid square. Owned by exactly one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

/// A tetromino on the board: four cells, an optional rotation pivot, and a
/// falling flag that flips exactly once, when downward movement is blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    cells: ArrayVec<Cell, 4>,
    pivot: Option<usize>,
    kind: ShapeKind,
    falling: bool,
}

impl Piece {
    /// Create a piece at its fixed board spawn location.
    pub fn spawn(kind: ShapeKind) -> Self {
        let data = shape_data(kind);
        Self::from_layout(kind, &data.spawn, &data.colors, data.pivot)
    }

    /// Create a piece in panel-local preview coordinates.
    pub fn preview(kind: ShapeKind) -> Self {
        let data = shape_data(kind);
        Self::from_layout(kind, &data.preview, &data.colors, data.pivot)
    }

    fn from_layout(
        kind: ShapeKind,
        layout: &[(i8, i8); 4],
        colors: &[BlockColor; 4],
        pivot: Option<usize>,
    ) -> Self {
        let cells = std::array::from_fn(|i| {
            let (x, y) = layout[i];
            Cell { x, y, color: colors[i] }
        });
        Self::from_cells(kind, cells, pivot)
    }

    /// Build a piece from explicit cells. Shape definitions are
    /// programming-time data, so a bad pivot is a bug, not a runtime error.
    pub fn from_cells(kind: ShapeKind, cells: [Cell; 4], pivot: Option<usize>) -> Self {
        if let Some(pivot) = pivot {
            assert!(pivot < cells.len(), "pivot index out of range: {pivot}");
        }
        Self {
            cells: cells.into_iter().collect(),
            pivot,
            kind,
            falling: true,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_falling(&self) -> bool {
        self.falling
    }

    /// True once row clears have carved away every cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark the piece settled without moving it.
    pub fn lock(&mut self) {
        self.falling = false;
    }

    /// Does this piece occupy the given grid position?
    pub fn occupies(&self, x: i8, y: i8) -> bool {
        self.cells.iter().any(|c| c.x == x && c.y == y)
    }

    /// The single authoritative overlap predicate: true iff any of this
    /// piece's cells shares a position with any cell of `others`.
    pub fn collides_with(&self, others: &[Piece]) -> bool {
        others
            .iter()
            .any(|other| other.cells.iter().any(|c| self.occupies(c.x, c.y)))
    }

    pub fn at_left_edge(&self) -> bool {
        self.cells.iter().any(|c| c.x == 0)
    }

    pub fn at_right_edge(&self) -> bool {
        self.cells.iter().any(|c| c.x == WELL_WIDTH - 1)
    }

    pub fn at_bottom_edge(&self) -> bool {
        self.cells.iter().any(|c| c.y == 0)
    }

    fn shift(&mut self, dx: i8, dy: i8) {
        for cell in &mut self.cells {
            cell.x += dx;
            cell.y += dy;
        }
    }

    /// Attempt a one-column shift left. Rolled back wholesale on overlap.
    pub fn move_left(&mut self, others: &[Piece]) -> bool {
        if self.at_left_edge() {
            return false;
        }
        self.shift(-1, 0);
        if self.collides_with(others) {
            self.shift(1, 0);
            return false;
        }
        true
    }

    /// Attempt a one-column shift right. Rolled back wholesale on overlap.
    pub fn move_right(&mut self, others: &[Piece]) -> bool {
        if self.at_right_edge() {
            return false;
        }
        self.shift(1, 0);
        if self.collides_with(others) {
            self.shift(-1, 0);
            return false;
        }
        true
    }

    /// Attempt a one-row downward shift. Blocking (floor or overlap) is the
    /// one place normal gravity flips `falling` to false.
    pub fn move_down(&mut self, others: &[Piece]) -> bool {
        if self.at_bottom_edge() {
            self.falling = false;
            return false;
        }
        self.shift(0, -1);
        if self.collides_with(others) {
            self.shift(0, 1);
            self.falling = false;
            return false;
        }
        true
    }

    /// Fall straight to rest: repeated downward shifts collapsed into one
    /// atomic action, then lock.
    pub fn drop(&mut self, others: &[Piece]) {
        if self.cells.is_empty() {
            self.falling = false;
            return;
        }
        loop {
            if self.at_bottom_edge() {
                break;
            }
            self.shift(0, -1);
            if self.collides_with(others) {
                self.shift(0, 1);
                break;
            }
        }
        self.falling = false;
    }

    /// Rotate 90 degrees counter-clockwise about the pivot cell; the pivot
    /// itself never moves. If the result overlaps another piece or lands
    /// outside the well on any side, the exact inverse rotation restores
    /// every cell. Shapes without a pivot (the square) never rotate.
    pub fn rotate(&mut self, others: &[Piece]) -> bool {
        let Some(pivot) = self.pivot else {
            return false;
        };
        self.rotate_ccw(pivot);
        if self.collides_with(others) || self.outside_well() {
            self.rotate_cw(pivot);
            return false;
        }
        true
    }

    fn rotate_ccw(&mut self, pivot: usize) {
        let (px, py) = (self.cells[pivot].x, self.cells[pivot].y);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if i == pivot {
                continue;
            }
            let dx = cell.x - px;
            let dy = cell.y - py;
            cell.x = px - dy;
            cell.y = py + dx;
        }
    }

    fn rotate_cw(&mut self, pivot: usize) {
        let (px, py) = (self.cells[pivot].x, self.cells[pivot].y);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if i == pivot {
                continue;
            }
            let dx = cell.x - px;
            let dy = cell.y - py;
            cell.x = px + dy;
            cell.y = py - dx;
        }
    }

    /// Strict out-of-bounds test for rotation results. Moves approach edges
    /// one step at a time and are gated by the `at_*_edge` equality checks;
    /// a rotation can jump a cell past a boundary in one step, so it is
    /// validated with `<`/`>=` instead.
    fn outside_well(&self) -> bool {
        self.cells
            .iter()
            .any(|c| c.x < 0 || c.x >= WELL_WIDTH || c.y < 0 || c.y >= WELL_HEIGHT)
    }

    /// Remove every cell lying in one of the given rows. Builds the retained
    /// sequence instead of deleting during iteration; the pivot index is
    /// meaningless once cells are gone (settled pieces never rotate), so it
    /// is dropped.
    pub fn clear_rows(&mut self, rows: &[i8]) {
        self.cells = self
            .cells
            .iter()
            .copied()
            .filter(|c| !rows.contains(&c.y))
            .collect();
        self.pivot = None;
    }

    /// Settle this piece's upper fragment onto its own lowest remaining row
    /// after a row clear carved out interior cells. The fragment shifts down
    /// one row at a time and stops as soon as any shifted cell would reach
    /// the lowest row's level. Intentionally per-piece: this is not global
    /// per-column gravity.
    pub fn collapse(&mut self) {
        let Some(lowest) = self.cells.iter().map(|c| c.y).min() else {
            return;
        };
        let upper: ArrayVec<usize, 4> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.y > lowest)
            .map(|(i, _)| i)
            .collect();
        if upper.is_empty() {
            return;
        }
        while upper.iter().all(|&i| self.cells[i].y - 1 > lowest) {
            for &i in &upper {
                self.cells[i].y -= 1;
            }
        }
    }
}
