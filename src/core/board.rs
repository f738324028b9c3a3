//! Board module - the well and every piece spawned into it
//!
//! Unlike a flat cell grid, the board keeps whole pieces around after they
//! settle; row occupancy is derived by scanning cells, never stored. The
//! no-overlap invariant (at most one cell per grid position) is enforced by
//! the collision checks that gate every committed move.

use arrayvec::ArrayVec;

use crate::core::piece::{Cell, Piece};
use crate::types::{WELL_HEIGHT, WELL_WIDTH};

/// The 10x18 well. Pieces are an unordered collection; callers address them
/// by index and must not hold indexes across a clear sweep.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    pub fn new() -> Self {
        Self { pieces: Vec::new() }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterate every cell on the board, settled and falling alike.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.pieces.iter().flat_map(|p| p.cells().iter())
    }

    /// Add a piece and return its index.
    pub fn push(&mut self, piece: Piece) -> usize {
        self.pieces.push(piece);
        self.pieces.len() - 1
    }

    /// Run a closure against one piece and a slice of all the others. This
    /// is how moves see the rest of the board without aliasing it: the piece
    /// is taken out, mutated, and reinserted at the same index.
    pub fn with_piece<R>(&mut self, idx: usize, f: impl FnOnce(&mut Piece, &[Piece]) -> R) -> R {
        let mut piece = self.pieces.remove(idx);
        let out = f(&mut piece, &self.pieces);
        self.pieces.insert(idx, piece);
        out
    }

    /// Is any cell of any piece at this position?
    pub fn occupied(&self, x: i8, y: i8) -> bool {
        self.pieces.iter().any(|p| p.occupies(x, y))
    }

    /// Rows currently holding a cell in every column. A row qualifies the
    /// instant its running count reaches the well width.
    fn full_rows(&self) -> ArrayVec<i8, { WELL_HEIGHT as usize }> {
        let mut counts = [0u8; WELL_HEIGHT as usize];
        let mut full = ArrayVec::new();
        for cell in self.cells() {
            let row = &mut counts[cell.y as usize];
            *row += 1;
            if *row == WELL_WIDTH as u8 {
                full.push(cell.y);
            }
        }
        full
    }

    /// Clear every full row and settle the survivors, repeating until a
    /// sweep finds nothing. Returns the number of rows removed. Each sweep:
    /// delete the qualifying rows' cells from their owning pieces, drop
    /// pieces left empty, let each piece collapse onto its own lower
    /// fragment, then settle the whole board. Chain clears revealed by
    /// settling are picked up by the next sweep; the row count bounds the
    /// loop.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        loop {
            let full = self.full_rows();
            if full.is_empty() {
                break;
            }
            cleared += full.len() as u32;
            for piece in &mut self.pieces {
                piece.clear_rows(&full);
            }
            self.pieces.retain(|p| !p.is_empty());
            for piece in &mut self.pieces {
                piece.collapse();
            }
            self.settle();
        }
        cleared
    }

    /// Board-wide settle pass: every settled piece falls onto whatever now
    /// sits beneath it. A piece still flagged as falling is the player's and
    /// is left alone.
    fn settle(&mut self) {
        for idx in 0..self.pieces.len() {
            self.with_piece(idx, |piece, others| {
                if !piece.is_falling() {
                    piece.drop(others);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    /// Drop a piece straight down the given number of columns from spawn,
    /// then lock it wherever it lands.
    fn drop_at(board: &mut Board, kind: ShapeKind, shift_x: i8) {
        let idx = board.push(Piece::spawn(kind));
        board.with_piece(idx, |piece, others| {
            let (step, count) = if shift_x < 0 { (-1, -shift_x) } else { (1, shift_x) };
            for _ in 0..count {
                if step < 0 {
                    piece.move_left(others);
                } else {
                    piece.move_right(others);
                }
            }
            piece.drop(others);
        });
    }

    #[test]
    fn empty_board_has_no_full_rows() {
        let mut board = Board::new();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.pieces().len(), 0);
    }

    #[test]
    fn no_two_cells_share_a_position_after_drops() {
        let mut board = Board::new();
        for shift in [-4, -2, 0, 2, 4] {
            drop_at(&mut board, ShapeKind::O, shift);
            drop_at(&mut board, ShapeKind::T, shift);
        }
        let mut seen = std::collections::HashSet::new();
        for cell in board.cells() {
            assert!(seen.insert((cell.x, cell.y)), "overlap at {:?}", (cell.x, cell.y));
        }
    }

    #[test]
    fn full_row_is_detected_and_removed() {
        let mut board = Board::new();
        // Five squares side by side fill rows 0 and 1 completely.
        for shift in [-4, -2, 0, 2, 4] {
            drop_at(&mut board, ShapeKind::O, shift);
        }
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.pieces().len(), 0);
    }

    #[test]
    fn partial_row_survives_a_clear() {
        let mut board = Board::new();
        // Row 0 full, row 1 only two-thirds full: three squares covering
        // columns 0..=5 of rows 0 and 1, plus an I bar flat across
        // columns 6..=9 of row 0.
        for shift in [-4, -2, 0] {
            drop_at(&mut board, ShapeKind::O, shift);
        }
        drop_at(&mut board, ShapeKind::I, 3);
        assert_eq!(board.clear_full_rows(), 1);
        // The squares keep their row-1 cells, now collapsed to the floor.
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| c.y == 0));
        assert!(cells.iter().all(|c| c.x <= 5));
    }

    #[test]
    fn emptied_pieces_are_destroyed() {
        let mut board = Board::new();
        for shift in [-4, -2, 0] {
            drop_at(&mut board, ShapeKind::O, shift);
        }
        drop_at(&mut board, ShapeKind::I, 3);
        assert_eq!(board.pieces().len(), 4);
        board.clear_full_rows();
        // The bar contributed only row-0 cells and is gone entirely.
        assert_eq!(board.pieces().len(), 3);
        assert!(board.pieces().iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn settle_drops_pieces_whose_support_was_cleared() {
        let mut board = Board::new();
        for shift in [-4, -2, 0] {
            drop_at(&mut board, ShapeKind::O, shift);
        }
        drop_at(&mut board, ShapeKind::I, 3);
        // A square stacked on top of the bar, away from the cleared columns.
        drop_at(&mut board, ShapeKind::O, 3);
        board.clear_full_rows();
        // With the bar gone from row 0, the stacked square must land on the
        // floor, not float at its old height.
        let stacked: Vec<_> = board
            .cells()
            .filter(|c| c.x == 7 || c.x == 8)
            .map(|c| c.y)
            .collect();
        assert!(!stacked.is_empty());
        assert!(stacked.iter().all(|&y| y <= 1), "floating cells: {stacked:?}");
    }
}
