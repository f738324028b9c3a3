//! Game session module - the tick/lock/spawn state machine
//!
//! One `GameState` owns the whole session: the board, the falling piece (an
//! element of the board), the off-board preview piece, the frame counter
//! driving gravity, and the terminal game-over flag. A session is reset by
//! constructing a fresh one, never by patching fields of a live session.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::{ShapeSource, SimpleRng};
use crate::types::{GameAction, FRAMES_PER_DROP};

/// Complete game session state.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    /// Index of the falling piece in the board, while one exists.
    current: Option<usize>,
    /// Preview piece in panel-local coordinates; joins the board on promotion.
    next: Piece,
    shapes: Box<dyn ShapeSource>,
    frame_count: u32,
    rows_cleared: u32,
    game_over: bool,
}

impl GameState {
    /// Create a session with the default seeded RNG.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(SimpleRng::new(seed)))
    }

    /// Create a session drawing shapes from the given source. Tests inject a
    /// scripted source to fix the spawn sequence.
    pub fn with_source(mut shapes: Box<dyn ShapeSource>) -> Self {
        let next = Piece::preview(shapes.draw());
        let mut state = Self {
            board: Board::new(),
            current: None,
            next,
            shapes,
            frame_count: 0,
            rows_cleared: 0,
            game_over: false,
        };
        state.spawn_piece();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece, if the session is live.
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.and_then(|idx| self.board.pieces().get(idx))
    }

    /// The preview piece, in panel-local coordinates.
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance one frame. Gravity runs once every `FRAMES_PER_DROP` frames;
    /// everything a gravity step triggers (lock, clears, settling, respawn)
    /// completes before this returns. A finished game ignores ticks.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        self.frame_count += 1;
        if self.frame_count >= FRAMES_PER_DROP {
            self.frame_count = 0;
            self.gravity_step();
        }
    }

    /// Apply one player input. Returns whether it changed anything. While
    /// game over holds, restart is the only input honored; while the game is
    /// live, restart is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            if action == GameAction::Restart {
                self.reset();
                return true;
            }
            return false;
        }
        let Some(idx) = self.current else {
            return false;
        };
        match action {
            GameAction::MoveLeft => self.board.with_piece(idx, |p, others| p.move_left(others)),
            GameAction::MoveRight => self.board.with_piece(idx, |p, others| p.move_right(others)),
            GameAction::Rotate => self.board.with_piece(idx, |p, others| p.rotate(others)),
            GameAction::HardDrop => {
                self.board.with_piece(idx, |p, others| p.drop(others));
                self.finish_lock();
                true
            }
            GameAction::Restart => false,
        }
    }

    /// Rebuild the session from scratch: empty board, zeroed counters, fresh
    /// pieces drawn from the same shape source.
    pub fn reset(&mut self) {
        let shapes = std::mem::replace(&mut self.shapes, Box::new(SimpleRng::new(1)));
        *self = Self::with_source(shapes);
    }

    fn gravity_step(&mut self) {
        let Some(idx) = self.current else {
            return;
        };
        let still_falling = self.board.with_piece(idx, |piece, others| {
            piece.move_down(others);
            piece.is_falling()
        });
        if !still_falling {
            self.finish_lock();
        }
    }

    /// The piece just locked: clear rows, settle, then promote the preview
    /// piece to the board and draw a new one.
    fn finish_lock(&mut self) {
        self.current = None;
        self.rows_cleared += self.board.clear_full_rows();
        self.spawn_piece();
    }

    fn spawn_piece(&mut self) {
        let kind = self.next.kind();
        self.next = Piece::preview(self.shapes.draw());
        let idx = self.board.push(Piece::spawn(kind));
        self.current = Some(idx);
        // A spawn landing on settled cells means the well is full: freeze.
        let blocked = self
            .board
            .with_piece(idx, |piece, others| piece.collides_with(others));
        if blocked {
            self.game_over = true;
        }
    }
}
