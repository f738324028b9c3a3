//! GameView: maps a `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The grid's y axis
//! points up (row 0 is the floor), so the view flips rows when plotting.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, WELL_HEIGHT, WELL_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the well, preview panel, and HUD.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let well_px_w = (WELL_WIDTH as u16) * self.cell_w;
        let well_px_h = (WELL_HEIGHT as u16) * self.cell_h;
        let frame_w = well_px_w + 2;
        let frame_h = well_px_h + 2;

        // Leave room for the side panel when centering.
        let panel_w = 12;
        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the play area.
        fb.fill_rect(start_x + 1, start_y + 1, well_px_w, well_px_h, ' ', bg);

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // All board cells, settled and falling alike: each carries its own
        // color tag.
        for cell in state.board().cells() {
            self.draw_grid_cell(&mut fb, start_x, start_y, cell.x, cell.y, cell.color);
        }

        self.draw_panel(&mut fb, state, start_x + frame_w + 2, start_y);

        if state.game_over() {
            self.draw_game_over(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.set(x + dx, y, '─', style);
            fb.set(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.set(x, y + dy, '│', style);
            fb.set(x + w - 1, y + dy, '│', style);
        }
        fb.set(x, y, '┌', style);
        fb.set(x + w - 1, y, '┐', style);
        fb.set(x, y + h - 1, '└', style);
        fb.set(x + w - 1, y + h - 1, '┘', style);
    }

    /// Plot one grid cell inside the border, flipping y so grid row 0 lands
    /// at the bottom of the well.
    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        gx: i8,
        gy: i8,
        color: BlockColor,
    ) {
        if gx < 0 || gx >= WELL_WIDTH || gy < 0 || gy >= WELL_HEIGHT {
            return;
        }
        let screen_row = (WELL_HEIGHT - 1 - gy) as u16;
        let px = start_x + 1 + (gx as u16) * self.cell_w;
        let py = start_y + 1 + screen_row * self.cell_h;
        let rgb = block_rgb(color);
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: rgb,
            bold: false,
            dim: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(180, 180, 190),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle::default();

        fb.put_str(x, y, "NEXT", label);
        // Preview layouts live in a 4x2 panel-local space, y up.
        for cell in state.next_piece().cells() {
            let row = (1 - cell.y) as u16;
            let px = x + (cell.x as u16) * self.cell_w;
            let py = y + 2 + row * self.cell_h;
            let style = CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: block_rgb(cell.color),
                bold: false,
                dim: false,
            };
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        }

        fb.put_str(x, y + 6, "ROWS", label);
        fb.put_str(x, y + 7, &state.rows_cleared().to_string(), value);

        let hint = CellStyle {
            fg: Rgb::new(120, 120, 130),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        fb.put_str(x, y + 10, "←/→ move", hint);
        fb.put_str(x, y + 11, "↑ rotate", hint);
        fb.put_str(x, y + 12, "space drop", hint);
        fb.put_str(x, y + 13, "q quit", hint);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 80, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let msg = "GAME OVER";
        let hint = "press r to restart";
        let mid_y = y + h / 2;
        let msg_x = x + (w.saturating_sub(msg.len() as u16)) / 2;
        let hint_x = x + (w.saturating_sub(hint.len() as u16)) / 2;
        fb.put_str(msg_x, mid_y, msg, style);
        fb.put_str(
            hint_x,
            mid_y + 1,
            hint,
            CellStyle {
                bold: false,
                ..style
            },
        );
    }
}

fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Green => Rgb::new(0, 200, 80),
        BlockColor::Red => Rgb::new(220, 50, 50),
        BlockColor::Blue => Rgb::new(60, 90, 230),
        BlockColor::Yellow => Rgb::new(230, 220, 50),
        BlockColor::Cyan => Rgb::new(60, 200, 220),
        BlockColor::Purple => Rgb::new(160, 70, 200),
    }
}
