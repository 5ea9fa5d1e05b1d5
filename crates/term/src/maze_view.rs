//! MazeView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::GamePhase;

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

/// A lightweight terminal renderer for the maze game.
pub struct MazeView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

fn wall_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    }
}

fn floor_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(80, 80, 90),
        bg: Rgb::new(24, 24, 32),
        bold: false,
        dim: false,
    }
}

fn exit_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 165, 0),
        bg: Rgb::new(24, 24, 32),
        bold: true,
        dim: false,
    }
}

fn player_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(80, 120, 220),
        bg: Rgb::new(24, 24, 32),
        bold: true,
        dim: false,
    }
}

fn border_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    }
}

fn text_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    }
}

fn win_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(100, 220, 120),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    }
}

impl MazeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully overwritten.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match state.phase() {
            GamePhase::Menu => self.draw_menu(fb, viewport),
            GamePhase::Playing | GamePhase::Won => self.draw_board(state, viewport, fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let mid_y = viewport.height / 2;
        let title = CellStyle {
            bold: true,
            ..text_style()
        };
        self.put_centered(fb, viewport, mid_y.saturating_sub(1), "TUI MAZE", title);
        self.put_centered(
            fb,
            viewport,
            mid_y.saturating_add(1),
            "press enter to start",
            text_style(),
        );
        self.put_centered(
            fb,
            viewport,
            mid_y.saturating_add(2),
            "q quits",
            CellStyle {
                dim: true,
                ..text_style()
            },
        );
    }

    fn draw_board(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        let n = state.size();
        let board_px_w = n * self.cell_w;
        let board_px_h = n * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());

        let maze = state.maze();
        let exit = maze.exit();
        for y in 0..n {
            for x in 0..n {
                let (ch, style) = if maze.is_wall(x as i32, y as i32) {
                    ('█', wall_style())
                } else if x == exit.x && y == exit.y {
                    ('█', exit_style())
                } else {
                    (' ', floor_style())
                };
                self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
            }
        }

        // Player on top of whatever cell it occupies (including the exit).
        let player = state.position();
        self.fill_cell_rect(fb, start_x, start_y, player.x, player.y, '█', player_style());

        // Key hints under the frame.
        let hint_y = start_y.saturating_add(frame_h);
        self.put_centered(
            fb,
            viewport,
            hint_y,
            "arrows/wasd move · r restart · q quit",
            CellStyle {
                dim: true,
                ..text_style()
            },
        );

        if state.phase() == GamePhase::Won {
            let mid_y = start_y.saturating_add(frame_h / 2);
            self.put_centered(fb, viewport, mid_y, " You Win! ", win_style());
            self.put_centered(
                fb,
                viewport,
                mid_y.saturating_add(1),
                " Press R to Restart ",
                text_style(),
            );
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}
