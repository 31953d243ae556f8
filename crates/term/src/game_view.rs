//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and idempotent: rendering the same snapshot
//! twice produces the same framebuffer and touches no game state.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Point, GRID_COUNT};

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

// Palette lifted from the original canvas renderer.
const BACKGROUND: Rgb = Rgb::new(26, 26, 46);
const GRID_DOT: Rgb = Rgb::new(60, 60, 80);
const HEAD: Rgb = Rgb::new(78, 205, 196);
const BODY: Rgb = Rgb::new(102, 126, 234);
const FOOD: Rgb = Rgb::new(255, 107, 107);
const BORDER: Rgb = Rgb::new(200, 200, 200);

/// A lightweight terminal view for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
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
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let board_px_w = (GRID_COUNT as u16) * self.cell_w;
        let board_px_h = (GRID_COUNT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: GRID_DOT,
            bg: BACKGROUND,
            bold: false,
            dim: true,
        };
        let border = CellStyle {
            fg: BORDER,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background with faint grid dots.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        for y in 0..GRID_COUNT as u16 {
            for x in 0..GRID_COUNT as u16 {
                let px = start_x + 1 + x * self.cell_w;
                let py = start_y + 1 + y * self.cell_h;
                fb.put_char(px, py, '·', bg);
            }
        }

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Body first, then head on top so the head wins on the start tile.
        for &cell in snap.snake.iter().skip(1) {
            self.fill_cell(fb, start_x, start_y, cell, '█', self.body_style());
        }
        if let Some(head) = snap.head() {
            self.fill_cell(fb, start_x, start_y, head, '█', self.head_style());
        }

        if let Some(food) = snap.food {
            self.fill_cell(fb, start_x, start_y, food, '●', self.food_style());
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Idle => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER")
            }
            Phase::Over => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Phase::Won => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN"),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn head_style(&self) -> CellStyle {
        CellStyle {
            fg: HEAD,
            bg: BACKGROUND,
            bold: true,
            dim: false,
        }
    }

    fn body_style(&self) -> CellStyle {
        CellStyle {
            fg: BODY,
            bg: BACKGROUND,
            bold: false,
            dim: false,
        }
    }

    fn food_style(&self) -> CellStyle {
        CellStyle {
            fg: FOOD,
            bg: BACKGROUND,
            bold: true,
            dim: false,
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Point,
        ch: char,
        style: CellStyle,
    ) {
        if !cell.in_bounds() {
            return;
        }
        let px = start_x + 1 + (cell.x as u16) * self.cell_w;
        let py = start_y + 1 + (cell.y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.tick_interval_ms as u32, value);
        if panel_w >= 14 {
            fb.put_str(panel_x + 4, y, "ms", CellStyle { dim: true, ..value });
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn viewport() -> Viewport {
        // Wide enough for the 25-cell board at 2x1 plus the side panel.
        Viewport::new(80, 30)
    }

    fn find_char(fb: &FrameBuffer, needle: char) -> Vec<(u16, u16)> {
        let mut hits = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(needle) {
                    hits.push((x, y));
                }
            }
        }
        hits
    }

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn render_is_idempotent() {
        let mut state = GameState::new(42, 0);
        state.start();
        let snap = state.snapshot();
        let view = GameView::default();

        let a = view.render(&snap, viewport());
        let b = view.render(&snap, viewport());
        assert_eq!(a, b);
        // The snapshot is untouched.
        assert_eq!(snap, state.snapshot());
    }

    #[test]
    fn render_shows_snake_and_food() {
        let mut state = GameState::new(42, 0);
        state.start();
        let snap = state.snapshot();
        let view = GameView::default();

        let fb = view.render(&snap, viewport());

        // 2 columns per cell: head is bold, body is not.
        let blocks = find_char(&fb, '█');
        assert_eq!(blocks.len(), snap.snake.len() * 2);
        let bold_blocks = blocks
            .iter()
            .filter(|&&(x, y)| fb.get(x, y).unwrap().style.bold)
            .count();
        assert_eq!(bold_blocks, 2, "exactly the head cell renders bold");

        assert_eq!(find_char(&fb, '●').len(), 2);
    }

    #[test]
    fn overlays_by_phase() {
        let view = GameView::default();
        let mut snap = GameState::new(42, 0).snapshot();

        let fb = view.render(&snap, viewport());
        assert!(contains_text(&fb, "PRESS ENTER"));

        snap.phase = Phase::Over;
        let fb = view.render(&snap, viewport());
        assert!(contains_text(&fb, "GAME OVER"));

        snap.phase = Phase::Won;
        let fb = view.render(&snap, viewport());
        assert!(contains_text(&fb, "YOU WIN"));

        snap.phase = Phase::Running;
        let fb = view.render(&snap, viewport());
        assert!(!contains_text(&fb, "GAME OVER"));
        assert!(!contains_text(&fb, "PRESS ENTER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = GameState::new(42, 0).snapshot();
        let _ = view.render(&snap, Viewport::new(10, 5));
        let _ = view.render(&snap, Viewport::new(0, 0));
    }
}
