//! GameView: maps a session [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for a session.
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

/// Where the bordered grid sits inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can keep one framebuffer across frames.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid_w = clamp_u16(snap.cols).saturating_mul(self.cell_w);
        let grid_h = clamp_u16(snap.rows).saturating_mul(self.cell_h);
        let frame = Frame {
            x: viewport.width.saturating_sub(grid_w.saturating_add(2)) / 2,
            y: viewport.height.saturating_sub(grid_h.saturating_add(2)) / 2,
            w: grid_w.saturating_add(2),
            h: grid_h.saturating_add(2),
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            grid_w,
            grid_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        let locked = CellStyle::new(Rgb::new(150, 150, 160), PLAY_BG).bold();
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if occupied {
                    self.fill_cell(fb, frame, row, col, '█', locked);
                } else {
                    self.fill_cell(fb, frame, row, col, '·', empty);
                }
            }
        }

        // Cells above the grid are not drawn.
        if let Some(kind) = snap.active_kind {
            let style = CellStyle::new(piece_color(kind), PLAY_BG).bold();
            for &(row, col) in &snap.active_cells {
                if row >= 0 && col >= 0 && (row as usize) < snap.rows && (col as usize) < snap.cols
                {
                    self.fill_cell(fb, frame, row as usize, col as usize, '█', style);
                }
            }
        }

        draw_side_panel(fb, snap, viewport, frame);

        if snap.phase == Phase::GameOver {
            draw_overlay_text(fb, frame, 0, "GAME OVER");
            draw_overlay_text(fb, frame, 1, &format!("SCORE {}", snap.score));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = (frame.x + 1).saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
        let py = (frame.y + 1).saturating_add(clamp_u16(row).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &Snapshot, viewport: Viewport, frame: Frame) {
    let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 8 {
        return;
    }

    let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

    let mut y = frame.y;
    fb.put_str(panel_x, y, "SCORE", label);
    fb.put_u32(panel_x, y.saturating_add(1), snap.score, value);
    y = y.saturating_add(3);

    fb.put_str(panel_x, y, "LINES", label);
    fb.put_u32(panel_x, y.saturating_add(1), snap.lines, value);
    y = y.saturating_add(3);

    fb.put_str(panel_x, y, "PIECE", label);
    fb.put_str(
        panel_x,
        y.saturating_add(1),
        snap.active_kind.map_or("-", piece_letter),
        value,
    );
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
        PieceKind::J => "J",
        PieceKind::L => "L",
    }
}
