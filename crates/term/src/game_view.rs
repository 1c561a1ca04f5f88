//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a one-line status/banner strip, then the bordered
//! board with the side panel (score, level, lines, next, held) to its right.
//! Row 0 of the board is the spawn buffer and is never drawn.

use crate::core::{GameSnapshot, Mask, Phase, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MASK_SIZE};

/// First board row that is drawn
const FIRST_VISIBLE_ROW: u8 = 1;

/// Number of drawn board rows
pub const VISIBLE_ROWS: u16 = (BOARD_HEIGHT - FIRST_VISIBLE_ROW) as u16;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

const LOGO: [&str; 5] = [
    "||| ||| ||| ||  | |||",
    " |  |    |  | |   |  ",
    " |  |||  |  ||| | |||",
    " |  |    |  | | |   |",
    " |  |||  |  | | | |||",
];

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

/// Transient message shown in the status strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    LinesCleared { lines: u32, points: u32 },
    LevelUp,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Frame size (border included) of the board
    pub fn frame_size(&self) -> (u16, u16) {
        ((BOARD_WIDTH as u16) * self.cell_w + 2, VISIBLE_ROWS + 2)
    }

    /// Top-left corner of the board frame inside `viewport`
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        // One extra line above the frame for the status strip.
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;
        (x, y)
    }

    /// Render the game into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        banner: Option<Banner>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::default().on(BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells.
        for y in FIRST_VISIBLE_ROW..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match PieceKind::from_color(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_board_cell(fb, start_x, start_y, x as i8, y as i8, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x as i8, y as i8),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = CellStyle::fg(Rgb::new(140, 140, 140)).on(BOARD_BG).dim();
            for (x, y, _) in ghost.cells() {
                self.fill_board_cell(fb, start_x, start_y, x, y, '░', style);
            }
        }

        if let Some(active) = snap.active {
            for (x, y, kind) in active.cells() {
                self.draw_board_cell(fb, start_x, start_y, x, y, kind);
            }
        }

        self.draw_status_line(fb, snap, banner, start_x, start_y - 1);
        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.phase == Phase::GameOver {
            let mid = start_y + frame_h / 2;
            self.draw_centered(fb, start_x, frame_w, mid - 1, "GAME OVER", overlay_style());
            self.draw_centered(fb, start_x, frame_w, mid, "PRESS R TO RESTART", overlay_style());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        banner: Option<Banner>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, banner, viewport, &mut fb);
        fb
    }

    /// Render the start menu. `frame` varies the logo colors between calls.
    pub fn render_menu_into(&self, frame: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let logo_w = LOGO[0].chars().count() as u16;
        let top = viewport.height.saturating_sub(14) / 2;
        let left = viewport.width.saturating_sub(logo_w) / 2;

        for (line, text) in LOGO.iter().enumerate() {
            for (col, ch) in text.chars().enumerate() {
                if ch != '|' {
                    continue;
                }
                // Six logo colors, rotating with the frame counter.
                let pick = (frame as usize + line + col / 4) % 6;
                let kind = PieceKind::ALL[pick];
                let style = CellStyle::fg(piece_color(kind)).bold();
                fb.put_char(left + col as u16, top + line as u16, ch, style);
            }
        }

        let info = CellStyle::fg(Rgb::new(80, 220, 220));
        let lines = [
            "A/D - Move | W - Rotate | C - Hold",
            "S - Soft Drop | Space - Hard Drop",
            "Q - Quit",
        ];
        for (i, text) in lines.iter().enumerate() {
            self.draw_centered(fb, 0, viewport.width, top + 8 + i as u16, text, info);
        }
        self.draw_centered(
            fb,
            0,
            viewport.width,
            top + 12,
            "Press any key to start",
            info.bold(),
        );
    }

    pub fn render_menu(&self, frame: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_menu_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8) {
        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();
        self.fill_board_cell(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        kind: PieceKind,
    ) {
        let style = CellStyle::fg(piece_color(kind)).on(BOARD_BG).bold();
        self.fill_board_cell(fb, start_x, start_y, x, y, '█', style);
    }

    /// Paint one board cell; cells in hidden or off-board rows are skipped
    #[allow(clippy::too_many_arguments)]
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < FIRST_VISIBLE_ROW as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16 - FIRST_VISIBLE_ROW as u16);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        banner: Option<Banner>,
        x: u16,
        y: u16,
    ) {
        let value = CellStyle::default();
        match banner {
            Some(Banner::LinesCleared { lines, points }) => {
                let style = value.bold();
                fb.put_str(x, y, "LINES +", style);
                fb.put_u32(x + 7, y, lines, style);
                fb.put_str(x + 10, y, "PTS +", style);
                fb.put_u32(x + 15, y, points, style);
            }
            Some(Banner::LevelUp) => {
                fb.put_str(x, y, "LVL UP!", CellStyle::fg(Rgb::new(100, 220, 120)).bold());
            }
            None => {
                fb.put_str(x, y, "Lines:", value);
                fb.put_u32(x + 7, y, snap.lines, value);
                fb.put_str(x + 12, y, "PTS:", value);
                fb.put_u32(x + 17, y, snap.score, value);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        // Room for a 4-cell mask.
        if panel_x.saturating_add(MASK_SIZE as u16 * self.cell_w) > viewport.width {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = snap.next {
            self.draw_mask(fb, panel_x, y + 1, &next);
        }
        y += 1 + MASK_SIZE as u16 + 1;

        let held_label = if snap.can_hold { label } else { label.dim() };
        fb.put_str(panel_x, y, "HELD", held_label);
        if let Some(held) = snap.held {
            self.draw_mask(fb, panel_x, y + 1, &held);
        }
    }

    fn draw_mask(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        draw_mask_cells(fb, x, y, self.cell_w, &piece.mask);
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
    }
}

fn draw_mask_cells(fb: &mut FrameBuffer, x: u16, y: u16, cell_w: u16, mask: &Mask) {
    for (i, row) in mask.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if let Some(kind) = cell {
                let style = CellStyle::fg(piece_color(*kind)).bold();
                fb.fill_rect(x + j as u16 * cell_w, y + i as u16, cell_w, 1, '█', style);
            }
        }
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::fg(Rgb::new(230, 70, 70)).bold()
}

/// Display color for a piece's color identity
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
