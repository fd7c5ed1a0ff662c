//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Geometry is recomputed from the viewport on every frame, so a terminal
//! resize only needs a redraw. The same [`Layout`] is used by the input layer
//! to hit-test the "New Game" button.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette;
use crate::types::Rect;

/// Outer margin around everything, in cells.
const MARGIN: u16 = 1;
/// Height of the title / button / score row.
const HEADER_H: u16 = 2;
/// Blank rows between header and board.
const HEADER_GAP: u16 = 1;
/// Key help line under the board.
const FOOTER_H: u16 = 1;
const TITLE: &str = "2048";
const BOX_W: u16 = 10;
const BOX_GAP: u16 = 1;
/// Gutter between tiles. Wider than tall to offset the terminal glyph aspect.
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;
const HELP: &str = "arrows move  n new  +/- size  q quit";

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

/// Where everything goes for one board size and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: u16,
    pub tile_w: u16,
    pub tile_h: u16,
    pub title: Rect,
    pub new_game: Rect,
    pub score: Rect,
    pub best: Rect,
    pub board: Rect,
    pub footer: Rect,
}

impl Layout {
    /// Area of the tile at column `x`, row `y`.
    pub fn tile_rect(&self, x: u16, y: u16) -> Rect {
        Rect::new(
            self.board.x + GAP_X + x * (self.tile_w + GAP_X),
            self.board.y + GAP_Y + y * (self.tile_h + GAP_Y),
            self.tile_w,
            self.tile_h,
        )
    }
}

fn tile_w_for(tile_h: u16) -> u16 {
    tile_h * 2 + 2
}

fn board_extent(n: u16, tile_w: u16, tile_h: u16) -> (u16, u16) {
    (
        n * tile_w + (n + 1) * GAP_X,
        n * tile_h + (n + 1) * GAP_Y,
    )
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Upper bound on tile height in rows.
    max_tile_h: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            max_tile_h: 5,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new(max_tile_h: u16) -> Self {
        Self {
            max_tile_h: max_tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Compute the layout for a `size` x `size` board in `viewport`.
    ///
    /// Picks the largest tile that fits; when even the smallest tile does not
    /// fit, the smallest is used and the frame is clipped.
    pub fn layout(&self, size: usize, viewport: Viewport) -> Layout {
        let n = size.max(1) as u16;
        let footer_h = if self.show_help { FOOTER_H } else { 0 };
        let avail_w = viewport.width.saturating_sub(2 * MARGIN);
        let avail_h = viewport
            .height
            .saturating_sub(2 * MARGIN + HEADER_H + HEADER_GAP + footer_h);

        let tile_h = (1..=self.max_tile_h)
            .rev()
            .find(|&th| {
                let (w, h) = board_extent(n, tile_w_for(th), th);
                w <= avail_w && h <= avail_h
            })
            .unwrap_or(1);
        let tile_w = tile_w_for(tile_h);
        let (board_w, board_h) = board_extent(n, tile_w, tile_h);

        let header_w = TITLE.len() as u16 + 3 * (BOX_GAP + BOX_W);
        let content_w = board_w.max(header_w);
        let content_h = HEADER_H + HEADER_GAP + board_h + footer_h;
        let x0 = viewport.width.saturating_sub(content_w) / 2;
        let y0 = viewport.height.saturating_sub(content_h) / 2;

        let best = Rect::new(x0 + content_w - BOX_W, y0, BOX_W, HEADER_H);
        let score = Rect::new(best.x - BOX_GAP - BOX_W, y0, BOX_W, HEADER_H);
        let new_game = Rect::new(score.x - BOX_GAP - BOX_W, y0, BOX_W, HEADER_H);
        let board = Rect::new(
            x0 + (content_w - board_w) / 2,
            y0 + HEADER_H + HEADER_GAP,
            board_w,
            board_h,
        );

        Layout {
            size: n,
            tile_w,
            tile_h,
            title: Rect::new(x0, y0, TITLE.len() as u16, HEADER_H),
            new_game,
            score,
            best,
            board,
            footer: Rect::new(x0, board.bottom(), content_w, footer_h),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed. `hover` highlights the New Game button.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        hover: bool,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(palette::DARK_TEXT, palette::BACKGROUND).into_cell(' '));

        let layout = self.layout(snap.size, viewport);
        self.draw_header(fb, snap, &layout, hover);
        self.draw_board(fb, snap, &layout);

        if snap.game_over {
            self.draw_game_over(fb, &layout);
        }

        if self.show_help {
            let help = CellStyle::new(palette::DARK_TEXT, palette::BACKGROUND).dim();
            fb.put_str_centered(layout.footer, layout.footer.y, HELP, help);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport, hover: bool) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, hover, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout, hover: bool) {
        let title = CellStyle::new(palette::DARK_TEXT, palette::BACKGROUND).bold();
        fb.put_str(layout.title.x, layout.title.y, TITLE, title);
        let mut size_label = ArrayString::<8>::new();
        let _ = write!(size_label, "{0}x{0}", snap.size);
        fb.put_str(layout.title.x, layout.title.y + 1, &size_label, title.dim());

        let button_bg = if hover {
            palette::BUTTON_HIGHLIGHT
        } else {
            palette::BUTTON
        };
        let button = CellStyle::new(palette::LIGHT_TEXT, button_bg);
        fb.fill_rect(layout.new_game, ' ', button);
        fb.put_str_centered(layout.new_game, layout.new_game.y, "New Game", button.bold());
        fb.put_str_centered(layout.new_game, layout.new_game.y + 1, "(n)", button);

        self.draw_counter(fb, layout.score, "SCORE", snap.score);
        self.draw_counter(fb, layout.best, "BEST", snap.high_score);
    }

    fn draw_counter(&self, fb: &mut FrameBuffer, area: Rect, label: &str, value: u32) {
        let style = CellStyle::new(palette::LIGHT_TEXT, palette::EMPTY_TILE);
        fb.fill_rect(area, ' ', style);
        fb.put_str_centered(area, area.y, label, style);

        let mut digits = ArrayString::<10>::new();
        let _ = write!(digits, "{value}");
        fb.put_str_centered(area, area.y + 1, &digits, style.bold());
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        fb.fill_rect(layout.board, ' ', CellStyle::new(palette::DARK_TEXT, palette::GRID));

        for y in 0..snap.size {
            for x in 0..snap.size {
                let value = snap.tile(x, y).unwrap_or(0);
                let rect = layout.tile_rect(x as u16, y as u16);
                let style = palette::tile_style(value);
                fb.fill_rect(rect, ' ', style);
                if value != 0 {
                    let label = palette::tile_label(value, rect.w);
                    fb.put_str_centered(rect, rect.y + rect.h / 2, &label, style);
                }
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let banner = CellStyle::new(palette::LIGHT_TEXT, palette::EXTRA_TILE).bold();
        let mid_y = layout.board.y + layout.board.h / 2;
        let band = Rect::new(layout.board.x, mid_y, layout.board.w, 1);
        fb.fill_rect(band, ' ', banner);
        fb.put_str_centered(band, mid_y, "GAME OVER", banner);

        if layout.board.h > 2 {
            let hint = Rect::new(layout.board.x, mid_y + 1, layout.board.w, 1);
            fb.fill_rect(hint, ' ', banner);
            fb.put_str_centered(hint, hint.y, "press n", banner);
        }
    }
}
