//! Tile colors and labels.
//!
//! Classic 2048 colors. Text on a tile is dark when the tile is bright and
//! light otherwise, so every value stays legible.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

pub const BACKGROUND: Rgb = Rgb::hex(0xfaf8ef);
pub const DARK_TEXT: Rgb = Rgb::hex(0x776e65);
pub const LIGHT_TEXT: Rgb = Rgb::hex(0xf9f6f2);
pub const GRID: Rgb = Rgb::hex(0xbbada0);
pub const BUTTON: Rgb = Rgb::hex(0x8f7a66);
pub const BUTTON_HIGHLIGHT: Rgb = Rgb::hex(0xaa9888);
pub const EMPTY_TILE: Rgb = Rgb::hex(0xcdc1b4);
/// Color for every tile above 2048.
pub const EXTRA_TILE: Rgb = Rgb::hex(0x3e3933);

/// Luminance above which a tile gets dark text.
const DARK_TEXT_THRESHOLD: f32 = 210.0;

pub fn tile_color(value: Tile) -> Rgb {
    match value {
        0 => EMPTY_TILE,
        2 => Rgb::hex(0xeee4da),
        4 => Rgb::hex(0xeee1c9),
        8 => Rgb::hex(0xf3b27a),
        16 => Rgb::hex(0xf69664),
        32 => Rgb::hex(0xf77c5f),
        64 => Rgb::hex(0xf75f3b),
        128 => Rgb::hex(0xedd073),
        256 => Rgb::hex(0xedcc62),
        512 => Rgb::hex(0xedc850),
        1024 => Rgb::hex(0xedc53f),
        2048 => Rgb::hex(0xedc22e),
        _ => EXTRA_TILE,
    }
}

pub fn text_color(value: Tile) -> Rgb {
    if tile_color(value).luminance() > DARK_TEXT_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Style for the digits drawn on a tile
pub fn tile_style(value: Tile) -> CellStyle {
    CellStyle::new(text_color(value), tile_color(value)).bold()
}

/// Text for a tile that fits in `width` columns
///
/// Falls back to `16k` and then `2^14` forms for narrow tiles, mirroring how
/// the number shrinks on a real board as it grows. When nothing fits, the
/// label is a lone `+` (or empty for a zero-width tile), never a cut-off number.
pub fn tile_label(value: Tile, width: u16) -> ArrayString<12> {
    let width = width as usize;
    let mut out = ArrayString::new();
    if value == 0 {
        return out;
    }

    let _ = write!(out, "{value}");
    if out.len() <= width {
        return out;
    }

    out.clear();
    let _ = write!(out, "{}k", value / 1000);
    if out.len() <= width {
        return out;
    }

    out.clear();
    let _ = write!(out, "2^{}", value.trailing_zeros());
    if out.len() <= width {
        return out;
    }

    out.clear();
    if width > 0 {
        out.push('+');
    }
    out
}
