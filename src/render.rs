//! Text rendering of a board held by a [`MemorySurface`].

use alloc::string::String;
use core::fmt::Write;

use crate::config::GridConfig;
use crate::palette::Palette;
use crate::position::Position;
use crate::surface::memory::MemorySurface;

/// Glyphs for palette entries, by index.
pub const STONE_GLYPHS: [char; 6] = ['X', 'O', '#', '@', '%', '&'];

/// Glyph for a cell with no style applied.
pub const EMPTY_GLYPH: char = '.';

/// Glyph for a style the palette does not know, or a palette entry past the
/// end of [`STONE_GLYPHS`].
pub const UNKNOWN_GLYPH: char = '?';

/// Glyph drawn for a cell whose most recent style is `style`.
pub fn glyph_for(style: Option<&str>, palette: &Palette) -> char {
    match style {
        None => EMPTY_GLYPH,
        Some(style) => palette
            .index_of(style)
            .and_then(|i| STONE_GLYPHS.get(i).copied())
            .unwrap_or(UNKNOWN_GLYPH),
    }
}

/// Draw the board with column symbols across the top and 1-based row
/// numbers down the side. Points without a cell are drawn as blanks.
pub fn render_board(surface: &MemorySurface, config: &GridConfig, palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for symbol in config.alphabet.chars().take(config.size) {
        let _ = write!(out, " {}", symbol);
    }
    out.push('\n');
    for row in 0..config.size {
        let _ = write!(out, "{:2} ", row + 1);
        for col in 0..config.size {
            let ch = Position::new(row, col)
                .label(config)
                .and_then(|label| surface.cell(&label).map(|c| glyph_for(c.top_style(), palette)))
                .unwrap_or(' ');
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}
