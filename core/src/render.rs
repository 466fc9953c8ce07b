//! Text host adapter for a rendered grid.

use crate::{
    config::GridGlyphs,
    grid::{CellContent, RenderedGrid},
};

/// One line per row, one glyph per cell, rows joined with '\n'.
pub fn render_text(grid: &RenderedGrid, glyphs: &GridGlyphs) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.content {
                    CellContent::Empty    => glyphs.empty.as_str(),
                    CellContent::Player   => glyphs.player.as_str(),
                    CellContent::Treasure => glyphs.treasure.as_str(),
                    CellContent::Both     => glyphs.both.as_str(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
