//! The treasure grid — a pure mapping from (position, treasure) to cells.
//!
//! The grid is fixed at GRID_SIZE × GRID_SIZE. Cell index i sits at
//! x = i % GRID_SIZE, y = i / GRID_SIZE. Coordinates outside the grid
//! (negative, or GRID_SIZE and above) are not validated; they simply never
//! match a cell.

use crate::{
    model::{Located, Vec2},
    types::Coord,
};
use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 20;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// What a cell shows. When both markers share a cell the player marker is
/// drawn first and the treasure is layered above it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellContent {
    #[default]
    Empty,
    Player,
    Treasure,
    Both,
}

impl CellContent {
    fn from_flags(player: bool, treasure: bool) -> Self {
        match (player, treasure) {
            (false, false) => Self::Empty,
            (true,  false) => Self::Player,
            (false, true)  => Self::Treasure,
            (true,  true)  => Self::Both,
        }
    }

    pub fn has_player(&self) -> bool {
        matches!(self, Self::Player | Self::Both)
    }

    pub fn has_treasure(&self) -> bool {
        matches!(self, Self::Treasure | Self::Both)
    }

    pub fn is_marked(&self) -> bool {
        *self != Self::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub index: usize,
    pub x: Coord,
    pub y: Coord,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedGrid {
    pub size: usize,
    pub cells: Vec<Cell>,
}

impl RenderedGrid {
    /// The cell at (x, y), or None outside the grid.
    pub fn cell(&self, x: Coord, y: Coord) -> Option<&Cell> {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return None;
        };
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get(y * self.size + x)
    }

    pub fn marked_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.content.is_marked())
    }

    /// Cells grouped row by row, top to bottom. A zero-sized grid has no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }
}

/// Render the grid for an optional player position and optional treasure.
/// Absent inputs are valid and leave their marker off the grid.
pub fn render_grid<P, T>(position: Option<&P>, treasure: Option<&T>) -> RenderedGrid
where
    P: Located + ?Sized,
    T: Located + ?Sized,
{
    let player_at = position.map(|p| p.vec());
    let treasure_at = treasure.map(|t| t.vec());

    let cells = (0..CELL_COUNT)
        .map(|index| {
            let x = (index % GRID_SIZE) as Coord;
            let y = (index / GRID_SIZE) as Coord;
            let here = Vec2 { x, y };
            Cell {
                index,
                x,
                y,
                content: CellContent::from_flags(
                    player_at == Some(here),
                    treasure_at == Some(here),
                ),
            }
        })
        .collect();

    RenderedGrid {
        size: GRID_SIZE,
        cells,
    }
}
