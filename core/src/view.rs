//! Grid view — holds the latest render inputs and re-renders on change.
//!
//! The view only cares about Position and TreasurePosition. Every other
//! model passes through untouched. Rendering itself stays pure; the view
//! just remembers what to feed it.

use crate::{
    grid::{render_grid, RenderedGrid},
    model::{Entity, Position, TreasurePosition},
    types::PlayerId,
};

#[derive(Debug, Clone, Default)]
pub struct GridView {
    player_filter: Option<PlayerId>,
    position: Option<Position>,
    treasure: Option<TreasurePosition>,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore updates for any player other than `player`.
    pub fn for_player(player: impl Into<PlayerId>) -> Self {
        Self {
            player_filter: Some(player.into()),
            ..Self::default()
        }
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn treasure(&self) -> Option<&TreasurePosition> {
        self.treasure.as_ref()
    }

    /// Store an entity if it is a render input.
    /// Returns true when the grid needs re-rendering.
    pub fn apply(&mut self, entity: &Entity) -> bool {
        if let Some(filter) = &self.player_filter {
            if entity.player() != filter.as_str() {
                log::debug!(
                    "Skipping {} for player {} (tracking {filter})",
                    entity.type_name(),
                    entity.player()
                );
                return false;
            }
        }

        match entity {
            Entity::Position(p) => replace_if_changed(&mut self.position, p),
            Entity::TreasurePosition(t) => replace_if_changed(&mut self.treasure, t),
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.position = None;
        self.treasure = None;
    }

    pub fn render(&self) -> RenderedGrid {
        render_grid(self.position.as_ref(), self.treasure.as_ref())
    }
}

fn replace_if_changed<T: Clone + PartialEq>(slot: &mut Option<T>, incoming: &T) -> bool {
    if slot.as_ref() == Some(incoming) {
        return false;
    }
    *slot = Some(incoming.clone());
    true
}
