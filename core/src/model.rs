//! The dojo_starter world models.
//!
//! RULE: every model declares FIELD_ORDER explicitly. That order is the wire
//! contract with the world and is never derived from struct layout.
//! Fields are added at the end only, never removed or reordered.

use crate::{
    direction::Direction,
    types::{Coord, PlayerId, Timestamp},
};
use serde::{Deserialize, Serialize};

/// A grid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: Coord,
    pub y: Coord,
}

impl Vec2 {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

/// Static description shared by every model type.
pub trait Model: Default + Serialize + for<'de> Deserialize<'de> {
    /// Type name, the suffix of the model id.
    const TYPE_NAME: &'static str;

    /// Canonical field order on the wire.
    const FIELD_ORDER: &'static [&'static str];
}

/// Anything that sits on the grid at a coordinate.
pub trait Located {
    fn vec(&self) -> Vec2;
}

impl Located for Vec2 {
    fn vec(&self) -> Vec2 {
        *self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moves {
    pub player: PlayerId,
    pub remaining: u8,
    pub last_direction: Direction,
    pub can_move: bool,
}

impl Model for Moves {
    const TYPE_NAME: &'static str = "Moves";
    const FIELD_ORDER: &'static [&'static str] =
        &["player", "remaining", "last_direction", "can_move"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsAvailable {
    pub player: PlayerId,
    pub directions: Vec<Direction>,
}

impl Model for DirectionsAvailable {
    const TYPE_NAME: &'static str = "DirectionsAvailable";
    const FIELD_ORDER: &'static [&'static str] = &["player", "directions"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub player: PlayerId,
    pub vec: Vec2,
}

impl Model for Position {
    const TYPE_NAME: &'static str = "Position";
    const FIELD_ORDER: &'static [&'static str] = &["player", "vec"];
}

impl Located for Position {
    fn vec(&self) -> Vec2 {
        self.vec
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpawned {
    pub player: PlayerId,
    pub timestamp: Timestamp,
}

impl Model for PlayerSpawned {
    const TYPE_NAME: &'static str = "PlayerSpawned";
    const FIELD_ORDER: &'static [&'static str] = &["player", "timestamp"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureFound {
    pub player: PlayerId,
    pub timestamp: Timestamp,
    pub treasure_position: Vec2,
}

impl Model for TreasureFound {
    const TYPE_NAME: &'static str = "TreasureFound";
    const FIELD_ORDER: &'static [&'static str] = &["player", "timestamp", "treasure_position"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasurePosition {
    pub player: PlayerId,
    pub vec: Vec2,
    pub example: u32,
}

// Not derived: `example` starts at 1, not 0.
impl Default for TreasurePosition {
    fn default() -> Self {
        Self {
            player: PlayerId::new(),
            vec: Vec2::default(),
            example: 1,
        }
    }
}

impl Model for TreasurePosition {
    const TYPE_NAME: &'static str = "TreasurePosition";
    const FIELD_ORDER: &'static [&'static str] = &["player", "vec", "example"];
}

impl Located for TreasurePosition {
    fn vec(&self) -> Vec2 {
        self.vec
    }
}

/// One model instance of any type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    Moves(Moves),
    DirectionsAvailable(DirectionsAvailable),
    Position(Position),
    TreasureFound(TreasureFound),
    TreasurePosition(TreasurePosition),
    PlayerSpawned(PlayerSpawned),
}

impl Entity {
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Moves(_)               => Moves::TYPE_NAME,
            Entity::DirectionsAvailable(_) => DirectionsAvailable::TYPE_NAME,
            Entity::Position(_)            => Position::TYPE_NAME,
            Entity::TreasureFound(_)       => TreasureFound::TYPE_NAME,
            Entity::TreasurePosition(_)    => TreasurePosition::TYPE_NAME,
            Entity::PlayerSpawned(_)       => PlayerSpawned::TYPE_NAME,
        }
    }

    pub fn player(&self) -> &str {
        match self {
            Entity::Moves(m)               => &m.player,
            Entity::DirectionsAvailable(d) => &d.player,
            Entity::Position(p)            => &p.player,
            Entity::TreasureFound(t)       => &t.player,
            Entity::TreasurePosition(t)    => &t.player,
            Entity::PlayerSpawned(p)       => &p.player,
        }
    }

    pub fn field_order(&self) -> &'static [&'static str] {
        match self {
            Entity::Moves(_)               => Moves::FIELD_ORDER,
            Entity::DirectionsAvailable(_) => DirectionsAvailable::FIELD_ORDER,
            Entity::Position(_)            => Position::FIELD_ORDER,
            Entity::TreasureFound(_)       => TreasureFound::FIELD_ORDER,
            Entity::TreasurePosition(_)    => TreasurePosition::FIELD_ORDER,
            Entity::PlayerSpawned(_)       => PlayerSpawned::FIELD_ORDER,
        }
    }
}

macro_rules! entity_from {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(model: $ty) -> Self {
                    Entity::$ty(model)
                }
            }
        )*
    };
}

entity_from!(
    Moves,
    DirectionsAvailable,
    Position,
    TreasureFound,
    TreasurePosition,
    PlayerSpawned,
);
