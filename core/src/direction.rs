//! Movement direction, as stored on chain.
//!
//! The world encodes a direction as a small integer tag. On the client side
//! the tag travels as a decimal string token ("0".."4"); the bare integer is
//! accepted on decode as well. Decoding rejects anything outside the five
//! known variants.

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DirectionTag", into = "String")]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All variants, in tag order. Never reordered.
    pub const ALL: [Direction; 5] = [
        Direction::None,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::None  => "0",
            Self::Left  => "1",
            Self::Right => "2",
            Self::Up    => "3",
            Self::Down  => "4",
        }
    }

    pub fn from_token(token: &str) -> SchemaResult<Self> {
        match token {
            "0" => Ok(Self::None),
            "1" => Ok(Self::Left),
            "2" => Ok(Self::Right),
            "3" => Ok(Self::Up),
            "4" => Ok(Self::Down),
            other => Err(SchemaError::InvalidEnumValue {
                token: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None  => "None",
            Self::Left  => "Left",
            Self::Right => "Right",
            Self::Up    => "Up",
            Self::Down  => "Down",
        }
    }
}

/// Either wire form of a direction: the string token or the raw tag.
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectionTag {
    Token(String),
    Tag(i64),
}

impl TryFrom<DirectionTag> for Direction {
    type Error = SchemaError;

    fn try_from(tag: DirectionTag) -> SchemaResult<Self> {
        match tag {
            DirectionTag::Token(token) => Self::from_token(&token),
            DirectionTag::Tag(n) => Self::from_token(&n.to_string()),
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.token().to_string()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_distinct() {
        let mut tokens: Vec<&str> = Direction::ALL.iter().map(|d| d.token()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 5, "Each variant needs its own token");
    }

    #[test]
    fn every_token_decodes_to_its_variant() {
        for direction in Direction::ALL {
            let decoded = Direction::from_token(direction.token()).unwrap();
            assert_eq!(decoded, direction, "Token {} decoded wrongly", direction.token());
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        for token in ["5", "-1", "", "Left", " 1"] {
            match Direction::from_token(token) {
                Err(SchemaError::InvalidEnumValue { token: t }) => assert_eq!(t, token),
                other => panic!("Expected InvalidEnumValue for {token:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn serializes_as_token_string() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(json, "\"3\"");

        let back: Direction = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(back, Direction::Right);

        assert!(serde_json::from_str::<Direction>("\"9\"").is_err());
    }

    #[test]
    fn deserializes_from_integer_tag() {
        let back: Direction = serde_json::from_str("4").unwrap();
        assert_eq!(back, Direction::Down);

        assert!(serde_json::from_str::<Direction>("7").is_err());
        assert!(serde_json::from_str::<Direction>("-1").is_err());
    }
}
