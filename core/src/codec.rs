//! Ordered wire codec.
//!
//! The world exchanges a model instance as a flat list of field values in
//! the model's FIELD_ORDER. Encoding picks fields out in that order; decoding
//! zips the list back against it. Struct declaration order plays no part.

use crate::{
    direction::Direction,
    error::{SchemaError, SchemaResult},
    model::{
        DirectionsAvailable, Entity, Model, Moves, PlayerSpawned, Position, TreasureFound,
        TreasurePosition,
    },
    registry::ModelKind,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One model instance as received from (or sent to) the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelUpdate {
    /// Model id, e.g. "dojo_starter-Position".
    pub model: String,
    /// Field values in canonical order.
    pub values: Vec<Value>,
}

pub fn encode_ordered(entity: &Entity) -> SchemaResult<Vec<Value>> {
    match entity {
        Entity::Moves(m)               => encode_model(m),
        Entity::DirectionsAvailable(d) => encode_model(d),
        Entity::Position(p)            => encode_model(p),
        Entity::TreasureFound(t)       => encode_model(t),
        Entity::TreasurePosition(t)    => encode_model(t),
        Entity::PlayerSpawned(p)       => encode_model(p),
    }
}

pub fn decode_ordered(kind: ModelKind, values: &[Value]) -> SchemaResult<Entity> {
    let entity = match kind {
        ModelKind::Moves => {
            // Guards the index below; decode_model checks again.
            check_len::<Moves>(values)?;
            check_direction(&values[2])?;
            decode_model::<Moves>(values)?.into()
        }
        ModelKind::DirectionsAvailable => {
            // Guards the index below; decode_model checks again.
            check_len::<DirectionsAvailable>(values)?;
            if let Value::Array(tokens) = &values[1] {
                tokens.iter().try_for_each(check_direction)?;
            }
            decode_model::<DirectionsAvailable>(values)?.into()
        }
        ModelKind::Position         => decode_model::<Position>(values)?.into(),
        ModelKind::TreasureFound    => decode_model::<TreasureFound>(values)?.into(),
        ModelKind::TreasurePosition => decode_model::<TreasurePosition>(values)?.into(),
        ModelKind::PlayerSpawned    => decode_model::<PlayerSpawned>(values)?.into(),
    };
    Ok(entity)
}

fn encode_model<M: Model>(model: &M) -> SchemaResult<Vec<Value>> {
    let mut fields = match serde_json::to_value(model)? {
        Value::Object(map) => map,
        other => {
            return Err(anyhow::anyhow!(
                "{} did not serialize to an object: {other}",
                M::TYPE_NAME
            )
            .into())
        }
    };
    M::FIELD_ORDER
        .iter()
        .map(|name| -> SchemaResult<Value> {
            fields
                .remove(*name)
                .ok_or_else(|| anyhow::anyhow!("{} has no field '{name}'", M::TYPE_NAME).into())
        })
        .collect()
}

fn decode_model<M: Model>(values: &[Value]) -> SchemaResult<M> {
    check_len::<M>(values)?;
    let fields: Map<String, Value> = M::FIELD_ORDER
        .iter()
        .zip(values)
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    Ok(serde_json::from_value(Value::Object(fields))?)
}

fn check_len<M: Model>(values: &[Value]) -> SchemaResult<()> {
    if values.len() != M::FIELD_ORDER.len() {
        return Err(SchemaError::FieldCountMismatch {
            model: M::TYPE_NAME,
            expected: M::FIELD_ORDER.len(),
            actual: values.len(),
        });
    }
    Ok(())
}

// Surfaces a bad token or tag as InvalidEnumValue rather than a generic
// serde error. Other value types are left for serde to reject.
fn check_direction(value: &Value) -> SchemaResult<()> {
    match value {
        Value::String(token) => Direction::from_token(token).map(|_| ()),
        Value::Number(tag) => Direction::from_token(&tag.to_string()).map(|_| ()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vec2;
    use serde_json::json;

    #[test]
    fn moves_encode_in_field_order() {
        let moves = Entity::Moves(Moves {
            player: "0xabc".into(),
            remaining: 7,
            last_direction: Direction::Left,
            can_move: true,
        });
        let values = encode_ordered(&moves).unwrap();
        assert_eq!(values, vec![json!("0xabc"), json!(7), json!("1"), json!(true)]);
    }

    #[test]
    fn treasure_found_nests_vec_as_object() {
        let found = Entity::TreasureFound(TreasureFound {
            player: "0x1".into(),
            timestamp: 1_700_000_000,
            treasure_position: Vec2::new(4, 9),
        });
        let values = encode_ordered(&found).unwrap();
        assert_eq!(values[2], json!({ "x": 4, "y": 9 }));
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        let err = decode_ordered(ModelKind::Position, &[json!("0x1")]).unwrap_err();
        match err {
            SchemaError::FieldCountMismatch { model, expected, actual } => {
                assert_eq!(model, "Position");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected FieldCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn short_direction_models_fail_before_indexing() {
        let err = decode_ordered(ModelKind::Moves, &[json!("0x1"), json!(3)]).unwrap_err();
        assert!(matches!(err, SchemaError::FieldCountMismatch { actual: 2, .. }), "Got {err:?}");

        let err = decode_ordered(ModelKind::DirectionsAvailable, &[json!("0x1")]).unwrap_err();
        assert!(matches!(err, SchemaError::FieldCountMismatch { actual: 1, .. }), "Got {err:?}");
    }

    #[test]
    fn decode_surfaces_bad_direction_token() {
        let values = [json!("0x1"), json!(["1", "7"])];
        let err = decode_ordered(ModelKind::DirectionsAvailable, &values).unwrap_err();
        assert!(
            matches!(err, SchemaError::InvalidEnumValue { ref token } if token == "7"),
            "Got {err:?}"
        );
    }

    #[test]
    fn decode_rejects_malformed_values() {
        let values = [json!("0x1"), json!("not a vec")];
        let err = decode_ordered(ModelKind::Position, &values).unwrap_err();
        assert!(matches!(err, SchemaError::Serialization(_)), "Got {err:?}");
    }
}
