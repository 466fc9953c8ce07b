//! Schema registry — the lookup table for every model the client knows.
//!
//! RULE: the registry is built once and never mutated. Callers hold it by
//! reference (or behind an Arc); there is no global instance.
//!
//! Model ids have the form "<namespace>-<TypeName>" and are the addressing
//! key used to request or subscribe to instances in the world.

use crate::{
    codec::{self, ModelUpdate},
    error::{SchemaError, SchemaResult},
    model::{
        DirectionsAvailable, Entity, Model, Moves, PlayerSpawned, Position, TreasureFound,
        TreasurePosition,
    },
    types::DEFAULT_NAMESPACE,
};
use serde::{Deserialize, Serialize};

/// Every model type in the world. Variants are never removed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Moves,
    DirectionsAvailable,
    Position,
    TreasureFound,
    TreasurePosition,
    PlayerSpawned,
}

impl ModelKind {
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Moves,
        ModelKind::DirectionsAvailable,
        ModelKind::Position,
        ModelKind::TreasureFound,
        ModelKind::TreasurePosition,
        ModelKind::PlayerSpawned,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Moves               => Moves::TYPE_NAME,
            Self::DirectionsAvailable => DirectionsAvailable::TYPE_NAME,
            Self::Position            => Position::TYPE_NAME,
            Self::TreasureFound       => TreasureFound::TYPE_NAME,
            Self::TreasurePosition    => TreasurePosition::TYPE_NAME,
            Self::PlayerSpawned       => PlayerSpawned::TYPE_NAME,
        }
    }

    pub fn field_order(&self) -> &'static [&'static str] {
        match self {
            Self::Moves               => Moves::FIELD_ORDER,
            Self::DirectionsAvailable => DirectionsAvailable::FIELD_ORDER,
            Self::Position            => Position::FIELD_ORDER,
            Self::TreasureFound       => TreasureFound::FIELD_ORDER,
            Self::TreasurePosition    => TreasurePosition::FIELD_ORDER,
            Self::PlayerSpawned       => PlayerSpawned::FIELD_ORDER,
        }
    }

    /// The zero-value placeholder shown before real data arrives.
    pub fn default_entity(&self) -> Entity {
        match self {
            Self::Moves               => Moves::default().into(),
            Self::DirectionsAvailable => DirectionsAvailable::default().into(),
            Self::Position            => Position::default().into(),
            Self::TreasureFound       => TreasureFound::default().into(),
            Self::TreasurePosition    => TreasurePosition::default().into(),
            Self::PlayerSpawned       => PlayerSpawned::default().into(),
        }
    }

    pub fn from_type_name(name: &str) -> SchemaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == name)
            .ok_or_else(|| SchemaError::UnknownType {
                name: name.to_string(),
            })
    }

    pub fn of(entity: &Entity) -> Self {
        match entity {
            Entity::Moves(_)               => Self::Moves,
            Entity::DirectionsAvailable(_) => Self::DirectionsAvailable,
            Entity::Position(_)            => Self::Position,
            Entity::TreasureFound(_)       => Self::TreasureFound,
            Entity::TreasurePosition(_)    => Self::TreasurePosition,
            Entity::PlayerSpawned(_)       => Self::PlayerSpawned,
        }
    }
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    kind: ModelKind,
    model_id: String,
}

#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    namespace: String,
    entries: Vec<RegistryEntry>,
}

impl SchemaRegistry {
    /// Registry for the dojo_starter namespace.
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(namespace: &str) -> Self {
        let entries = ModelKind::ALL
            .into_iter()
            .map(|kind| RegistryEntry {
                kind,
                model_id: format!("{namespace}-{}", kind.type_name()),
            })
            .collect();
        log::debug!("Schema registry built for namespace '{namespace}'");
        Self {
            namespace: namespace.to_string(),
            entries,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn get_default(&self, type_name: &str) -> SchemaResult<Entity> {
        Ok(self.entry(type_name)?.kind.default_entity())
    }

    pub fn get_field_order(&self, type_name: &str) -> SchemaResult<&'static [&'static str]> {
        Ok(self.entry(type_name)?.kind.field_order())
    }

    pub fn get_model_id(&self, type_name: &str) -> SchemaResult<&str> {
        Ok(&self.entry(type_name)?.model_id)
    }

    /// Reverse lookup from a model id to its kind.
    pub fn kind_for_model_id(&self, model_id: &str) -> SchemaResult<ModelKind> {
        self.entries
            .iter()
            .find(|e| e.model_id == model_id)
            .map(|e| e.kind)
            .ok_or_else(|| SchemaError::UnknownModelId {
                model_id: model_id.to_string(),
            })
    }

    /// All model ids, in registration order.
    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.model_id.as_str())
    }

    /// Decode one update received from the world.
    pub fn decode_update(&self, update: &ModelUpdate) -> SchemaResult<Entity> {
        let kind = self.kind_for_model_id(&update.model)?;
        codec::decode_ordered(kind, &update.values)
    }

    /// Encode an entity into the update form the world exchanges.
    pub fn encode_update(&self, entity: &Entity) -> SchemaResult<ModelUpdate> {
        let model = self.get_model_id(entity.type_name())?.to_string();
        Ok(ModelUpdate {
            model,
            values: codec::encode_ordered(entity)?,
        })
    }

    fn entry(&self, type_name: &str) -> SchemaResult<&RegistryEntry> {
        self.entries
            .iter()
            .find(|e| e.kind.type_name() == type_name)
            .ok_or_else(|| SchemaError::UnknownType {
                name: type_name.to_string(),
            })
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
