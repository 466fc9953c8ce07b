use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Unknown model type '{name}'")]
    UnknownType { name: String },

    #[error("Unknown model id '{model_id}'")]
    UnknownModelId { model_id: String },

    #[error("Invalid Direction token '{token}'")]
    InvalidEnumValue { token: String },

    #[error("Field count mismatch for {model}: expected {expected}, got {actual}")]
    FieldCountMismatch {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;
