use std::any::TypeId;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A boxed value handed over by the editor is outside the field value set.
    #[error("unsupported field value type: {type_id:?}")]
    UnsupportedValueType { type_id: TypeId },
    #[error("unknown field kind: {0}")]
    UnknownFieldKind(String),
    #[error("invalid decimal literal: {0}")]
    InvalidDecimal(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
