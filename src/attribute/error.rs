use crate::attribute::ValueType;

/// Errors related to decoding and constructing [Attributes](crate::Attribute).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("Attribute {name:?} holds {found} values; cannot decode it as {expected}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },
    #[error("Unrecognized attribute value type: {0:?}")]
    UnrecognizedValueType(String),
    #[error("Attribute {name:?} expects {tuple_size}-wide tuples; got {len} values")]
    RaggedValues {
        name: String,
        tuple_size: usize,
        len: usize,
    },
}
