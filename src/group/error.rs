use crate::group::GroupKind;

/// Errors related to [GroupIndex](crate::GroupIndex) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("No {kind} group named {name:?}")]
    NotFound { name: String, kind: GroupKind },
    #[error("Requested {requested} group {name:?} as a {actual} group")]
    KindMismatch {
        name: String,
        requested: GroupKind,
        actual: GroupKind,
    },
    #[error("Invalid group kind: {0:?}")]
    InvalidKind(String),
}
