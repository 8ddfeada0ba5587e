use crate::{attribute::Owner, group::GroupKind};

/// Errors related to [GeometryDocument](crate::GeometryDocument) structure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Attribute {name:?} ({owner}) should hold {expected} values; found {found}")]
    AttributeLength {
        name: String,
        owner: Owner,
        expected: usize,
        found: usize,
    },
    #[error("Attribute {name:?} already exists on the {owner} domain")]
    DuplicateAttribute { name: String, owner: Owner },
    #[error("Primitive {primitive} references vertex {vertex}, but there are only {count}")]
    VertexOutOfRange {
        primitive: u32,
        vertex: u32,
        count: usize,
    },
    #[error("Primitive {primitive} has {len} triangle indices, which is not a multiple of 3")]
    RaggedTriangles { primitive: u32, len: usize },
    #[error("Vertex {vertex} references point {point}, but there are only {count}")]
    PointOutOfRange { vertex: u32, point: u32, count: usize },
    #[error("Primitive at position {index} has id {id}; primitive ids must be dense and ordered")]
    PrimitiveId { index: usize, id: u32 },
    #[error("{kind} group {group:?} selects element {member}, but there are only {count}")]
    GroupMemberOutOfRange {
        group: String,
        kind: GroupKind,
        member: u32,
        count: usize,
    },
}
