use prismatic_mesh::MeshError;

use crate::{
    attribute::{AttributeError, Owner},
    resolve::ResolveError,
};

/// Errors which abort [assemble](crate::assemble).
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("Mesh would have {actual} vertices, exceeding the budget of {limit}")]
    VertexBudgetExceeded { actual: usize, limit: usize },
    #[error("Document has no polygon primitives")]
    NoRenderableGeometry,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("Primitive {primitive} has triangle index {index}, but only {count} vertices were flattened")]
    TriangleOutOfRange {
        primitive: u32,
        index: u32,
        count: usize,
    },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Anomalies [assemble](crate::assemble) recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("No position attribute {name:?}; positions are zero-filled")]
    MissingPosition { name: String },
    #[error("Position attribute {name:?} is owned by the {owner} domain; positions are zero-filled")]
    PositionOwner { name: String, owner: Owner },
    #[error("{0}; channel omitted")]
    TypeMismatch(AttributeError),
    #[error("Color has {color} elements but alpha has {alpha}; alpha dropped")]
    AlphaCountMismatch { color: usize, alpha: usize },
    #[error("No material attribute {name:?}; every primitive uses the default material")]
    DefaultMaterial { name: String },
    #[error("Document has no polygon primitives; produced an empty mesh")]
    NoRenderableGeometry,
}
