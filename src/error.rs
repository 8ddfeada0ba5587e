use prismatic_mesh::MeshError;

use crate::{AssemblyError, AttributeError, DocumentError, GroupError, ResolveError};

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Group(#[from] GroupError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
