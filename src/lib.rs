//! Conversion of procedurally-authored geometry (points, vertices, primitives, and the named,
//! typed attributes and groups attached to them) into indexed render meshes.
//!
//! A [GeometryDocument] is populated by a file reader; [assemble] turns it into
//! [MeshBuffers](prismatic_mesh::MeshBuffers): one entry per flattened polygon vertex, with
//! triangle indices partitioned into one [Submesh](prismatic_mesh::Submesh) per material.
//!
//! Source data is right-handed; output is mirrored across the XY plane. See [assemble] for the
//! exact steps.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod assemble;
pub mod attribute;
pub mod config;
pub mod document;
pub mod error;
pub mod group;
pub mod resolve;

pub use assemble::{assemble, Assembly, AssemblyError, Diagnostic, MeshAssembler};
pub use attribute::{
    Attribute, AttributeElement, AttributeError, AttributeValues, ElementKind, Owner, ValueType,
};
pub use config::{AssemblyOptions, ChannelNames, EmptyGeometry};
pub use document::{
    BezierCurve, DocumentError, DocumentParts, FileInfo, GeometryDocument, NurbCurve, Poly,
    Primitive,
};
pub use error::Error;
pub use group::{
    EdgeGroup, Group, GroupError, GroupIndex, GroupKind, GroupVariant, PointGroup, PrimitiveGroup,
};
pub use resolve::{AttributeResolver, Channel, ResolveError};

pub use prismatic_mesh as mesh;
