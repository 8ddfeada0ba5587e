//! The point / vertex / primitive graph of a procedurally-authored geometry.
//!
//! # Structure
//!
//! * points: positions (and any other point attributes); referenced by vertices
//! * vertices: each references exactly one point via [point_refs](GeometryDocument::point_refs);
//!   several vertices may share a point
//! * primitives: ordered lists of vertices; [Poly] faces carry precomputed triangles
//! * detail: the document itself, owning exactly one tuple of each detail attribute
//!
//! Attributes attach to one of these domains; see [Owner].

mod error;
mod info;
mod primitive;

pub use error::*;
pub use info::*;
pub use primitive::*;

use std::ops::Range;

use crate::{
    attribute::{Attribute, Owner},
    group::{Group, GroupIndex, GroupKind},
};

/// The pieces of a [GeometryDocument], as produced by a file reader.
#[derive(Debug, Clone, Default)]
pub struct DocumentParts {
    pub info: FileInfo,
    pub point_count: usize,
    /// The point referenced by each vertex
    pub point_refs: Vec<u32>,
    pub primitives: Vec<Primitive>,
    /// Attributes of every owner, in declaration order
    pub attributes: Vec<Attribute>,
    pub groups: GroupIndex,
}

/// A fully-populated geometry document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryDocument {
    info: FileInfo,
    point_count: usize,
    point_refs: Vec<u32>,
    primitives: Vec<Primitive>,
    attributes: Vec<Attribute>,
    groups: GroupIndex,
}

impl GeometryDocument {
    /// An empty document.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a document from its parts, checking every structural invariant.
    pub fn from_parts(parts: DocumentParts) -> Result<Self, DocumentError> {
        let res = Self {
            info: parts.info,
            point_count: parts.point_count,
            point_refs: parts.point_refs,
            primitives: parts.primitives,
            attributes: parts.attributes,
            groups: parts.groups,
        };
        res.validate()?;
        Ok(res)
    }

    /// Check the structural invariants of `self`.
    ///
    /// # Errors
    ///
    /// * [`PointOutOfRange`](DocumentError::PointOutOfRange) if a vertex references a missing point
    /// * [`PrimitiveId`](DocumentError::PrimitiveId) if primitive ids are not `0, 1, 2, ...`
    /// * [`VertexOutOfRange`](DocumentError::VertexOutOfRange) if a primitive references a
    ///   missing vertex
    /// * [`RaggedTriangles`](DocumentError::RaggedTriangles) if a [Poly]'s triangle list isn't a
    ///   whole number of triangles
    /// * [`AttributeLength`](DocumentError::AttributeLength) if an attribute's length doesn't match
    ///   its owner domain
    /// * [`DuplicateAttribute`](DocumentError::DuplicateAttribute) if a name is reused within an
    ///   owner domain
    /// * [`GroupMemberOutOfRange`](DocumentError::GroupMemberOutOfRange) if a group selects a
    ///   missing element
    pub fn validate(&self) -> Result<(), DocumentError> {
        for (vertex, &point) in self.point_refs.iter().enumerate() {
            self.check_point(vertex as u32, point)?;
        }
        for (index, prim) in self.primitives.iter().enumerate() {
            if prim.id() as usize != index {
                return Err(DocumentError::PrimitiveId {
                    index,
                    id: prim.id(),
                });
            }
            self.check_primitive(prim)?;
        }
        for (i, attr) in self.attributes.iter().enumerate() {
            self.check_length(attr)?;
            let duplicate = self.attributes[..i]
                .iter()
                .any(|a| a.owner() == attr.owner() && a.name() == attr.name());
            if duplicate {
                return Err(DocumentError::DuplicateAttribute {
                    name: attr.name().to_owned(),
                    owner: attr.owner(),
                });
            }
        }
        for (name, group) in self.groups.iter() {
            self.check_group(name, group)?;
        }
        Ok(())
    }

    fn check_point(&self, vertex: u32, point: u32) -> Result<(), DocumentError> {
        if point as usize >= self.point_count {
            return Err(DocumentError::PointOutOfRange {
                vertex,
                point,
                count: self.point_count,
            });
        }
        Ok(())
    }

    fn check_vertices(&self, primitive: u32, vertices: &[u32]) -> Result<(), DocumentError> {
        let count = self.vertex_count();
        match vertices.iter().find(|&&v| v as usize >= count) {
            Some(&vertex) => Err(DocumentError::VertexOutOfRange {
                primitive,
                vertex,
                count,
            }),
            None => Ok(()),
        }
    }

    fn check_primitive(&self, prim: &Primitive) -> Result<(), DocumentError> {
        self.check_vertices(prim.id(), prim.vertices())?;
        match prim.as_poly() {
            Some(poly) if poly.triangles.len() % 3 != 0 => Err(DocumentError::RaggedTriangles {
                primitive: poly.id,
                len: poly.triangles.len(),
            }),
            _ => Ok(()),
        }
    }

    fn check_length(&self, attr: &Attribute) -> Result<(), DocumentError> {
        let expected = self.element_count(attr.owner()) * attr.tuple_size();
        if attr.values().len() != expected {
            return Err(DocumentError::AttributeLength {
                name: attr.name().to_owned(),
                owner: attr.owner(),
                expected,
                found: attr.values().len(),
            });
        }
        Ok(())
    }

    fn check_group(&self, name: &str, group: &Group) -> Result<(), DocumentError> {
        let out_of_range = |kind: GroupKind, member: u32, count: usize| {
            Err(DocumentError::GroupMemberOutOfRange {
                group: name.to_owned(),
                kind,
                member,
                count,
            })
        };
        let kind = group.kind();
        match group {
            Group::Points(g) => {
                if let Some(&p) = g.ids.iter().find(|&&p| p as usize >= self.point_count) {
                    return out_of_range(kind, p, self.point_count);
                }
                let count = self.vertex_count();
                if let Some(&v) = g.vert_ids.iter().find(|&&v| v as usize >= count) {
                    return out_of_range(kind, v, count);
                }
            }
            Group::Primitives(g) => {
                let count = self.primitive_count();
                if let Some(&p) = g.ids.iter().find(|&&p| p as usize >= count) {
                    return out_of_range(kind, p, count);
                }
            }
            Group::Edges(g) => {
                let member = g
                    .point_pairs
                    .iter()
                    .flatten()
                    .find(|&&p| p as usize >= self.point_count);
                if let Some(&p) = member {
                    return out_of_range(kind, p, self.point_count);
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut FileInfo {
        &mut self.info
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.point_refs.len()
    }

    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Number of elements in the domain of `owner`.
    pub fn element_count(&self, owner: Owner) -> usize {
        match owner {
            Owner::Vertex => self.vertex_count(),
            Owner::Point => self.point_count(),
            Owner::Primitive => self.primitive_count(),
            Owner::Detail => 1,
        }
    }

    #[inline]
    pub fn point_refs(&self) -> &[u32] {
        &self.point_refs
    }

    /// The point referenced by `vertex`.
    #[inline]
    pub fn point_of(&self, vertex: u32) -> Option<u32> {
        self.point_refs.get(vertex as usize).copied()
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Every [Poly] primitive, in declaration order.
    pub fn polys(&self) -> impl Iterator<Item = &Poly> + '_ {
        self.primitives.iter().filter_map(Primitive::as_poly)
    }

    /// Attributes of every owner, in declaration order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Find an attribute by name.
    ///
    /// With `owner` unspecified, the first attribute named `name` in declaration order is returned,
    /// whichever domain it belongs to.
    pub fn attribute(&self, name: &str, owner: Option<Owner>) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name() == name && owner.map_or(true, |o| a.owner() == o))
    }

    /// Add an attribute after the existing ones.
    ///
    /// # Errors
    ///
    /// * [`DuplicateAttribute`](DocumentError::DuplicateAttribute) if the owner domain already has
    ///   an attribute with this name
    /// * [`AttributeLength`](DocumentError::AttributeLength) if `attr` doesn't hold exactly one
    ///   tuple per element of its owner domain
    pub fn add_attribute(&mut self, attr: Attribute) -> Result<(), DocumentError> {
        if self.attribute(attr.name(), Some(attr.owner())).is_some() {
            return Err(DocumentError::DuplicateAttribute {
                name: attr.name().to_owned(),
                owner: attr.owner(),
            });
        }
        self.check_length(&attr)?;
        self.attributes.push(attr);
        Ok(())
    }

    pub fn remove_attribute(&mut self, name: &str, owner: Owner) -> Option<Attribute> {
        let i = self
            .attributes
            .iter()
            .position(|a| a.name() == name && a.owner() == owner)?;
        Some(self.attributes.remove(i))
    }

    fn grow(&mut self, owner: Owner, count: usize) {
        for attr in self.attributes.iter_mut().filter(|a| a.owner() == owner) {
            attr.extend_default(count);
        }
    }

    /// Append `count` points, extending every point attribute with its default tuple.
    ///
    /// Returns the indices of the new points.
    pub fn add_points(&mut self, count: usize) -> Range<u32> {
        let start = self.point_count as u32;
        self.point_count += count;
        self.grow(Owner::Point, count);
        start..self.point_count as u32
    }

    /// Append one vertex per entry of `points`, each referencing that point, and extend every
    /// vertex attribute with its default tuple.
    ///
    /// Returns the indices of the new vertices.
    ///
    /// # Errors
    ///
    /// * [`PointOutOfRange`](DocumentError::PointOutOfRange) if any point doesn't exist; nothing
    ///   is added in that case
    pub fn add_vertices(&mut self, points: &[u32]) -> Result<Range<u32>, DocumentError> {
        let start = self.vertex_count() as u32;
        for (i, &point) in points.iter().enumerate() {
            self.check_point(start + i as u32, point)?;
        }
        self.point_refs.extend_from_slice(points);
        self.grow(Owner::Vertex, points.len());
        Ok(start..self.vertex_count() as u32)
    }

    /// Append a primitive, extending every primitive attribute with its default tuple.
    ///
    /// `make` receives the id the new primitive must carry.
    ///
    /// # Errors
    ///
    /// * [`PrimitiveId`](DocumentError::PrimitiveId) if the primitive doesn't carry the id it was
    ///   given
    /// * [`VertexOutOfRange`](DocumentError::VertexOutOfRange) if it references a missing vertex
    /// * [`RaggedTriangles`](DocumentError::RaggedTriangles) if it's a [Poly] whose triangle list
    ///   isn't a whole number of triangles
    pub fn push_primitive(
        &mut self,
        make: impl FnOnce(u32) -> Primitive,
    ) -> Result<u32, DocumentError> {
        let index = self.primitive_count();
        let prim = make(index as u32);
        if prim.id() as usize != index {
            return Err(DocumentError::PrimitiveId {
                index,
                id: prim.id(),
            });
        }
        self.check_primitive(&prim)?;
        self.primitives.push(prim);
        self.grow(Owner::Primitive, 1);
        Ok(index as u32)
    }

    /// Append a [Poly] over existing vertices.
    pub fn add_poly(&mut self, vertices: Vec<u32>, triangles: Vec<u32>) -> Result<u32, DocumentError> {
        self.push_primitive(|id| {
            Poly {
                id,
                vertices,
                triangles,
            }
            .into()
        })
    }

    #[inline]
    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }

    #[inline]
    pub fn groups_mut(&mut self) -> &mut GroupIndex {
        &mut self.groups
    }
}
