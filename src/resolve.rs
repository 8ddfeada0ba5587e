//! Owner-aware lookup of attribute values for individual vertices.

use crate::{
    attribute::{Attribute, AttributeElement, AttributeError, Owner},
    GeometryDocument,
};

/// Errors related to resolving attribute values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Attribute {name:?} ({owner}) has {len} elements; index {index} is out of range")]
    BoundsViolation {
        name: String,
        owner: Owner,
        index: u32,
        len: usize,
    },
    #[error("Vertex {vertex} does not exist; the document has {count} vertices")]
    NoSuchVertex { vertex: u32, count: usize },
}

/// An attribute decoded into elements of `T`, remembering which domain it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel<T> {
    name: String,
    owner: Owner,
    values: Vec<T>,
}

impl<T: AttributeElement> Channel<T> {
    /// Decode `attr` as a channel of `T`.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if `attr` does not hold float values
    pub fn decode(attr: &Attribute) -> Result<Self, AttributeError> {
        Ok(Self {
            name: attr.name().to_owned(),
            owner: attr.owner(),
            values: attr.try_decode()?,
        })
    }
}

impl<T> Channel<T> {
    pub fn new(name: impl Into<String>, owner: Owner, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            owner,
            values,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Copy> Channel<T> {
    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// * [`BoundsViolation`](ResolveError::BoundsViolation) if `index` is out of range
    pub fn get(&self, index: u32) -> Result<T, ResolveError> {
        self.values
            .get(index as usize)
            .copied()
            .ok_or_else(|| ResolveError::BoundsViolation {
                name: self.name.clone(),
                owner: self.owner,
                index,
                len: self.values.len(),
            })
    }
}

/// Resolves attribute values against the vertex → point references of a document.
#[derive(Debug, Clone, Copy)]
pub struct AttributeResolver<'doc> {
    doc: &'doc GeometryDocument,
}

impl<'doc> AttributeResolver<'doc> {
    #[inline]
    pub fn new(doc: &'doc GeometryDocument) -> Self {
        Self { doc }
    }

    #[inline]
    pub fn document(&self) -> &'doc GeometryDocument {
        self.doc
    }

    /// The point referenced by `vertex`.
    ///
    /// # Errors
    ///
    /// * [`NoSuchVertex`](ResolveError::NoSuchVertex) if `vertex` is out of range
    pub fn point_of(&self, vertex: u32) -> Result<u32, ResolveError> {
        self.doc
            .point_of(vertex)
            .ok_or_else(|| ResolveError::NoSuchVertex {
                vertex,
                count: self.doc.vertex_count(),
            })
    }

    /// The value of `channel` at a vertex.
    ///
    /// * Vertex channels are indexed by `vertex`
    /// * Point channels are indexed by `point`, the point `vertex` references
    /// * Primitive and detail channels, and absent channels, yield `default` without indexing;
    ///   see [primitive_value](Self::primitive_value) and [detail_value](Self::detail_value)
    ///
    /// # Errors
    ///
    /// * [`BoundsViolation`](ResolveError::BoundsViolation) if the index is outside the channel;
    ///   this indicates a malformed document and is never clamped
    pub fn value_at<T: Copy>(
        &self,
        channel: Option<&Channel<T>>,
        vertex: u32,
        point: u32,
        default: T,
    ) -> Result<T, ResolveError> {
        match channel {
            Some(c) if c.owner == Owner::Vertex => c.get(vertex),
            Some(c) if c.owner == Owner::Point => c.get(point),
            _ => Ok(default),
        }
    }

    /// As [value_at](Self::value_at), looking up the referenced point of `vertex` itself.
    pub fn value_at_vertex<T: Copy>(
        &self,
        channel: Option<&Channel<T>>,
        vertex: u32,
        default: T,
    ) -> Result<T, ResolveError> {
        let point = self.point_of(vertex)?;
        self.value_at(channel, vertex, point, default)
    }

    /// The value of a primitive channel for the primitive `id`, or `None` if `channel` is not
    /// owned by primitives.
    pub fn primitive_value<T: Copy>(
        &self,
        channel: &Channel<T>,
        id: u32,
    ) -> Result<Option<T>, ResolveError> {
        match channel.owner {
            Owner::Primitive => channel.get(id).map(Some),
            _ => Ok(None),
        }
    }

    /// The single value of a detail channel, or `None` if `channel` is not owned by the detail.
    pub fn detail_value<T: Copy>(&self, channel: &Channel<T>) -> Result<Option<T>, ResolveError> {
        match channel.owner {
            Owner::Detail => channel.get(0).map(Some),
            _ => Ok(None),
        }
    }

    /// Find `name` on any owner and decode it as a channel of `T`.
    ///
    /// Returns `None` if there's no such attribute.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if it does not hold float values
    pub fn channel<T: AttributeElement>(
        &self,
        name: &str,
    ) -> Result<Option<Channel<T>>, AttributeError> {
        self.doc
            .attribute(name, None)
            .map(Channel::decode)
            .transpose()
    }
}
