//! Named subsets of points, primitives, and edges.

mod error;
pub use error::*;

use std::{collections::HashMap, str::FromStr};

/// The element domain a [Group] selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Points,
    Primitives,
    Edges,
}

impl GroupKind {
    /// Parse a group kind name as written by geometry authoring tools.
    ///
    /// # Errors
    ///
    /// * [`InvalidKind`](GroupError::InvalidKind) for anything other than the names below
    pub fn from_name(name: &str) -> Result<Self, GroupError> {
        match name {
            "points" | "pointgroups" => Ok(Self::Points),
            "primitives" | "primitivegroups" => Ok(Self::Primitives),
            "edges" | "edgegroups" => Ok(Self::Edges),
            _ => Err(GroupError::InvalidKind(name.to_owned())),
        }
    }
}

impl FromStr for GroupKind {
    type Err = GroupError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKind::Points => f.write_str("point"),
            GroupKind::Primitives => f.write_str("primitive"),
            GroupKind::Edges => f.write_str("edge"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointGroup {
    /// Point indices
    pub ids: Vec<u32>,
    /// Vertex indices selected alongside the points
    pub vert_ids: Vec<u32>,
}

impl PointGroup {
    #[inline]
    pub fn contains(&self, point: u32) -> bool {
        self.ids.contains(&point)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimitiveGroup {
    /// Primitive ids
    pub ids: Vec<u32>,
}

impl PrimitiveGroup {
    #[inline]
    pub fn contains(&self, primitive: u32) -> bool {
        self.ids.contains(&primitive)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeGroup {
    /// Edges as pairs of point indices
    pub point_pairs: Vec<[u32; 2]>,
}

impl EdgeGroup {
    /// Whether the edge between `a` and `b` is selected, in either direction.
    pub fn contains(&self, a: u32, b: u32) -> bool {
        self.point_pairs
            .iter()
            .any(|&[p, q]| (p == a && q == b) || (p == b && q == a))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    Points(PointGroup),
    Primitives(PrimitiveGroup),
    Edges(EdgeGroup),
}

impl Group {
    /// An empty group of the given kind.
    pub fn empty(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Points => Self::Points(PointGroup::default()),
            GroupKind::Primitives => Self::Primitives(PrimitiveGroup::default()),
            GroupKind::Edges => Self::Edges(EdgeGroup::default()),
        }
    }

    #[inline]
    pub fn kind(&self) -> GroupKind {
        match self {
            Group::Points(_) => GroupKind::Points,
            Group::Primitives(_) => GroupKind::Primitives,
            Group::Edges(_) => GroupKind::Edges,
        }
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize {
        match self {
            Group::Points(g) => g.ids.len(),
            Group::Primitives(g) => g.ids.len(),
            Group::Edges(g) => g.point_pairs.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The concrete group types, for statically-typed access through a [GroupIndex].
pub trait GroupVariant: Sized {
    const KIND: GroupKind;
    fn from_group(group: &Group) -> Option<&Self>;
    fn from_group_mut(group: &mut Group) -> Option<&mut Self>;
}

macro_rules! impl_variant {
    ($Target:ty => $kind:ident) => {
        impl GroupVariant for $Target {
            const KIND: GroupKind = GroupKind::$kind;
            #[inline]
            fn from_group(group: &Group) -> Option<&Self> {
                match group {
                    Group::$kind(g) => Some(g),
                    _ => None,
                }
            }
            #[inline]
            fn from_group_mut(group: &mut Group) -> Option<&mut Self> {
                match group {
                    Group::$kind(g) => Some(g),
                    _ => None,
                }
            }
        }
    };
}

impl_variant!(PointGroup => Points);
impl_variant!(PrimitiveGroup => Primitives);
impl_variant!(EdgeGroup => Edges);

/// The named groups of a document. Names are unique within a kind; the same name may be used
/// once per kind.
///
/// Iteration yields groups in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupIndex {
    groups: Vec<(String, Group)>,
    lookup: HashMap<(GroupKind, String), usize>,
}

impl GroupIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    fn index_of(&self, name: &str, kind: GroupKind) -> Option<usize> {
        self.lookup.get(&(kind, name.to_owned())).copied()
    }

    /// Register `group` under `name`, returning the group it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, group: Group) -> Option<Group> {
        let name = name.into();
        match self.index_of(&name, group.kind()) {
            Some(i) => Some(std::mem::replace(&mut self.groups[i].1, group)),
            None => {
                self.lookup
                    .insert((group.kind(), name.clone()), self.groups.len());
                self.groups.push((name, group));
                None
            }
        }
    }

    /// # Errors
    ///
    /// * [`NotFound`](GroupError::NotFound) if there's no `kind` group named `name`
    pub fn get(&self, name: &str, kind: GroupKind) -> Result<&Group, GroupError> {
        self.index_of(name, kind)
            .map(|i| &self.groups[i].1)
            .ok_or_else(|| GroupError::NotFound {
                name: name.to_owned(),
                kind,
            })
    }

    /// # Errors
    ///
    /// * [`NotFound`](GroupError::NotFound) if there's no `kind` group named `name`
    pub fn get_mut(&mut self, name: &str, kind: GroupKind) -> Result<&mut Group, GroupError> {
        match self.index_of(name, kind) {
            Some(i) => Ok(&mut self.groups[i].1),
            None => Err(GroupError::NotFound {
                name: name.to_owned(),
                kind,
            }),
        }
    }

    /// Get the `kind` group named `name`, registering an empty one first if there is none.
    pub fn get_or_create(&mut self, name: &str, kind: GroupKind) -> &mut Group {
        let i = match self.index_of(name, kind) {
            Some(i) => i,
            None => {
                tracing::debug!(name, %kind, "creating group");
                self.insert(name, Group::empty(kind));
                self.groups.len() - 1
            }
        };
        &mut self.groups[i].1
    }

    /// Statically-typed [get](GroupIndex::get).
    ///
    /// # Errors
    ///
    /// * [`KindMismatch`](GroupError::KindMismatch) if `G` is not the group type for `kind`
    /// * [`NotFound`](GroupError::NotFound) if there's no `kind` group named `name`
    pub fn get_as<G: GroupVariant>(&self, name: &str, kind: GroupKind) -> Result<&G, GroupError> {
        check_kind::<G>(name, kind)?;
        let group = self.get(name, kind)?;
        G::from_group(group).ok_or_else(|| mismatch::<G>(name, group.kind()))
    }

    /// Statically-typed [get_or_create](GroupIndex::get_or_create).
    ///
    /// # Errors
    ///
    /// * [`KindMismatch`](GroupError::KindMismatch) if `G` is not the group type for `kind`;
    ///   nothing is created in that case
    pub fn get_or_create_as<G: GroupVariant>(
        &mut self,
        name: &str,
        kind: GroupKind,
    ) -> Result<&mut G, GroupError> {
        check_kind::<G>(name, kind)?;
        let group = self.get_or_create(name, kind);
        let actual = group.kind();
        G::from_group_mut(group).ok_or_else(|| mismatch::<G>(name, actual))
    }

    /// Unregister the `kind` group named `name`.
    pub fn remove(&mut self, name: &str, kind: GroupKind) -> Option<Group> {
        let i = self.lookup.remove(&(kind, name.to_owned()))?;
        let (_, group) = self.groups.remove(i);
        for index in self.lookup.values_mut() {
            if *index > i {
                *index -= 1;
            }
        }
        Some(group)
    }

    /// Names of every group of `kind`, in registration order.
    pub fn names(&self, kind: GroupKind) -> impl Iterator<Item = &str> + '_ {
        self.groups
            .iter()
            .filter(move |(_, g)| g.kind() == kind)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Group)> + '_ {
        self.groups.iter().map(|(name, g)| (name.as_str(), g))
    }
}

#[inline]
fn mismatch<G: GroupVariant>(name: &str, actual: GroupKind) -> GroupError {
    GroupError::KindMismatch {
        name: name.to_owned(),
        requested: G::KIND,
        actual,
    }
}

#[inline]
fn check_kind<G: GroupVariant>(name: &str, kind: GroupKind) -> Result<(), GroupError> {
    if G::KIND != kind {
        return Err(mismatch::<G>(name, kind));
    }
    Ok(())
}
