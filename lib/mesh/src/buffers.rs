use crate::{
    flip_normal, flip_position, flip_tangent, normals, Aabb, MeshError, Normal, Position, Rgba,
    Tangent, Texcoord, VertexChannel, UV_SET_COUNT,
};

/// A run of triangle indices rendered with a single material.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Submesh {
    pub material: String,
    /// Indices into the vertex arrays of the owning [MeshBuffers], three per triangle.
    pub triangles: Vec<u32>,
}

impl Submesh {
    #[inline]
    pub fn new(material: impl Into<String>, triangles: Vec<u32>) -> Self {
        Self {
            material: material.into(),
            triangles,
        }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn iter_triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

/// Vertex and index data ready to be handed to a GPU mesh object.
///
/// # Invariants
///
/// * every present per-vertex channel has `positions.len()` elements
/// * every submesh index is `< positions.len()`
///
/// Absent channels are `None`; they are never zero-filled stand-ins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    pub positions: Vec<Position>,
    pub normals: Option<Vec<Normal>>,
    pub tangents: Option<Vec<Tangent>>,
    pub colors: Option<Vec<Rgba>>,
    /// Texture coordinate sets; `uv_sets[0]` is the first set
    pub uv_sets: [Option<Vec<Texcoord>>; UV_SET_COUNT],
    /// Whether `normals` were computed from topology rather than read from the source
    pub normals_synthesized: bool,
    pub submeshes: Vec<Submesh>,
    pub bounds: Option<Aabb<f32>>,
}

impl MeshBuffers {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Total number of indices across all submeshes.
    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.triangles.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.submeshes.is_empty()
    }

    /// Get a texture coordinate set by its one-based number (`uv1` through `uv8`).
    pub fn uv_set(&self, set: usize) -> Result<Option<&[Texcoord]>, MeshError> {
        if set == 0 || set > UV_SET_COUNT {
            return Err(MeshError::NoSuchUvSet {
                set,
                max: UV_SET_COUNT,
            });
        }
        Ok(self.uv_sets[set - 1].as_deref())
    }

    /// Check the invariants listed on [MeshBuffers].
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.vertex_count();
        let check = |channel: VertexChannel, len: Option<usize>| match len {
            Some(len) if len != expected => Err(MeshError::ChannelLength {
                channel,
                len,
                expected,
            }),
            _ => Ok(()),
        };
        check(VertexChannel::Normal, self.normals.as_ref().map(Vec::len))?;
        check(VertexChannel::Tangent, self.tangents.as_ref().map(Vec::len))?;
        check(VertexChannel::Color, self.colors.as_ref().map(Vec::len))?;
        for (set, uvs) in self.uv_sets.iter().enumerate() {
            check(VertexChannel::Texcoord(set as u8), uvs.as_ref().map(Vec::len))?;
        }
        for sub in &self.submeshes {
            if let Some(&index) = sub.triangles.iter().find(|&&i| i as usize >= expected) {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    len: expected,
                });
            }
        }
        Ok(())
    }

    /// Reverse the index order of every submesh, flipping the winding of each triangle.
    pub fn reverse_winding(&mut self) {
        for sub in self.submeshes.iter_mut() {
            sub.triangles.reverse();
        }
    }

    /// Negate the Z component of every position, normal, and tangent, converting between
    /// right-handed and left-handed coordinate systems.
    ///
    /// Applying this twice restores the original data.
    pub fn flip_z(&mut self) {
        self.positions.iter_mut().for_each(flip_position);
        if let Some(normals) = self.normals.as_mut() {
            normals.iter_mut().for_each(flip_normal);
        }
        if let Some(tangents) = self.tangents.as_mut() {
            tangents.iter_mut().for_each(flip_tangent);
        }
        self.bounds = self.bounds.map(|b| b.flip_z());
    }

    /// Recompute [bounds](MeshBuffers::bounds) from the current positions.
    pub fn recompute_bounds(&mut self) -> Option<Aabb<f32>> {
        self.bounds = Aabb::from_points(&self.positions);
        self.bounds
    }

    /// Replace [normals](MeshBuffers::normals) with smooth normals derived from the submesh
    /// triangles.
    pub fn synthesize_normals(&mut self) -> Result<(), MeshError> {
        tracing::trace!(vertices = self.positions.len(), "synthesizing normals");
        let normals = normals::smooth_normals(
            &self.positions,
            self.submeshes.iter().map(|s| s.triangles.as_slice()),
        )?;
        self.normals = Some(normals);
        self.normals_synthesized = true;
        Ok(())
    }
}
