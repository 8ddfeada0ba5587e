//! Normal synthesis for meshes that were authored without them.

use crate::{MeshError, Normal, Position};

/// Compute smooth per-vertex normals from indexed triangle lists.
///
/// Each triangle contributes its unnormalized face normal (whose length is twice its area) to each
/// of its corners, so larger faces pull shared vertices harder. Vertices touched only by degenerate
/// triangles, or not touched at all, are left as the zero vector.
///
/// Winding is counter-clockwise: `(b - a) × (c - a)` points out of the front face.
pub fn smooth_normals<'t>(
    positions: &[Position],
    triangles: impl IntoIterator<Item = &'t [u32]>,
) -> Result<Vec<Normal>, MeshError> {
    let len = positions.len();
    let mut normals = vec![Normal::zeros(); len];
    for indices in triangles {
        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize);
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= len) {
                return Err(MeshError::IndexOutOfRange { index, len });
            }
            let face = (positions[b] - positions[a]).cross(&(positions[c] - positions[a]));
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
    }
    for n in normals.iter_mut() {
        *n = n.try_normalize(f32::EPSILON).unwrap_or_else(Normal::zeros);
    }
    Ok(normals)
}
