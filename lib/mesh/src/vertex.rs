//! Type definitions for render vertex data

use nalgebra::{Point3, Point4, Vector2, Vector3, Vector4};

/// Number of texture coordinate sets a [MeshBuffers](crate::MeshBuffers) may carry.
pub const UV_SET_COUNT: usize = 8;

pub type Position = Point3<f32>;
pub type Normal = Vector3<f32>;
/// XYZ direction; W carries the sign of the bitangent.
pub type Tangent = Vector4<f32>;
pub type Texcoord = Vector2<f32>;
pub type Rgba = Point4<f32>;

/// Opaque white; the colour used where no colour was authored.
pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

/// A per-vertex channel of a [MeshBuffers](crate::MeshBuffers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexChannel {
    Position,
    Normal,
    Tangent,
    Color,
    /// Zero-based texture coordinate set
    Texcoord(u8),
}

impl std::fmt::Display for VertexChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexChannel::Position => f.write_str("position"),
            VertexChannel::Normal => f.write_str("normal"),
            VertexChannel::Tangent => f.write_str("tangent"),
            VertexChannel::Color => f.write_str("color"),
            VertexChannel::Texcoord(set) => write!(f, "uv{}", set + 1),
        }
    }
}

/// Mirror a position across the XY plane.
#[inline]
pub fn flip_position(p: &mut Position) {
    p.z = -p.z;
}

/// Mirror a direction across the XY plane.
#[inline]
pub fn flip_normal(n: &mut Normal) {
    n.z = -n.z;
}

/// Mirror a tangent's direction across the XY plane, leaving its handedness sign alone.
#[inline]
pub fn flip_tangent(t: &mut Tangent) {
    t.z = -t.z;
}
