//! Render-side mesh data: flat vertex channels, per-material index partitions, and the
//! bounding volume of the result.
//!
//! # Conventions
//!
//! * Coordinate system: left-handed, Y up; data arriving from a right-handed source is mirrored
//!   with [MeshBuffers::flip_z].
//! * Triangle winding: counter-clockwise front faces, three `u32` indices per triangle.

mod bounds;
pub use bounds::*;

mod buffers;
pub use buffers::*;

mod error;
pub use error::*;

pub mod normals;

mod vertex;
pub use vertex::*;
