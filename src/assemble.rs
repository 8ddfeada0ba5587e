//! Conversion of a [GeometryDocument] into [MeshBuffers].
//!
//! # Algorithm
//!
//! 1. Concatenate the vertex lists of every [Poly](crate::Poly), in declaration order. Position
//!    `i` of this flattened sequence becomes output vertex `i`.
//! 2. Look up each channel attribute by name on any owner.
//! 3. Fold alpha into colour, if both have the same number of elements.
//! 4. Resolve every vertex and point channel for each flattened vertex.
//! 5. Overwrite normals and colours owned by primitives with their primitive's value.
//! 6. Bucket each poly's triangles by material, in order of first appearance.
//! 7. Reverse each bucket (unless [reverse_winding](AssemblyOptions::reverse_winding) is set),
//!    then negate Z of every position, normal, and tangent.
//! 8. Compute bounds, and synthesize normals if none were authored.

mod error;
mod partition;

pub use error::*;

use std::collections::HashMap;

use nalgebra::{Vector2, Vector3, Vector4};
use prismatic_mesh::{MeshBuffers, Normal, Position, Rgba, Tangent, Texcoord, UV_SET_COUNT, WHITE};

use crate::{
    attribute::{AttributeElement, Owner},
    config::{AssemblyOptions, EmptyGeometry, DEFAULT_MATERIAL},
    document::{FileInfo, GeometryDocument},
    resolve::{AttributeResolver, Channel, ResolveError},
};

use partition::Partition;

/// The result of a successful [assemble].
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub mesh: MeshBuffers,
    /// The source document's metadata, unchanged
    pub info: FileInfo,
    /// Every recoverable anomaly encountered, in the order encountered
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert `doc` into render buffers. See the [module documentation](self) for the steps taken.
///
/// # Errors
///
/// * [`VertexBudgetExceeded`](AssemblyError::VertexBudgetExceeded) if the flattened vertex count
///   exceeds [vertex_budget](AssemblyOptions::vertex_budget)
/// * [`NoRenderableGeometry`](AssemblyError::NoRenderableGeometry) if `doc` has no polys and
///   [empty_geometry](AssemblyOptions::empty_geometry) is [Fail](EmptyGeometry::Fail)
/// * [`Resolve`](AssemblyError::Resolve) if `doc` references vertices, points, or primitives
///   that its attributes don't cover
/// * [`TriangleOutOfRange`](AssemblyError::TriangleOutOfRange) if a triangle index is outside the
///   flattened vertex sequence
pub fn assemble(
    doc: &GeometryDocument,
    options: &AssemblyOptions,
) -> Result<Assembly, AssemblyError> {
    MeshAssembler::new(doc, options).run()
}

/// Stateful driver for [assemble].
#[derive(Debug)]
pub struct MeshAssembler<'doc, 'opt> {
    doc: &'doc GeometryDocument,
    options: &'opt AssemblyOptions,
    resolver: AttributeResolver<'doc>,
    diagnostics: Vec<Diagnostic>,
}

impl<'doc, 'opt> MeshAssembler<'doc, 'opt> {
    pub fn new(doc: &'doc GeometryDocument, options: &'opt AssemblyOptions) -> Self {
        Self {
            doc,
            options,
            resolver: AttributeResolver::new(doc),
            diagnostics: Vec::new(),
        }
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn finish(self, mesh: MeshBuffers) -> Assembly {
        Assembly {
            mesh,
            info: self.doc.info().clone(),
            diagnostics: self.diagnostics,
        }
    }

    /// Look up and decode the channel named `name`, recording a diagnostic if it can't be decoded.
    fn channel<T: AttributeElement>(&mut self, name: &str) -> Option<Channel<T>> {
        match self.resolver.channel(name) {
            Ok(Some(channel)) => Some(channel),
            Ok(None) => {
                tracing::trace!(name, "channel not authored");
                None
            }
            Err(e) => {
                self.diagnose(Diagnostic::TypeMismatch(e));
                None
            }
        }
    }

    /// Resolve `channel` for every flattened vertex.
    fn per_vertex<T: Copy>(
        &self,
        flat: &[u32],
        points: &[u32],
        channel: &Channel<T>,
        default: T,
    ) -> Result<Vec<T>, ResolveError> {
        flat.iter()
            .zip(points)
            .map(|(&v, &p)| self.resolver.value_at(Some(channel), v, p, default))
            .collect()
    }

    /// Overwrite the output slots of each poly with its value in `channel`, if `channel` is owned
    /// by primitives.
    fn broadcast<T: Copy>(
        &self,
        local: &HashMap<u32, usize>,
        channel: &Channel<T>,
        out: &mut [T],
    ) -> Result<(), ResolveError> {
        if channel.owner() != Owner::Primitive {
            return Ok(());
        }
        for poly in self.doc.polys() {
            let Some(value) = self.resolver.primitive_value(channel, poly.id)? else {
                continue;
            };
            for v in &poly.vertices {
                if let Some(&i) = local.get(v) {
                    out[i] = value;
                }
            }
        }
        Ok(())
    }

    /// The material name of each poly, in declaration order.
    fn materials(&mut self) -> Result<Vec<&'doc str>, ResolveError> {
        let doc = self.doc;
        let options = self.options;
        let name = &options.channels.material;
        let Some(attr) = doc.attribute(name, None) else {
            self.diagnose(Diagnostic::DefaultMaterial { name: name.clone() });
            return Ok(doc.polys().map(|_| DEFAULT_MATERIAL).collect());
        };
        let names = match attr.try_decode_strings() {
            Ok(names) => names,
            Err(e) => {
                self.diagnose(Diagnostic::TypeMismatch(e));
                return Ok(doc.polys().map(|_| DEFAULT_MATERIAL).collect());
            }
        };
        let at = |index: u32| {
            names
                .get(index as usize)
                .copied()
                .ok_or_else(|| ResolveError::BoundsViolation {
                    name: attr.name().to_owned(),
                    owner: attr.owner(),
                    index,
                    len: names.len(),
                })
        };
        doc.polys()
            .map(|poly| match attr.owner() {
                Owner::Detail => at(0),
                _ => at(poly.id),
            })
            .collect()
    }

    pub fn run(mut self) -> Result<Assembly, AssemblyError> {
        let doc = self.doc;
        let options = self.options;
        let channels = &options.channels;

        // 1. preflight
        let mut poly_count = 0usize;
        let mut flat = Vec::new();
        for poly in doc.polys() {
            poly_count += 1;
            flat.extend_from_slice(&poly.vertices);
        }
        if flat.len() > options.vertex_budget {
            return Err(AssemblyError::VertexBudgetExceeded {
                actual: flat.len(),
                limit: options.vertex_budget,
            });
        }
        if poly_count == 0 {
            return match options.empty_geometry {
                EmptyGeometry::Fail => Err(AssemblyError::NoRenderableGeometry),
                EmptyGeometry::Empty => {
                    self.diagnose(Diagnostic::NoRenderableGeometry);
                    Ok(self.finish(MeshBuffers::default()))
                }
            };
        }
        let count = flat.len();
        tracing::debug!(polys = poly_count, vertices = count, "assembling mesh");

        // 2. channel lookup
        let position = self.channel::<Vector3<f32>>(&channels.position);
        match position.as_ref().map(Channel::owner) {
            None => self.diagnose(Diagnostic::MissingPosition {
                name: channels.position.clone(),
            }),
            Some(owner @ (Owner::Primitive | Owner::Detail)) => {
                self.diagnose(Diagnostic::PositionOwner {
                    name: channels.position.clone(),
                    owner,
                })
            }
            Some(_) => (),
        }
        let normal = self.channel::<Normal>(&channels.normal);
        let tangent = self.channel::<Tangent>(&channels.tangent);
        let mut color = self.channel::<Rgba>(&channels.color);
        let alpha = self.channel::<f32>(&channels.alpha);
        let mut uvs: [Option<Channel<Texcoord>>; UV_SET_COUNT] = Default::default();
        for (uv, name) in uvs.iter_mut().zip(&channels.uv) {
            *uv = self.channel::<Vector2<f32>>(name);
        }

        // 3. colour / alpha merge
        if let (Some(color), Some(alpha)) = (color.as_mut(), alpha.as_ref()) {
            if color.len() == alpha.len() {
                for (c, a) in color.values_mut().iter_mut().zip(alpha.values()) {
                    c.w = *a;
                }
            } else {
                let (color, alpha) = (color.len(), alpha.len());
                self.diagnose(Diagnostic::AlphaCountMismatch { color, alpha });
            }
        }

        // 4. per-vertex resolution
        let points = flat
            .iter()
            .map(|&v| self.resolver.point_of(v))
            .collect::<Result<Vec<_>, _>>()?;
        let mut local = HashMap::with_capacity(count);
        for (i, &v) in flat.iter().enumerate() {
            local.entry(v).or_insert(i);
        }

        let positions = match &position {
            Some(ch) => self
                .per_vertex(&flat, &points, ch, Vector3::zeros())?
                .into_iter()
                .map(Position::from)
                .collect(),
            None => vec![Position::origin(); count],
        };
        let mut normals = normal
            .as_ref()
            .map(|ch| self.per_vertex(&flat, &points, ch, Normal::zeros()))
            .transpose()?;
        let tangents = tangent
            .as_ref()
            .map(|ch| self.per_vertex(&flat, &points, ch, Vector4::zeros()))
            .transpose()?;
        let mut colors = color
            .as_ref()
            .map(|ch| self.per_vertex(&flat, &points, ch, WHITE))
            .transpose()?;
        let mut uv_sets: [Option<Vec<Texcoord>>; UV_SET_COUNT] = Default::default();
        for (out, uv) in uv_sets.iter_mut().zip(&uvs) {
            *out = uv
                .as_ref()
                .map(|ch| self.per_vertex(&flat, &points, ch, Vector2::zeros()))
                .transpose()?;
        }

        // 5. primitive broadcast
        if let (Some(out), Some(ch)) = (normals.as_mut(), normal.as_ref()) {
            self.broadcast(&local, ch, out)?;
        }
        if let (Some(out), Some(ch)) = (colors.as_mut(), color.as_ref()) {
            self.broadcast(&local, ch, out)?;
        }

        // 6. submesh partition
        let materials = self.materials()?;
        let mut partition = Partition::default();
        for (poly, material) in doc.polys().zip(materials) {
            if let Some(&index) = poly.triangles.iter().find(|&&t| t as usize >= count) {
                return Err(AssemblyError::TriangleOutOfRange {
                    primitive: poly.id,
                    index,
                    count,
                });
            }
            partition.push(material, &poly.triangles);
        }

        let authored_normals = normals.is_some();
        let mut mesh = MeshBuffers {
            positions,
            normals,
            tangents,
            colors,
            uv_sets,
            normals_synthesized: false,
            submeshes: partition.finish(),
            bounds: None,
        };

        // 7. winding & handedness
        if !options.reverse_winding {
            mesh.reverse_winding();
        }
        mesh.flip_z();

        // 8. derived data
        mesh.recompute_bounds();
        if !authored_normals {
            mesh.synthesize_normals()?;
        }

        tracing::debug!(
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            submeshes = mesh.submeshes.len(),
            "assembled mesh"
        );
        Ok(self.finish(mesh))
    }
}
