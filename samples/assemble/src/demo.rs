//! Procedural stand-in for a geometry file: a flat grid of quads in the XZ plane.

use nalgebra::{Point4, Vector2, Vector3};
use prismatic::{
    Attribute, ChannelNames, Error, FileInfo, GeometryDocument, GroupKind, Owner, PrimitiveGroup,
};

#[derive(Debug, Clone)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
    pub materials: Vec<String>,
    pub color: bool,
    pub alpha: bool,
    pub uv: bool,
    pub primitive_normals: bool,
}

/// Build a `columns` × `rows` grid of unit quads.
///
/// Every quad gets its own four vertices; neighbouring quads share points. Attributes are authored
/// under the names in `names` so that overridden names are found again on assembly.
pub fn grid(shape: &GridShape, names: &ChannelNames) -> Result<GeometryDocument, Error> {
    let GridShape { columns, rows, .. } = *shape;
    let mut doc = GeometryDocument::new();
    *doc.info_mut() = FileInfo {
        software: Some(concat!("prismatic-assemble@", env!("CARGO_PKG_VERSION")).to_owned()),
        primitive_summary: Some(format!("{} Polygons", columns * rows)),
        ..Default::default()
    };

    let stride = columns + 1;
    let points = doc.add_points((stride * (rows + 1)) as usize);
    let positions: Vec<Vector3<f32>> = points
        .clone()
        .map(|p| Vector3::new((p % stride) as f32, 0.0, (p / stride) as f32))
        .collect();
    doc.add_attribute(Attribute::from_elements(&names.position, Owner::Point, &positions))?;
    if shape.color {
        let (w, h) = (columns.max(1) as f32, rows.max(1) as f32);
        let colors: Vec<Point4<f32>> = positions
            .iter()
            .map(|p| Point4::new(p.x / w, 0.5, p.z / h, 1.0))
            .collect();
        doc.add_attribute(Attribute::from_elements(&names.color, Owner::Point, &colors))?;
    }
    if shape.alpha {
        let alpha: Vec<f32> = points.map(|p| if p % 2 == 0 { 1.0 } else { 0.5 }).collect();
        doc.add_attribute(Attribute::from_elements(&names.alpha, Owner::Point, &alpha))?;
    }

    let mut uvs = Vec::new();
    for row in 0..rows {
        for col in 0..columns {
            let corner = row * stride + col;
            let quad = [corner, corner + 1, corner + 1 + stride, corner + stride];
            let vertices = doc.add_vertices(&quad)?;
            let base = vertices.start;
            uvs.extend(quad.iter().map(|&p| {
                Vector2::new(
                    (p % stride) as f32 / columns as f32,
                    (p / stride) as f32 / rows as f32,
                )
            }));
            doc.add_poly(
                vertices.collect(),
                vec![base, base + 1, base + 2, base, base + 2, base + 3],
            )?;
        }
    }
    if shape.uv {
        doc.add_attribute(Attribute::from_elements(&names.uv[0], Owner::Vertex, &uvs))?;
    }
    if shape.primitive_normals {
        let normals = vec![Vector3::<f32>::y(); doc.primitive_count()];
        doc.add_attribute(Attribute::from_elements(&names.normal, Owner::Primitive, &normals))?;
    }

    let materials: Vec<&str> = shape
        .materials
        .iter()
        .map(String::as_str)
        .filter(|m| !m.is_empty())
        .collect();
    if !materials.is_empty() {
        let per_prim = (0..doc.primitive_count()).map(|i| materials[i % materials.len()]);
        doc.add_attribute(Attribute::string(&names.material, Owner::Primitive, per_prim))?;
    }

    let border = doc
        .groups_mut()
        .get_or_create_as::<PrimitiveGroup>("border", GroupKind::Primitives)?;
    for row in 0..rows {
        for col in 0..columns {
            if row == 0 || col == 0 || row + 1 == rows || col + 1 == columns {
                border.ids.push(row * columns + col);
            }
        }
    }

    Ok(doc)
}
