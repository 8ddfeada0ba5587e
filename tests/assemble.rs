use nalgebra::{Point3, Point4, Vector2, Vector3, Vector4};
use prismatic::{
    assemble,
    mesh::{MeshError, Submesh, WHITE},
    Assembly, AssemblyError, AssemblyOptions, Attribute, AttributeError, BezierCurve,
    ChannelNames, Diagnostic, DocumentError, DocumentParts, EmptyGeometry, GeometryDocument, Owner,
    Poly, ResolveError, ValueType,
};

/// One separate right triangle per entry of `materials`, each offset along X and Z, in the XY
/// plane with counter-clockwise winding.
fn triangles(materials: &[&str]) -> GeometryDocument {
    let mut doc = GeometryDocument::new();
    let mut positions = Vec::new();
    for (t, _) in materials.iter().enumerate() {
        let points = doc.add_points(3);
        let o = t as f32;
        positions.extend([
            Vector3::new(o, 0., o),
            Vector3::new(o + 1., 0., o),
            Vector3::new(o, 1., o),
        ]);
        let vertices = doc.add_vertices(&points.collect::<Vec<_>>()).unwrap();
        let base = vertices.start;
        doc.add_poly(vertices.collect(), vec![base, base + 1, base + 2])
            .unwrap();
    }
    doc.add_attribute(Attribute::from_elements("P", Owner::Point, &positions))
        .unwrap();
    if !materials.is_empty() {
        doc.add_attribute(Attribute::string(
            "shop_materialpath",
            Owner::Primitive,
            materials.iter().copied(),
        ))
        .unwrap();
    }
    doc
}

fn run(doc: &GeometryDocument) -> Assembly {
    assemble(doc, &AssemblyOptions::default()).unwrap()
}

#[test]
fn submeshes_by_first_appearance() {
    let doc = triangles(&["Wood", "Stone", "Wood"]);
    let out = run(&doc);
    assert_eq!(
        out.mesh.submeshes,
        vec![
            Submesh::new("Wood", vec![8, 7, 6, 2, 1, 0]),
            Submesh::new("Stone", vec![5, 4, 3]),
        ]
    );
    assert!(out.diagnostics.is_empty());

    let kept = assemble(&doc, &AssemblyOptions::default().with_reverse_winding(true)).unwrap();
    assert_eq!(
        kept.mesh.submeshes,
        vec![
            Submesh::new("Wood", vec![0, 1, 2, 6, 7, 8]),
            Submesh::new("Stone", vec![3, 4, 5]),
        ]
    );
}

#[test]
fn default_material() {
    let mut doc = triangles(&["a", "b"]);
    doc.remove_attribute("shop_materialpath", Owner::Primitive);
    let out = run(&doc);
    assert_eq!(out.mesh.submeshes.len(), 1);
    assert_eq!(out.mesh.submeshes[0].material, "default");
    assert_eq!(out.mesh.index_count(), 6);
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::DefaultMaterial {
            name: "shop_materialpath".to_owned()
        }]
    );
}

#[test]
fn detail_material_applies_everywhere() {
    let mut doc = triangles(&["a", "b"]);
    doc.remove_attribute("shop_materialpath", Owner::Primitive);
    doc.add_attribute(Attribute::string("shop_materialpath", Owner::Detail, ["/mat/metal"]))
        .unwrap();
    let out = run(&doc);
    assert_eq!(out.mesh.submeshes.len(), 1);
    assert_eq!(out.mesh.submeshes[0].material, "/mat/metal");
}

#[test]
fn z_is_negated() {
    let mut doc = triangles(&["m", "m"]);
    let normals = vec![Vector3::new(0.6, 0., 0.8); 6];
    let tangents = vec![Vector4::new(0., 0.6, 0.8, -1.); 6];
    doc.add_attribute(Attribute::from_elements("N", Owner::Vertex, &normals))
        .unwrap();
    doc.add_attribute(Attribute::from_elements("tangent", Owner::Vertex, &tangents))
        .unwrap();
    let out = run(&doc);
    let mesh = &out.mesh;

    assert_eq!(mesh.positions[3], Point3::new(1., 0., -1.));
    assert_eq!(mesh.positions[4], Point3::new(2., 0., -1.));
    assert!(!mesh.normals_synthesized);
    assert!(mesh
        .normals
        .as_ref()
        .unwrap()
        .iter()
        .all(|n| *n == Vector3::new(0.6, 0., -0.8)));
    assert!(mesh
        .tangents
        .as_ref()
        .unwrap()
        .iter()
        .all(|t| *t == Vector4::new(0., 0.6, -0.8, -1.)));

    // flipping again restores the source data
    let mut back = mesh.clone();
    back.flip_z();
    assert_eq!(back.positions[4], Point3::new(2., 0., 1.));
    assert_eq!(back.normals.unwrap()[0], normals[0]);
}

#[test]
fn bounds_follow_flipped_positions() {
    let out = run(&triangles(&["m", "m", "m"]));
    let bounds = out.mesh.bounds.unwrap();
    assert_eq!(bounds.mins, Point3::new(0., 0., -2.));
    assert_eq!(bounds.maxs, Point3::new(3., 1., 0.));
}

#[test]
fn synthesized_normals_face_the_viewer() {
    let out = run(&triangles(&["m"]));
    let mesh = &out.mesh;
    assert!(mesh.normals_synthesized);
    for n in mesh.normals.as_ref().unwrap() {
        assert!((n - Vector3::new(0., 0., -1.)).norm() < 1e-6, "{n}");
    }
}

#[test]
fn point_and_vertex_channels() {
    // a quad with 4 vertices sharing 4 points, split into 2 triangles
    let mut doc = GeometryDocument::new();
    doc.add_points(4);
    let vertices = doc.add_vertices(&[0, 1, 2, 3]).unwrap();
    doc.add_poly(vertices.collect(), vec![0, 1, 2, 0, 2, 3])
        .unwrap();
    let positions = [
        Vector3::new(0., 0., 0.),
        Vector3::new(1., 0., 0.),
        Vector3::new(1., 1., 0.),
        Vector3::new(0., 1., 0.),
    ];
    doc.add_attribute(Attribute::from_elements("P", Owner::Point, &positions))
        .unwrap();
    // uv2 is per vertex; uv1 is left unauthored
    let uvs: Vec<_> = (0..4).map(|i| Vector2::new(i as f32, 0.5)).collect();
    doc.add_attribute(Attribute::from_elements("uv2", Owner::Vertex, &uvs))
        .unwrap();

    let out = run(&doc);
    let mesh = &out.mesh;
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.uv_set(1).unwrap(), None);
    assert_eq!(mesh.uv_set(2).unwrap(), Some(uvs.as_slice()));
    assert!(mesh.uv_set(9).is_err());
    assert!(mesh.colors.is_none());
    assert!(mesh.validate().is_ok());
}

#[test]
fn shared_points_resolve_per_vertex() {
    // two polys sharing points 0 and 2 through distinct vertices
    let mut doc = GeometryDocument::new();
    doc.add_points(4);
    let a = doc.add_vertices(&[0, 1, 2]).unwrap();
    let b = doc.add_vertices(&[0, 2, 3]).unwrap();
    doc.add_poly(a.collect(), vec![0, 1, 2]).unwrap();
    doc.add_poly(b.collect(), vec![3, 4, 5]).unwrap();
    let cd = [
        Point4::new(1., 0., 0., 1.),
        Point4::new(0., 1., 0., 1.),
        Point4::new(0., 0., 1., 1.),
        Point4::new(1., 1., 0., 1.),
    ];
    doc.add_attribute(Attribute::from_elements("Cd", Owner::Point, &cd))
        .unwrap();

    let out = run(&doc);
    let colors = out.mesh.colors.unwrap();
    assert_eq!(colors, vec![cd[0], cd[1], cd[2], cd[0], cd[2], cd[3]]);
    assert!(out.diagnostics.contains(&Diagnostic::MissingPosition {
        name: "P".to_owned()
    }));
    assert!(out.mesh.positions.iter().all(|p| *p == Point3::origin()));
}

#[test]
fn alpha_merges_into_color() {
    let mut doc = triangles(&["m"]);
    doc.add_attribute(Attribute::float("Cd", Owner::Point, 3, vec![0.5; 9]))
        .unwrap();
    doc.add_attribute(Attribute::float("Alpha", Owner::Point, 1, vec![0.1, 0.2, 0.3]))
        .unwrap();
    let out = run(&doc);
    assert_eq!(
        out.mesh.colors.unwrap(),
        vec![
            Point4::new(0.5, 0.5, 0.5, 0.1),
            Point4::new(0.5, 0.5, 0.5, 0.2),
            Point4::new(0.5, 0.5, 0.5, 0.3),
        ]
    );
    assert!(out.diagnostics.is_empty());
}

#[test]
fn alpha_count_mismatch_is_dropped() {
    let mut doc = triangles(&["m"]);
    doc.add_attribute(Attribute::float("Cd", Owner::Point, 4, vec![0.5; 12]))
        .unwrap();
    doc.add_attribute(Attribute::float("Alpha", Owner::Detail, 1, vec![0.1]))
        .unwrap();
    let out = run(&doc);
    assert!(out
        .mesh
        .colors
        .unwrap()
        .iter()
        .all(|c| *c == Point4::new(0.5, 0.5, 0.5, 0.5)));
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::AlphaCountMismatch { color: 3, alpha: 1 }]
    );
}

#[test]
fn primitive_channels_broadcast() {
    let mut doc = triangles(&["m", "m"]);
    let n = [Vector3::new(0., 0., 1.), Vector3::new(1., 0., 0.)];
    doc.add_attribute(Attribute::from_elements("N", Owner::Primitive, &n))
        .unwrap();
    let cd = [Point4::new(1., 0., 0., 1.), Point4::new(0., 1., 0., 1.)];
    doc.add_attribute(Attribute::from_elements("Cd", Owner::Primitive, &cd))
        .unwrap();
    let out = run(&doc);
    let normals = out.mesh.normals.unwrap();
    assert_eq!(&normals[..3], &[Vector3::new(0., 0., -1.); 3]);
    assert_eq!(&normals[3..], &[Vector3::new(1., 0., 0.); 3]);
    let colors = out.mesh.colors.unwrap();
    assert_eq!(&colors[..3], &[cd[0]; 3]);
    assert_eq!(&colors[3..], &[cd[1]; 3]);
}

#[test]
fn detail_color_leaves_white() {
    let mut doc = triangles(&["m"]);
    doc.add_attribute(Attribute::float("Cd", Owner::Detail, 3, vec![1., 0., 0.]))
        .unwrap();
    let out = run(&doc);
    assert_eq!(out.mesh.colors.unwrap(), vec![WHITE; 3]);
}

#[test]
fn mistyped_channel_is_omitted() {
    let mut doc = triangles(&["m"]);
    doc.add_attribute(Attribute::string("N", Owner::Primitive, ["up"]))
        .unwrap();
    let out = run(&doc);
    assert!(out.mesh.normals_synthesized);
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::TypeMismatch(AttributeError::TypeMismatch {
            name: "N".to_owned(),
            expected: ValueType::Float,
            found: ValueType::String,
        })]
    );
}

#[test]
fn renamed_channels() {
    let mut doc = triangles(&["m"]);
    doc.add_attribute(Attribute::float("rest", Owner::Point, 3, vec![7.; 9]))
        .unwrap();
    doc.add_attribute(Attribute::string("mat", Owner::Primitive, ["brick"]))
        .unwrap();
    let options = AssemblyOptions::default().with_channels(
        ChannelNames::default()
            .with_position("rest")
            .with_material("mat"),
    );
    let out = assemble(&doc, &options).unwrap();
    assert!(out
        .mesh
        .positions
        .iter()
        .all(|p| *p == Point3::new(7., 7., -7.)));
    assert_eq!(out.mesh.submeshes[0].material, "brick");
}

#[test]
fn vertex_budget() {
    fn fan(vertices: usize) -> GeometryDocument {
        let mut doc = GeometryDocument::new();
        doc.add_points(1);
        let range = doc.add_vertices(&vec![0; vertices]).unwrap();
        doc.add_poly(range.collect(), vec![0, 1, 2]).unwrap();
        doc
    }

    let err = assemble(&fan(65_001), &AssemblyOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::VertexBudgetExceeded {
            actual: 65_001,
            limit: 65_000
        }
    ));
    let out = assemble(&fan(65_000), &AssemblyOptions::default()).unwrap();
    assert_eq!(out.mesh.vertex_count(), 65_000);

    let small = AssemblyOptions::default().with_vertex_budget(16);
    assert!(assemble(&fan(17), &small).is_err());
}

#[test]
fn empty_geometry_policy() {
    let mut doc = GeometryDocument::new();
    doc.add_points(2);
    let vertices = doc.add_vertices(&[0, 1]).unwrap();
    doc.push_primitive(|id| {
        BezierCurve {
            id,
            vertices: vertices.collect(),
            order: 2,
            knots: vec![],
        }
        .into()
    })
    .unwrap();

    assert!(matches!(
        assemble(&doc, &AssemblyOptions::default()),
        Err(AssemblyError::NoRenderableGeometry)
    ));
    let options = AssemblyOptions::default().with_empty_geometry(EmptyGeometry::Empty);
    let out = assemble(&doc, &options).unwrap();
    assert!(out.mesh.is_empty());
    assert_eq!(out.diagnostics, vec![Diagnostic::NoRenderableGeometry]);
}

#[test]
fn curves_are_skipped() {
    let mut doc = triangles(&["m"]);
    let vertices = doc.add_vertices(&[0, 1]).unwrap();
    doc.push_primitive(|id| {
        BezierCurve {
            id,
            vertices: vertices.collect(),
            order: 2,
            knots: vec![],
        }
        .into()
    })
    .unwrap();
    // the material attribute was grown with an empty name for the curve
    let out = run(&doc);
    assert_eq!(out.mesh.vertex_count(), 3);
    assert_eq!(out.mesh.submeshes.len(), 1);
}

#[test]
fn bad_triangle_index() {
    let mut doc = GeometryDocument::new();
    doc.add_points(3);
    let vertices = doc.add_vertices(&[0, 1, 2]).unwrap();
    doc.add_poly(vertices.collect(), vec![0, 1, 3]).unwrap();
    assert!(matches!(
        assemble(&doc, &AssemblyOptions::default()),
        Err(AssemblyError::TriangleOutOfRange {
            primitive: 0,
            index: 3,
            count: 3
        })
    ));
}

#[test]
fn material_past_its_domain() {
    // one point carrying the material, shared by three polys
    let mut doc = GeometryDocument::new();
    doc.add_points(1);
    for _ in 0..3 {
        let vertices = doc.add_vertices(&[0, 0, 0]).unwrap();
        let base = vertices.start;
        doc.add_poly(vertices.collect(), vec![base, base + 1, base + 2])
            .unwrap();
    }
    doc.add_attribute(Attribute::string("shop_materialpath", Owner::Point, ["wood"]))
        .unwrap();
    let err = assemble(&doc, &AssemblyOptions::default()).unwrap_err();
    assert!(
        matches!(
            &err,
            AssemblyError::Resolve(ResolveError::BoundsViolation {
                name,
                owner: Owner::Point,
                index: 1,
                len: 1,
            }) if name == "shop_materialpath"
        ),
        "{err:?}"
    );
    assert!(prismatic::Error::from(err)
        .to_string()
        .contains("shop_materialpath"));
}

#[test]
fn ragged_triangles_are_rejected() {
    let mut doc = GeometryDocument::new();
    doc.add_points(6);
    let a = doc.add_vertices(&[0, 1, 2]).unwrap();
    let b = doc.add_vertices(&[3, 4, 5]).unwrap();
    assert_eq!(
        doc.add_poly(a.clone().collect(), vec![0, 1, 2, 0]),
        Err(DocumentError::RaggedTriangles {
            primitive: 0,
            len: 4,
        })
    );
    assert_eq!(doc.primitive_count(), 0);

    let parts = DocumentParts {
        point_count: 6,
        point_refs: doc.point_refs().to_vec(),
        primitives: vec![
            Poly {
                id: 0,
                vertices: a.collect(),
                triangles: vec![0, 1, 2, 0],
            }
            .into(),
            Poly {
                id: 1,
                vertices: b.collect(),
                triangles: vec![3, 4, 5],
            }
            .into(),
        ],
        ..Default::default()
    };
    assert_eq!(
        GeometryDocument::from_parts(parts),
        Err(DocumentError::RaggedTriangles {
            primitive: 0,
            len: 4,
        })
    );
}

#[test]
fn misowned_position() {
    let mut doc = triangles(&["m"]);
    doc.remove_attribute("P", Owner::Point);
    doc.add_attribute(Attribute::float("P", Owner::Detail, 3, vec![1., 2., 3.]))
        .unwrap();
    let out = run(&doc);
    assert!(out.mesh.positions.iter().all(|p| *p == Point3::origin()));
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::PositionOwner {
            name: "P".to_owned(),
            owner: Owner::Detail,
        }]
    );
}

#[test]
fn uv_set_names() {
    let names = ChannelNames::default().with_uv(8, "st8").unwrap();
    assert_eq!(names.uv[7], "st8");
    assert_eq!(names.uv[0], "uv");
    for set in [0, 9] {
        assert!(matches!(
            ChannelNames::default().with_uv(set, "st"),
            Err(MeshError::NoSuchUvSet { set: s, max: 8 }) if s == set
        ));
    }
}

#[test]
fn deterministic() {
    let mut doc = triangles(&["Wood", "Stone", "Wood", "Glass"]);
    doc.info_mut().software = Some("test".to_owned());
    let a = run(&doc);
    let b = run(&doc);
    assert_eq!(a, b);
    assert_eq!(a.info.software.as_deref(), Some("test"));
}
