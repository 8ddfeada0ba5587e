use prismatic::{
    Attribute, AttributeValues, BezierCurve, DocumentError, DocumentParts, GeometryDocument,
    Group, GroupIndex, GroupKind, Owner, Poly, PrimitiveGroup,
};

fn quad_parts() -> DocumentParts {
    DocumentParts {
        point_count: 4,
        point_refs: vec![0, 1, 2, 3],
        primitives: vec![Poly {
            id: 0,
            vertices: vec![0, 1, 2, 3],
            triangles: vec![0, 1, 2, 0, 2, 3],
        }
        .into()],
        attributes: vec![Attribute::float("P", Owner::Point, 3, vec![0.; 12])],
        ..Default::default()
    }
}

#[test]
fn from_parts_accepts_valid() {
    let doc = GeometryDocument::from_parts(quad_parts()).unwrap();
    assert_eq!(doc.point_count(), 4);
    assert_eq!(doc.vertex_count(), 4);
    assert_eq!(doc.primitive_count(), 1);
    assert_eq!(doc.element_count(Owner::Detail), 1);
    assert_eq!(doc.point_of(2), Some(2));
    assert_eq!(doc.point_of(4), None);
    assert_eq!(doc.polys().count(), 1);
}

#[test]
fn from_parts_rejects_bad_point_ref() {
    let mut parts = quad_parts();
    parts.point_refs[3] = 4;
    assert_eq!(
        GeometryDocument::from_parts(parts),
        Err(DocumentError::PointOutOfRange {
            vertex: 3,
            point: 4,
            count: 4,
        })
    );
}

#[test]
fn from_parts_rejects_sparse_ids() {
    let mut parts = quad_parts();
    parts.primitives.push(
        BezierCurve {
            id: 2,
            vertices: vec![0, 1],
            order: 2,
            knots: vec![],
        }
        .into(),
    );
    assert_eq!(
        GeometryDocument::from_parts(parts),
        Err(DocumentError::PrimitiveId { index: 1, id: 2 })
    );
}

#[test]
fn from_parts_rejects_bad_attribute() {
    let mut parts = quad_parts();
    parts
        .attributes
        .push(Attribute::float("N", Owner::Vertex, 3, vec![0.; 9]));
    assert_eq!(
        GeometryDocument::from_parts(parts),
        Err(DocumentError::AttributeLength {
            name: "N".to_owned(),
            owner: Owner::Vertex,
            expected: 12,
            found: 9,
        })
    );

    let mut parts = quad_parts();
    parts
        .attributes
        .push(Attribute::float("P", Owner::Point, 3, vec![0.; 12]));
    assert!(matches!(
        GeometryDocument::from_parts(parts),
        Err(DocumentError::DuplicateAttribute { .. })
    ));
}

#[test]
fn from_parts_rejects_bad_group() {
    let mut parts = quad_parts();
    let mut groups = GroupIndex::new();
    groups.insert("far", Group::Primitives(PrimitiveGroup { ids: vec![1] }));
    parts.groups = groups;
    assert_eq!(
        GeometryDocument::from_parts(parts),
        Err(DocumentError::GroupMemberOutOfRange {
            group: "far".to_owned(),
            kind: GroupKind::Primitives,
            member: 1,
            count: 1,
        })
    );
}

#[test]
fn attribute_lookup_order() {
    let mut doc = GeometryDocument::from_parts(quad_parts()).unwrap();
    doc.add_attribute(Attribute::float("P", Owner::Detail, 1, vec![5.]))
        .unwrap();
    assert_eq!(doc.attribute("P", None).unwrap().owner(), Owner::Point);
    assert_eq!(
        doc.attribute("P", Some(Owner::Detail)).unwrap().owner(),
        Owner::Detail
    );
    assert!(doc.attribute("P", Some(Owner::Vertex)).is_none());

    assert!(doc.remove_attribute("P", Owner::Point).is_some());
    assert_eq!(doc.attribute("P", None).unwrap().owner(), Owner::Detail);
}

#[test]
fn growth_extends_attributes() {
    let mut doc = GeometryDocument::new();
    doc.add_attribute(
        Attribute::float("Cd", Owner::Point, 3, vec![])
            .with_defaults(AttributeValues::Float(vec![1., 1., 1.]))
            .unwrap(),
    )
    .unwrap();
    doc.add_attribute(Attribute::string("name", Owner::Primitive, Vec::<String>::new()))
        .unwrap();

    assert_eq!(doc.add_points(2), 0..2);
    assert_eq!(
        doc.attribute("Cd", None).unwrap().values(),
        &AttributeValues::Float(vec![1.; 6])
    );

    let verts = doc.add_vertices(&[0, 1, 1]).unwrap();
    assert_eq!(verts, 0..3);
    assert_eq!(
        doc.add_vertices(&[0, 2]),
        Err(DocumentError::PointOutOfRange {
            vertex: 4,
            point: 2,
            count: 2,
        })
    );
    assert_eq!(doc.vertex_count(), 3);

    let id = doc.add_poly(verts.collect(), vec![0, 1, 2]).unwrap();
    assert_eq!(id, 0);
    assert_eq!(doc.attribute("name", None).unwrap().count(), 1);
    assert!(doc.validate().is_ok());
}

#[test]
fn push_primitive_checks() {
    let mut doc = GeometryDocument::new();
    doc.add_points(1);
    doc.add_vertices(&[0]).unwrap();
    assert_eq!(
        doc.push_primitive(|id| Poly {
            id: id + 1,
            vertices: vec![0],
            triangles: vec![],
        }
        .into()),
        Err(DocumentError::PrimitiveId { index: 0, id: 1 })
    );
    assert_eq!(
        doc.add_poly(vec![0, 1], vec![]),
        Err(DocumentError::VertexOutOfRange {
            primitive: 0,
            vertex: 1,
            count: 1,
        })
    );
    assert_eq!(doc.primitive_count(), 0);
}

#[test]
fn add_attribute_checks_length() {
    let mut doc = GeometryDocument::new();
    doc.add_points(3);
    assert!(matches!(
        doc.add_attribute(Attribute::float("P", Owner::Point, 3, vec![0.; 6])),
        Err(DocumentError::AttributeLength { expected: 9, .. })
    ));
    assert!(doc
        .add_attribute(Attribute::float("P", Owner::Point, 3, vec![0.; 9]))
        .is_ok());
}
