/// A polygon face, pre-triangulated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    /// Index of this primitive within the primitive domain
    pub id: u32,
    /// Document vertex indices, in winding order
    pub vertices: Vec<u32>,
    /// Triangle corners, three per triangle, as indices into the flattened vertex sequence of
    /// every [Poly] in the document.
    pub triangles: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    pub id: u32,
    pub vertices: Vec<u32>,
    pub order: u32,
    pub knots: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NurbCurve {
    pub id: u32,
    pub vertices: Vec<u32>,
    pub order: u32,
    /// Whether the curve passes through its end control points
    pub end_interpolation: bool,
    pub knots: Vec<f32>,
}

/// An element of a document's primitive domain. Only [Poly] primitives are rendered; curves are
/// carried along unevaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Poly(Poly),
    BezierCurve(BezierCurve),
    NurbCurve(NurbCurve),
}

impl Primitive {
    #[inline]
    pub fn id(&self) -> u32 {
        match self {
            Primitive::Poly(p) => p.id,
            Primitive::BezierCurve(c) => c.id,
            Primitive::NurbCurve(c) => c.id,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[u32] {
        match self {
            Primitive::Poly(p) => &p.vertices,
            Primitive::BezierCurve(c) => &c.vertices,
            Primitive::NurbCurve(c) => &c.vertices,
        }
    }

    #[inline]
    pub fn as_poly(&self) -> Option<&Poly> {
        match self {
            Primitive::Poly(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Poly> for Primitive {
    fn from(value: Poly) -> Self {
        Self::Poly(value)
    }
}

impl From<BezierCurve> for Primitive {
    fn from(value: BezierCurve) -> Self {
        Self::BezierCurve(value)
    }
}

impl From<NurbCurve> for Primitive {
    fn from(value: NurbCurve) -> Self {
        Self::NurbCurve(value)
    }
}
