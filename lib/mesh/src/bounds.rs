use nalgebra::{Point3, Vector3};

/// Trait for floating-point types, so that bounding volumes can be generic over {f32, f64}.
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + std::ops::AddAssign
    + std::ops::SubAssign
    + Copy
    + Send
    + Sync
{
    const ZERO: Self;
    const TWO: Self;
}

macro_rules! impl_float {
    ($($Real:ty),+) => {
        $(
            impl Float for $Real {
                const ZERO: Self = 0.0;
                const TWO: Self = 2.0;
            }
        )+
    };
}

impl_float!(f32, f64);

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<Real: Float> {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl<Real: Float> Aabb<Real> {
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// A degenerate box containing only `p`.
    #[inline]
    pub fn from_point(p: Point3<Real>) -> Self {
        Self { mins: p, maxs: p }
    }

    /// The smallest box containing every point in `points`, or `None` if there are none.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<Real>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut res = Self::from_point(*iter.next()?);
        for p in iter {
            res.grow(p);
        }
        Some(res)
    }

    /// Expand `self` so that it contains `p`.
    pub fn grow(&mut self, p: &Point3<Real>) {
        let Self { mins: i, maxs: a } = self;
        i.x = i.x.min(p.x);
        i.y = i.y.min(p.y);
        i.z = i.z.min(p.z);
        a.x = a.x.max(p.x);
        a.y = a.y.max(p.y);
        a.z = a.z.max(p.z);
    }

    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        let Self { mins: i, maxs: a } = self;
        nalgebra::point![
            (i.x + a.x) / Real::TWO,
            (i.y + a.y) / Real::TWO,
            (i.z + a.z) / Real::TWO
        ]
    }

    /// Full size of `self` along each axis.
    #[inline]
    pub fn size(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// Mirror `self` across the XY plane.
    pub fn flip_z(&self) -> Self {
        let mut mins = self.mins;
        let mut maxs = self.maxs;
        mins.z = Real::ZERO - self.maxs.z;
        maxs.z = Real::ZERO - self.mins.z;
        Self { mins, maxs }
    }
}
