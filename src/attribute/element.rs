use nalgebra::{Point4, Quaternion, Vector2, Vector3, Vector4};

use crate::attribute::ValueType;

/// The semantic kinds of value an [Attribute](crate::Attribute) can be decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    /// RGBA colour
    Color,
    /// XYZW rotation
    Quaternion,
}

impl ElementKind {
    /// Number of scalar components in one element.
    pub const fn arity(self) -> usize {
        match self {
            ElementKind::Scalar => 1,
            ElementKind::Vec2 => 2,
            ElementKind::Vec3 => 3,
            ElementKind::Vec4 => 4,
            ElementKind::Color => 4,
            ElementKind::Quaternion => 4,
        }
    }

    /// The storage layout used when authoring an attribute of this kind.
    pub const fn layout(self) -> (ValueType, usize) {
        (ValueType::Float, self.arity())
    }
}

/// Types which float attribute data can be decoded into and encoded from.
///
/// Decoding reads [ElementKind::arity] components per element; see
/// [Attribute::try_decode](crate::Attribute::try_decode) for how short tuples are filled.
pub trait AttributeElement: Copy + Sized {
    const KIND: ElementKind;

    /// Build an element from its components. Only the first `KIND.arity()` are read.
    fn from_components(c: [f32; 4]) -> Self;

    /// Write this element's components into `out`, which has `KIND.arity()` slots.
    fn write_components(&self, out: &mut [f32]);
}

macro_rules! impl_element {
    ($kind:ident => $Target:ty; |$c:ident| $from:expr; |$s:ident, $out:ident| $write:expr) => {
        // an element must occupy exactly `arity` packed f32s
        static_assertions::const_assert_eq!(
            std::mem::size_of::<$Target>(),
            ElementKind::$kind.arity() * std::mem::size_of::<f32>()
        );
        impl AttributeElement for $Target {
            const KIND: ElementKind = ElementKind::$kind;
            #[inline]
            fn from_components($c: [f32; 4]) -> Self {
                $from
            }
            #[inline]
            fn write_components(&self, $out: &mut [f32]) {
                let $s = self;
                $write
            }
        }
    };
}

impl_element!(Scalar => f32; |c| c[0]; |s, out| out[0] = *s);
impl_element!(Vec2 => Vector2<f32>; |c| Vector2::new(c[0], c[1]);
    |s, out| out.copy_from_slice(s.as_slice()));
impl_element!(Vec3 => Vector3<f32>; |c| Vector3::new(c[0], c[1], c[2]);
    |s, out| out.copy_from_slice(s.as_slice()));
impl_element!(Vec4 => Vector4<f32>; |c| Vector4::new(c[0], c[1], c[2], c[3]);
    |s, out| out.copy_from_slice(s.as_slice()));
impl_element!(Color => Point4<f32>; |c| Point4::new(c[0], c[1], c[2], c[3]);
    |s, out| out.copy_from_slice(s.coords.as_slice()));
// stored as XYZW, nalgebra takes W first
impl_element!(Quaternion => Quaternion<f32>; |c| Quaternion::new(c[3], c[0], c[1], c[2]);
    |s, out| out.copy_from_slice(s.coords.as_slice()));
