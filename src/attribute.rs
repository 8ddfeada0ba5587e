//! Named, typed, tuple-packed value channels attached to a [GeometryDocument](crate::GeometryDocument).

mod element;
pub use element::*;

mod error;
pub use error::*;

use std::str::FromStr;

/// The element domain an attribute stores one tuple for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Vertex,
    Point,
    Primitive,
    /// The document as a whole; always exactly one tuple
    Detail,
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Vertex => f.write_str("vertex"),
            Owner::Point => f.write_str("point"),
            Owner::Primitive => f.write_str("primitive"),
            Owner::Detail => f.write_str("detail"),
        }
    }
}

/// The scalar family an attribute's values belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Float,
    Integer,
    String,
}

impl ValueType {
    /// Parse one of the storage names used by geometry authoring tools.
    ///
    /// # Errors
    ///
    /// * [`UnrecognizedValueType`](AttributeError::UnrecognizedValueType) for any other name
    pub fn from_name(name: &str) -> Result<Self, AttributeError> {
        match name {
            "float" | "fpreal32" | "fpreal64" => Ok(Self::Float),
            "int" | "int32" | "int64" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            _ => Err(AttributeError::UnrecognizedValueType(name.to_owned())),
        }
    }
}

impl FromStr for ValueType {
    type Err = AttributeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Float => f.write_str("float"),
            ValueType::Integer => f.write_str("integer"),
            ValueType::String => f.write_str("string"),
        }
    }
}

/// Packed attribute storage. The variant is the attribute's [ValueType].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValues {
    Float(Vec<f32>),
    Integer(Vec<i32>),
    String(Vec<String>),
}

impl AttributeValues {
    /// Empty storage of the given type.
    pub fn empty(ty: ValueType) -> Self {
        match ty {
            ValueType::Float => Self::Float(Vec::new()),
            ValueType::Integer => Self::Integer(Vec::new()),
            ValueType::String => Self::String(Vec::new()),
        }
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Float(_) => ValueType::Float,
            Self::Integer(_) => ValueType::Integer,
            Self::String(_) => ValueType::String,
        }
    }

    /// Number of scalars stored.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Integer(v) => v.len(),
            Self::String(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, typed value channel with one `tuple_size`-wide tuple per element of its owner domain.
///
/// # Invariants
///
/// * `values.len() == tuple_size * count(owner)`, where `count(Detail) == 1`; this is checked when
///   the attribute is added to a [GeometryDocument](crate::GeometryDocument)
/// * `defaults`, if present, holds exactly `tuple_size` scalars of the same type as `values`
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    owner: Owner,
    tuple_size: usize,
    values: AttributeValues,
    defaults: Option<AttributeValues>,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        owner: Owner,
        tuple_size: usize,
        values: AttributeValues,
    ) -> Self {
        Self {
            name: name.into(),
            owner,
            tuple_size,
            values,
            defaults: None,
        }
    }

    pub fn float(name: impl Into<String>, owner: Owner, tuple_size: usize, values: Vec<f32>) -> Self {
        Self::new(name, owner, tuple_size, AttributeValues::Float(values))
    }

    pub fn integer(
        name: impl Into<String>,
        owner: Owner,
        tuple_size: usize,
        values: Vec<i32>,
    ) -> Self {
        Self::new(name, owner, tuple_size, AttributeValues::Integer(values))
    }

    /// A string attribute with one string per element.
    pub fn string<S: Into<String>>(
        name: impl Into<String>,
        owner: Owner,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            owner,
            1,
            AttributeValues::String(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Pack typed elements into a float attribute with the element kind's arity.
    pub fn from_elements<T: AttributeElement>(
        name: impl Into<String>,
        owner: Owner,
        elements: &[T],
    ) -> Self {
        let arity = T::KIND.arity();
        let mut values = vec![0.0; elements.len() * arity];
        for (e, out) in elements.iter().zip(values.chunks_exact_mut(arity)) {
            e.write_components(out);
        }
        Self::float(name, owner, arity, values)
    }

    /// A zero-filled attribute laid out for elements of `kind`, with room for `count` elements.
    pub fn with_layout(name: impl Into<String>, owner: Owner, kind: ElementKind, count: usize) -> Self {
        let (ty, tuple_size) = kind.layout();
        let mut res = Self::new(name, owner, tuple_size, AttributeValues::empty(ty));
        res.extend_default(count);
        res
    }

    /// Set the tuple appended when the owner domain grows.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if `defaults` is not of this attribute's type
    /// * [`RaggedValues`](AttributeError::RaggedValues) if `defaults` is not exactly one tuple
    pub fn with_defaults(mut self, defaults: AttributeValues) -> Result<Self, AttributeError> {
        if defaults.value_type() != self.value_type() {
            return Err(AttributeError::TypeMismatch {
                name: self.name,
                expected: self.values.value_type(),
                found: defaults.value_type(),
            });
        }
        if defaults.len() != self.tuple_size {
            return Err(AttributeError::RaggedValues {
                name: self.name,
                tuple_size: self.tuple_size,
                len: defaults.len(),
            });
        }
        self.defaults = Some(defaults);
        Ok(self)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    #[inline]
    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.values.value_type()
    }

    #[inline]
    pub fn values(&self) -> &AttributeValues {
        &self.values
    }

    #[inline]
    pub fn defaults(&self) -> Option<&AttributeValues> {
        self.defaults.as_ref()
    }

    /// Number of whole tuples stored.
    #[inline]
    pub fn count(&self) -> usize {
        match self.tuple_size {
            0 => 0,
            n => self.values.len() / n,
        }
    }

    /// Append `count` copies of the default tuple (zeros or empty strings if none was set).
    pub fn extend_default(&mut self, count: usize) {
        let n = count * self.tuple_size;
        match (&mut self.values, &self.defaults) {
            (AttributeValues::Float(v), Some(AttributeValues::Float(d))) => {
                v.extend(d.iter().copied().cycle().take(n))
            }
            (AttributeValues::Float(v), _) => v.resize(v.len() + n, 0.0),
            (AttributeValues::Integer(v), Some(AttributeValues::Integer(d))) => {
                v.extend(d.iter().copied().cycle().take(n))
            }
            (AttributeValues::Integer(v), _) => v.resize(v.len() + n, 0),
            (AttributeValues::String(v), Some(AttributeValues::String(d))) => {
                v.extend(d.iter().cloned().cycle().take(n))
            }
            (AttributeValues::String(v), _) => v.resize(v.len() + n, String::new()),
        }
    }

    fn mismatch(&self, expected: ValueType) -> AttributeError {
        AttributeError::TypeMismatch {
            name: self.name.clone(),
            expected,
            found: self.value_type(),
        }
    }

    /// Decode float values as a sequence of `T`.
    ///
    /// Produces `count()` elements. Component `c` of element `i` is
    /// `values[i * tuple_size + c]` when `c < tuple_size`, and `0.0` otherwise; short tuples are
    /// zero-filled rather than rejected. Surplus components are ignored.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if this is not a float attribute
    pub fn try_decode<T: AttributeElement>(&self) -> Result<Vec<T>, AttributeError> {
        let AttributeValues::Float(values) = &self.values else {
            return Err(self.mismatch(ValueType::Float));
        };
        let width = self.tuple_size.min(T::KIND.arity());
        Ok((0..self.count())
            .map(|i| {
                let base = i * self.tuple_size;
                let mut c = [0.0; 4];
                c[..width].copy_from_slice(&values[base..base + width]);
                T::from_components(c)
            })
            .collect())
    }

    /// As [try_decode](Attribute::try_decode), but a type mismatch is logged and yields an empty
    /// sequence.
    pub fn decode<T: AttributeElement>(&self) -> Vec<T> {
        self.try_decode().unwrap_or_else(|e| {
            tracing::warn!(attribute = self.name.as_str(), "{e}");
            Vec::new()
        })
    }

    /// Decode integer values as `N`-wide tuples, zero-filling short tuples.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if this is not an integer attribute
    pub fn try_decode_integers<const N: usize>(&self) -> Result<Vec<[i32; N]>, AttributeError> {
        let AttributeValues::Integer(values) = &self.values else {
            return Err(self.mismatch(ValueType::Integer));
        };
        let width = self.tuple_size.min(N);
        Ok((0..self.count())
            .map(|i| {
                let base = i * self.tuple_size;
                let mut c = [0; N];
                c[..width].copy_from_slice(&values[base..base + width]);
                c
            })
            .collect())
    }

    /// Decode string values, taking the first component of each tuple.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if this is not a string attribute
    pub fn try_decode_strings(&self) -> Result<Vec<&str>, AttributeError> {
        let AttributeValues::String(values) = &self.values else {
            return Err(self.mismatch(ValueType::String));
        };
        Ok(values
            .iter()
            .step_by(self.tuple_size.max(1))
            .take(self.count())
            .map(String::as_str)
            .collect())
    }
}
