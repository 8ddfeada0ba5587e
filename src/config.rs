//! Options controlling [assemble](crate::assemble).

use prismatic_mesh::{MeshError, UV_SET_COUNT};

/// The largest number of flattened vertices a single mesh may have by default.
pub const DEFAULT_VERTEX_BUDGET: usize = 65_000;

/// Material name given to primitives when no material attribute is authored.
pub const DEFAULT_MATERIAL: &str = "default";

/// Attribute names read for each render channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelNames {
    pub position: String,
    pub normal: String,
    pub tangent: String,
    pub color: String,
    pub alpha: String,
    pub material: String,
    /// `uv[0]` is read into the first texture coordinate set
    pub uv: [String; UV_SET_COUNT],
}

impl Default for ChannelNames {
    fn default() -> Self {
        Self {
            position: "P".to_owned(),
            normal: "N".to_owned(),
            tangent: "tangent".to_owned(),
            color: "Cd".to_owned(),
            alpha: "Alpha".to_owned(),
            material: "shop_materialpath".to_owned(),
            uv: std::array::from_fn(|i| match i {
                0 => "uv".to_owned(),
                i => format!("uv{}", i + 1),
            }),
        }
    }
}

impl ChannelNames {
    pub fn with_position(mut self, name: impl Into<String>) -> Self {
        self.position = name.into();
        self
    }

    pub fn with_normal(mut self, name: impl Into<String>) -> Self {
        self.normal = name.into();
        self
    }

    pub fn with_tangent(mut self, name: impl Into<String>) -> Self {
        self.tangent = name.into();
        self
    }

    pub fn with_color(mut self, name: impl Into<String>) -> Self {
        self.color = name.into();
        self
    }

    pub fn with_alpha(mut self, name: impl Into<String>) -> Self {
        self.alpha = name.into();
        self
    }

    pub fn with_material(mut self, name: impl Into<String>) -> Self {
        self.material = name.into();
        self
    }

    /// Override the attribute read for the one-based texture coordinate set `set`.
    ///
    /// # Errors
    ///
    /// * [`NoSuchUvSet`](MeshError::NoSuchUvSet) if `set` ∉ `1..=8`
    pub fn with_uv(mut self, set: usize, name: impl Into<String>) -> Result<Self, MeshError> {
        let slot = set
            .checked_sub(1)
            .and_then(|i| self.uv.get_mut(i))
            .ok_or(MeshError::NoSuchUvSet {
                set,
                max: UV_SET_COUNT,
            })?;
        *slot = name.into();
        Ok(self)
    }
}

/// What to do with a document that has no [Poly](crate::Poly) primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyGeometry {
    /// Fail with [`NoRenderableGeometry`](crate::AssemblyError::NoRenderableGeometry)
    #[default]
    Fail,
    /// Produce empty buffers and record a [Diagnostic](crate::Diagnostic)
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyOptions {
    pub channels: ChannelNames,
    /// Emit submesh indices in source order. When unset (the default), each submesh's index list
    /// is emitted reversed.
    pub reverse_winding: bool,
    /// Upper limit on the flattened vertex count
    pub vertex_budget: usize,
    pub empty_geometry: EmptyGeometry,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            channels: ChannelNames::default(),
            reverse_winding: false,
            vertex_budget: DEFAULT_VERTEX_BUDGET,
            empty_geometry: EmptyGeometry::default(),
        }
    }
}

impl AssemblyOptions {
    pub fn with_channels(mut self, channels: ChannelNames) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_reverse_winding(mut self, reverse_winding: bool) -> Self {
        self.reverse_winding = reverse_winding;
        self
    }

    pub fn with_vertex_budget(mut self, vertex_budget: usize) -> Self {
        self.vertex_budget = vertex_budget;
        self
    }

    pub fn with_empty_geometry(mut self, empty_geometry: EmptyGeometry) -> Self {
        self.empty_geometry = empty_geometry;
        self
    }
}
