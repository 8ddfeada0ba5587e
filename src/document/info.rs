use std::time::Duration;

use prismatic_mesh::Aabb;

/// File-level metadata recorded by the authoring tool.
///
/// None of this affects assembly; it is handed through to the [Assembly](crate::Assembly)
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileInfo {
    /// Name and version of the program that wrote the file
    pub software: Option<String>,
    pub artist: Option<String>,
    pub hostname: Option<String>,
    pub date: Option<String>,
    /// How long the authoring tool took to cook the geometry
    pub cook_time: Option<Duration>,
    /// Bounds as recorded by the authoring tool, in its own coordinate system
    pub bounds: Option<Aabb<f32>>,
    pub point_count_summary: Option<String>,
    pub primitive_summary: Option<String>,
    pub attribute_summary: Option<String>,
    pub group_summary: Option<String>,
}
