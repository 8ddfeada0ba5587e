use std::collections::HashMap;

use prismatic_mesh::Submesh;

/// Triangle lists bucketed by material name, in order of first appearance.
#[derive(Debug, Default)]
pub(crate) struct Partition {
    buckets: Vec<Submesh>,
    lookup: HashMap<String, usize>,
}

impl Partition {
    /// Append `triangles` to the bucket for `material`, creating it if this is the first time
    /// `material` has been seen.
    pub(crate) fn push(&mut self, material: &str, triangles: &[u32]) {
        let i = match self.lookup.get(material) {
            Some(&i) => i,
            None => {
                self.lookup.insert(material.to_owned(), self.buckets.len());
                self.buckets.push(Submesh::new(material, Vec::new()));
                self.buckets.len() - 1
            }
        };
        self.buckets[i].triangles.extend_from_slice(triangles);
    }

    /// The non-empty buckets, in order of first appearance.
    pub(crate) fn finish(self) -> Vec<Submesh> {
        self.buckets
            .into_iter()
            .filter(|s| !s.triangles.is_empty())
            .collect()
    }
}
