use std::collections::{HashMap, HashSet};

use super::vertex_index::{Vertex, VertexKey};

/// Keys of vertices replicated into every mesh of an asset.
///
/// Built once per asset load and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GarbageSet {
    keys: HashSet<VertexKey>,
}

impl GarbageSet {
    /// Returns `true` if `key` is classified as garbage.
    #[must_use]
    pub fn contains(&self, key: &VertexKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of garbage keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no vertex is classified as garbage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the garbage keys in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexKey> {
        self.keys.iter()
    }

    /// Keeps only the vertices of `vertices` that are not garbage.
    pub fn significant<'a>(&'a self, vertices: &'a [Vertex]) -> impl Iterator<Item = &'a Vertex> {
        vertices.iter().filter(|v| !self.contains(&v.key))
    }
}

/// Flags vertices present in every mesh of an asset.
///
/// `meshes` yields each mesh's already-deduplicated vertex list. A key is
/// garbage iff the number of meshes containing it equals the mesh count.
/// With a single mesh every vertex qualifies, so that mesh has no
/// significant vertices left.
pub fn detect_shared_vertices<'a, I>(meshes: I) -> GarbageSet
where
    I: IntoIterator<Item = &'a [Vertex]>,
{
    let mut counts: HashMap<VertexKey, usize> = HashMap::new();
    let mut mesh_count = 0usize;

    for vertices in meshes {
        mesh_count += 1;
        for vertex in vertices {
            *counts.entry(vertex.key).or_default() += 1;
        }
    }

    let keys = counts
        .into_iter()
        .filter(|&(_, count)| count == mesh_count)
        .map(|(key, _)| key)
        .collect();
    GarbageSet { keys }
}
