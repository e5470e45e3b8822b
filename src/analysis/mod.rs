//! Dimensional analysis of a loaded asset.
//!
//! ```text
//! vertex_index    per-mesh deduplication of raw positions
//! shared_vertex   cross-mesh detection of garbage vertices
//! dimensions      bounding box and extents of the significant vertices
//! ```

mod dimensions;
mod shared_vertex;
mod vertex_index;

pub use dimensions::{extract_dimensions, Extents, PartDimensions, UNNAMED};
pub use shared_vertex::{detect_shared_vertices, GarbageSet};
pub use vertex_index::{Vertex, VertexIndex, VertexKey, MAX_PRECISION};

use tracing::{debug, info};

use crate::error::{GeometryError, Result};
use crate::scene::SceneMesh;

/// Parameters controlling vertex rounding and unit conversion.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisParams {
    /// Fractional digits kept when rounding positions for deduplication.
    pub precision: u32,
    /// Millimeters per source unit.
    pub mm_per_unit: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            precision: 6,
            mm_per_unit: 1000.0,
        }
    }
}

/// Unique vertices of every mesh plus the asset-wide garbage set.
///
/// Computed from scratch for each loaded asset and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AssetAnalysis {
    unique: Vec<Vec<Vertex>>,
    garbage: GarbageSet,
    mm_per_unit: f64,
}

impl AssetAnalysis {
    /// Deduplicates each mesh and detects garbage vertices across all of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are out of range or any mesh has a
    /// malformed position stream.
    pub fn analyze(meshes: &[SceneMesh], params: AnalysisParams) -> Result<Self> {
        if !params.mm_per_unit.is_finite() || params.mm_per_unit <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "mm_per_unit",
                value: params.mm_per_unit,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }

        let index = VertexIndex::new(params.precision)?;
        let unique = meshes
            .iter()
            .map(|mesh| {
                let vertices = index.unique_vertices(&mesh.positions)?;
                debug!(
                    mesh = %mesh.name,
                    raw = mesh.vertex_count(),
                    unique = vertices.len(),
                    "deduplicated mesh vertices"
                );
                Ok(vertices)
            })
            .collect::<Result<Vec<_>>>()?;

        let garbage = detect_shared_vertices(unique.iter().map(Vec::as_slice));
        info!(
            garbage = garbage.len(),
            meshes = meshes.len(),
            "found garbage vertices"
        );

        Ok(Self {
            unique,
            garbage,
            mm_per_unit: params.mm_per_unit,
        })
    }

    /// Number of analyzed meshes.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.unique.len()
    }

    /// The asset-wide garbage set.
    #[must_use]
    pub fn garbage(&self) -> &GarbageSet {
        &self.garbage
    }

    /// Unique vertices of the mesh at `index`, in first-seen order.
    #[must_use]
    pub fn unique_vertices(&self, index: usize) -> &[Vertex] {
        self.unique.get(index).map_or(&[][..], Vec::as_slice)
    }

    /// Non-garbage vertices of the mesh at `index`.
    pub fn significant_vertices(&self, index: usize) -> impl Iterator<Item = &Vertex> {
        self.garbage.significant(self.unique_vertices(index))
    }

    /// Measures the mesh at `index`; `None` if nothing significant remains.
    #[must_use]
    pub fn dimensions(&self, index: usize, mesh: &SceneMesh) -> Option<PartDimensions> {
        extract_dimensions(
            self.significant_vertices(index),
            &mesh.name,
            mesh.vertex_count(),
            self.mm_per_unit,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scene::MeshHandle;

    fn mesh(id: u64, positions: Vec<f32>) -> SceneMesh {
        SceneMesh::new(MeshHandle(id), format!("part-{id}"), positions)
    }

    #[test]
    fn shared_datum_is_excluded_from_every_box() {
        let meshes = vec![
            mesh(1, vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1]),
            mesh(2, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.5, 2.0, 2.0]),
            mesh(3, vec![1.0, 1.0, 1.0, 5.0, 0.0, 0.0, 5.0, 0.3, 0.0]),
        ];
        let analysis = AssetAnalysis::analyze(&meshes, AnalysisParams::default()).unwrap();
        let datum = VertexIndex::default().vertex(1.0, 1.0, 1.0).unwrap().key;

        assert!(analysis.garbage().contains(&datum));
        for (i, m) in meshes.iter().enumerate() {
            assert!(analysis.significant_vertices(i).all(|v| v.key != datum));
            let dims = analysis.dimensions(i, m).unwrap();
            assert_eq!(dims.filtered_vertex_count, 2);
            assert_eq!(dims.vertex_count, 3);
        }

        let first = analysis.dimensions(0, &meshes[0]).unwrap();
        assert_eq!(first.extents.mm_text(), ["100.00", "100.00", "100.00"]);
    }

    #[test]
    fn single_mesh_asset_is_unmeasured() {
        let meshes = vec![mesh(1, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0])];
        let analysis = AssetAnalysis::analyze(&meshes, AnalysisParams::default()).unwrap();

        assert_eq!(analysis.garbage().len(), analysis.unique_vertices(0).len());
        assert!(analysis.dimensions(0, &meshes[0]).is_none());
    }

    #[test]
    fn malformed_mesh_fails_the_load() {
        let meshes = vec![mesh(1, vec![0.0; 9]), mesh(2, vec![0.0; 4])];
        assert!(AssetAnalysis::analyze(&meshes, AnalysisParams::default()).is_err());
    }

    #[test]
    fn bad_unit_scale_is_rejected() {
        let params = AnalysisParams {
            mm_per_unit: 0.0,
            ..AnalysisParams::default()
        };
        assert!(AssetAnalysis::analyze(&[], params).is_err());
    }

    #[test]
    fn out_of_range_index_has_no_vertices() {
        let analysis = AssetAnalysis::analyze(&[], AnalysisParams::default()).unwrap();
        assert!(analysis.unique_vertices(3).is_empty());
        assert_eq!(analysis.mesh_count(), 0);
    }
}
