//! In-memory [`RenderBackend`] used by unit tests.

use std::collections::HashMap;

use crate::math::{Aabb, Point3, Vector3};
use crate::scene::{Appearance, MeshHandle, SceneMesh};

use super::backend::{BoxOverlay, OverlayId, RenderBackend};

#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub materials: HashMap<MeshHandle, Appearance>,
    pub bounds: HashMap<MeshHandle, Aabb>,
    pub overlays: HashMap<OverlayId, BoxOverlay>,
    pub set_calls: usize,
    next_overlay: u64,
}

impl RecordingBackend {
    /// Mirrors the scene: each mesh gets its descriptor's appearance and the
    /// box of its raw positions as world bounds.
    pub fn from_scene(scene: &[SceneMesh]) -> Self {
        let mut backend = Self::default();
        for mesh in scene {
            let appearance = mesh
                .material
                .as_ref()
                .map(|m| m.appearance)
                .unwrap_or_default();
            backend.materials.insert(mesh.handle, appearance);
            let points = mesh
                .positions
                .chunks_exact(3)
                .map(|p| Point3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])));
            if let Some(aabb) = Aabb::from_points(points) {
                backend.bounds.insert(mesh.handle, aabb);
            }
        }
        backend
    }

    pub fn material(&self, mesh: MeshHandle) -> Appearance {
        self.materials.get(&mesh).copied().unwrap_or_default()
    }

    /// Moves a mesh's world bounds, as an explode animation would.
    pub fn translate(&mut self, mesh: MeshHandle, by: Vector3) {
        if let Some(aabb) = self.bounds.get_mut(&mesh) {
            aabb.min += by;
            aabb.max += by;
        }
    }
}

impl RenderBackend for RecordingBackend {
    fn appearance(&self, mesh: MeshHandle) -> Option<Appearance> {
        self.materials.get(&mesh).copied()
    }

    fn set_appearance(&mut self, mesh: MeshHandle, appearance: &Appearance) {
        self.set_calls += 1;
        self.materials.insert(mesh, *appearance);
    }

    fn world_bounds(&self, mesh: MeshHandle) -> Option<Aabb> {
        self.bounds.get(&mesh).copied()
    }

    fn add_overlay(&mut self, overlay: &BoxOverlay) -> OverlayId {
        self.next_overlay += 1;
        let id = OverlayId(self.next_overlay);
        self.overlays.insert(id, *overlay);
        id
    }

    fn remove_overlay(&mut self, overlay: OverlayId) {
        self.overlays.remove(&overlay);
    }
}
