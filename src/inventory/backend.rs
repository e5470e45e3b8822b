use crate::math::{Aabb, Point3, Vector3};
use crate::scene::{Appearance, MeshHandle, Rgb};

/// Identity of an overlay object added to the render scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// A wireframe box drawn around a hovered part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxOverlay {
    pub center: Point3,
    pub size: Vector3,
    pub color: Rgb,
    pub opacity: f64,
}

impl BoxOverlay {
    /// Builds an overlay covering `bounds`.
    #[must_use]
    pub fn around(bounds: &Aabb, color: Rgb, opacity: f64) -> Self {
        Self {
            center: bounds.center(),
            size: bounds.size(),
            color,
            opacity,
        }
    }
}

/// Capabilities the inventory needs from the render engine.
///
/// Materials and overlays are owned by the engine. The inventory only reads
/// and overrides appearance through this trait, and restores it later from
/// its own snapshots.
pub trait RenderBackend {
    /// Current appearance of the mesh's material, if the mesh is known.
    fn appearance(&self, mesh: MeshHandle) -> Option<Appearance>;

    /// Replaces the visual state of the mesh's material.
    fn set_appearance(&mut self, mesh: MeshHandle, appearance: &Appearance);

    /// Live world-space bounds of the mesh, including its current transform.
    fn world_bounds(&self, mesh: MeshHandle) -> Option<Aabb>;

    /// Adds a wireframe box to the scene.
    fn add_overlay(&mut self, overlay: &BoxOverlay) -> OverlayId;

    /// Removes a previously added overlay. Unknown ids are ignored.
    fn remove_overlay(&mut self, overlay: OverlayId);
}
