//! Input model handed over by the asset loader.
//!
//! A scene is a flat, ordered list of meshes in traversal order. The core
//! never parses asset files; it only sees positions, names, and material
//! descriptors.

pub mod appearance;

pub use appearance::{Appearance, Rgb};

/// Material name shown when a mesh has a material without a name.
pub const UNNAMED_MATERIAL: &str = "Unnamed Material";

/// Material name shown when a mesh has no material at all.
pub const NO_MATERIAL: &str = "No Material";

/// Opaque identity of a render-engine mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u64);

/// Material of a scene mesh as reported by the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialDescriptor {
    pub name: Option<String>,
    pub appearance: Appearance,
}

/// One mesh of a loaded scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMesh {
    pub handle: MeshHandle,
    pub name: String,
    /// Flat `xyz` position attribute, one triple per vertex.
    pub positions: Vec<f32>,
    pub material: Option<MaterialDescriptor>,
}

impl SceneMesh {
    /// Creates a mesh without a material.
    #[must_use]
    pub fn new(handle: MeshHandle, name: impl Into<String>, positions: Vec<f32>) -> Self {
        Self {
            handle,
            name: name.into(),
            positions,
            material: None,
        }
    }

    /// Attaches a material descriptor.
    #[must_use]
    pub fn with_material(mut self, material: MaterialDescriptor) -> Self {
        self.material = Some(material);
        self
    }

    /// Number of vertices in the raw position stream.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Material name for display.
    #[must_use]
    pub fn material_name(&self) -> &str {
        match &self.material {
            Some(m) => m.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(UNNAMED_MATERIAL),
            None => NO_MATERIAL,
        }
    }
}
