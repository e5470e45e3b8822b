use crate::analysis::Extents;
use crate::scene::{Appearance, MeshHandle};

slotmap::new_key_type! {
    /// Unique identifier for a part in the inventory.
    ///
    /// Ids are generational: an id from a previous asset never resolves
    /// after the inventory has been reset.
    pub struct PartId;
}

/// One measured part of the loaded asset.
#[derive(Debug, Clone)]
pub struct MeshRecord {
    pub(crate) id: PartId,
    pub(crate) handle: MeshHandle,
    pub(crate) name: String,
    pub(crate) vertex_count: usize,
    pub(crate) filtered_vertex_count: usize,
    pub(crate) extents: Extents,
    pub(crate) material_name: String,
    pub(crate) hidden: bool,
    pub(crate) kept: bool,
    /// Appearance before the first override, captured once.
    pub(crate) original: Option<Appearance>,
}

impl MeshRecord {
    /// Id of this part.
    #[must_use]
    pub fn id(&self) -> PartId {
        self.id
    }

    /// Engine mesh this part was measured from.
    #[must_use]
    pub fn handle(&self) -> MeshHandle {
        self.handle
    }

    /// Display name, `Unnamed` when the mesh has none.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vertex count before deduplication.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Vertices left after removing garbage vertices.
    #[must_use]
    pub fn filtered_vertex_count(&self) -> usize {
        self.filtered_vertex_count
    }

    /// Extents of the significant vertices.
    #[must_use]
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    /// `W × H × D mm`.
    #[must_use]
    pub fn dimensions_text(&self) -> String {
        self.extents.to_string()
    }

    /// Name of the material at load time.
    #[must_use]
    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    /// Returns `true` if the part is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns `true` if the part is marked for export.
    #[must_use]
    pub fn is_kept(&self) -> bool {
        self.kept
    }

    /// Appearance captured before the first override, if any was applied.
    #[must_use]
    pub fn original_appearance(&self) -> Option<&Appearance> {
        self.original.as_ref()
    }
}

/// A display row of the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSummary {
    pub id: PartId,
    pub name: String,
    pub dimensions: String,
    pub vertex_count: usize,
    pub material_name: String,
    pub hidden: bool,
    pub kept: bool,
    pub selected: bool,
    pub hovered: bool,
}
