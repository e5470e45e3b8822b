//! Part inventory: one record per measured mesh plus the UI state around it.
//!
//! The inventory lives for one loaded asset. [`PartInventory::reset_for_new_asset`]
//! is the only way to empty it, and [`PartInventory::load_asset`] always
//! starts with a reset.
//!
//! Selection and hover are store-level fields rather than per-record flags,
//! so at most one part is selected and at most one is hovered at any time.
//! Every mutation takes the [`RenderBackend`] whose materials and overlays it
//! drives. Ids and handles that do not resolve are ignored.

mod backend;
mod events;
mod export;
mod interaction;
mod record;
mod style;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{BoxOverlay, OverlayId, RenderBackend};
pub use events::InventoryEvent;
pub use export::{
    export_file_name, export_label, ExportRow, EXPORT_COLUMNS, EXPORT_SHEET, KEPT_STATUS,
};
pub use interaction::{pointer_to_ndc, DragTracker, DRAG_THRESHOLD_PX};
pub use record::{MeshRecord, PartId, PartSummary};
pub use style::HighlightStyle;

use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::{debug, info, warn};

use crate::analysis::{AnalysisParams, AssetAnalysis, GarbageSet, PartDimensions};
use crate::error::{ExportError, Result};
use crate::scene::{MeshHandle, SceneMesh};

/// Settings of a [`PartInventory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryConfig {
    pub analysis: AnalysisParams,
    pub style: HighlightStyle,
}

/// Outcome of [`PartInventory::load_asset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Parts added to the inventory, in scene order.
    pub added: Vec<PartId>,
    /// Meshes left out because no significant vertex remained.
    pub unmeasured: Vec<MeshHandle>,
    /// Size of the garbage-vertex set.
    pub garbage_vertices: usize,
}

#[derive(Debug, Clone, Copy)]
struct Hover {
    part: PartId,
    overlay: OverlayId,
}

/// Measured parts of the loaded asset and their selection/visibility/keep state.
#[derive(Debug, Default)]
pub struct PartInventory {
    config: InventoryConfig,
    parts: SlotMap<PartId, MeshRecord>,
    order: Vec<PartId>,
    by_handle: HashMap<MeshHandle, PartId>,
    garbage: GarbageSet,
    selected: Option<PartId>,
    hovered: Option<Hover>,
    events: Vec<InventoryEvent>,
}

impl PartInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Settings this inventory was created with.
    #[must_use]
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    // --- Lifecycle ---

    /// Restores any selection or hover override and empties the inventory.
    ///
    /// Outstanding [`PartId`]s stop resolving afterwards.
    pub fn reset_for_new_asset<B: RenderBackend>(&mut self, backend: &mut B) {
        self.clear_selection(backend);
        self.remove_hover(backend);
        self.parts.clear();
        self.order.clear();
        self.by_handle.clear();
        self.garbage = GarbageSet::default();
        self.events.clear();
        self.events.push(InventoryEvent::Cleared);
    }

    /// Analyzes `scene` and rebuilds the inventory from it.
    ///
    /// The scene is analyzed before anything is reset, so a malformed scene
    /// leaves the current inventory untouched. Meshes without significant
    /// vertices are reported in [`LoadReport::unmeasured`] and not added.
    ///
    /// # Errors
    ///
    /// Returns an error if the analysis parameters are invalid or a mesh has
    /// a malformed position stream.
    pub fn load_asset<B: RenderBackend>(
        &mut self,
        scene: &[SceneMesh],
        backend: &mut B,
    ) -> Result<LoadReport> {
        let analysis = AssetAnalysis::analyze(scene, self.config.analysis)?;
        self.reset_for_new_asset(backend);
        self.garbage = analysis.garbage().clone();

        let mut report = LoadReport {
            garbage_vertices: self.garbage.len(),
            ..LoadReport::default()
        };
        for (index, mesh) in scene.iter().enumerate() {
            match analysis.dimensions(index, mesh) {
                Some(dimensions) => {
                    report
                        .added
                        .push(self.add_part(mesh.handle, dimensions, mesh.material_name()));
                }
                None => {
                    warn!(mesh = %mesh.name, "no significant vertices, part left unmeasured");
                    report.unmeasured.push(mesh.handle);
                }
            }
        }

        info!(
            parts = report.added.len(),
            unmeasured = report.unmeasured.len(),
            "asset loaded"
        );
        Ok(report)
    }

    /// Appends a measured part and returns its id.
    ///
    /// A handle already in the inventory keeps its existing record.
    pub fn add_part(
        &mut self,
        handle: MeshHandle,
        dimensions: PartDimensions,
        material_name: &str,
    ) -> PartId {
        if let Some(&existing) = self.by_handle.get(&handle) {
            warn!(?handle, "mesh already in inventory");
            return existing;
        }

        let id = self.parts.insert_with_key(|id| MeshRecord {
            id,
            handle,
            name: dimensions.name,
            vertex_count: dimensions.vertex_count,
            filtered_vertex_count: dimensions.filtered_vertex_count,
            extents: dimensions.extents,
            material_name: material_name.to_owned(),
            hidden: false,
            kept: false,
            original: None,
        });
        self.order.push(id);
        self.by_handle.insert(handle, id);
        self.events.push(InventoryEvent::PartAdded(id));
        id
    }

    // --- Lookups ---

    /// Looks up a record by id.
    #[must_use]
    pub fn find_by_id(&self, id: PartId) -> Option<&MeshRecord> {
        self.parts.get(id)
    }

    /// Looks up the record of an engine mesh.
    #[must_use]
    pub fn find_by_handle(&self, handle: MeshHandle) -> Option<&MeshRecord> {
        self.by_handle.get(&handle).and_then(|&id| self.parts.get(id))
    }

    /// Records in inventory order.
    pub fn iter(&self) -> impl Iterator<Item = &MeshRecord> {
        self.order.iter().filter_map(|&id| self.parts.get(id))
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no part is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The selected part, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PartId> {
        self.selected
    }

    /// Returns `true` if `id` is the selected part.
    #[must_use]
    pub fn is_selected(&self, id: PartId) -> bool {
        self.selected == Some(id)
    }

    /// The part under the hover box, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<PartId> {
        self.hovered.map(|h| h.part)
    }

    /// Garbage vertices of the loaded asset.
    #[must_use]
    pub fn garbage(&self) -> &GarbageSet {
        &self.garbage
    }

    /// Handles a hit test may report: every part that is not hidden.
    #[must_use]
    pub fn visible_handles(&self) -> Vec<MeshHandle> {
        self.iter()
            .filter(|r| !r.hidden)
            .map(MeshRecord::handle)
            .collect()
    }

    /// Display rows in inventory order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PartSummary> {
        let hovered = self.hovered();
        self.iter()
            .map(|r| PartSummary {
                id: r.id,
                name: r.name.clone(),
                dimensions: r.dimensions_text(),
                vertex_count: r.vertex_count,
                material_name: r.material_name.clone(),
                hidden: r.hidden,
                kept: r.kept,
                selected: self.selected == Some(r.id),
                hovered: hovered == Some(r.id),
            })
            .collect()
    }

    /// Takes the queued change notifications.
    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Selection ---

    /// Selects `id`, or deselects it if it is already selected.
    ///
    /// A previously selected part is restored before the new one is
    /// highlighted.
    pub fn select_part<B: RenderBackend>(&mut self, id: PartId, backend: &mut B) {
        if !self.parts.contains_key(id) {
            debug!(?id, "select ignored: unknown part");
            return;
        }
        if self.selected == Some(id) {
            self.deselect_current(backend);
            return;
        }

        let previous = self.clear_selection(backend);
        self.selected = Some(id);
        self.capture_original(id, backend);
        self.apply_appearance(id, backend);
        debug!(?previous, current = ?id, "selection changed");
        self.events.push(InventoryEvent::SelectionChanged {
            previous,
            current: Some(id),
        });
    }

    /// Clears the selection and restores the part's appearance.
    pub fn deselect_current<B: RenderBackend>(&mut self, backend: &mut B) {
        if let Some(previous) = self.clear_selection(backend) {
            self.events.push(InventoryEvent::SelectionChanged {
                previous: Some(previous),
                current: None,
            });
        }
    }

    fn clear_selection<B: RenderBackend>(&mut self, backend: &mut B) -> Option<PartId> {
        let previous = self.selected.take()?;
        self.apply_appearance(previous, backend);
        Some(previous)
    }

    // --- Visibility ---

    /// Flips the hidden state of a part.
    pub fn toggle_hidden<B: RenderBackend>(&mut self, id: PartId, backend: &mut B) {
        if let Some(hidden) = self.parts.get(id).map(|r| r.hidden) {
            self.set_hidden(id, !hidden, backend);
        }
    }

    /// Hides or shows a part. Hidden parts are fully transparent, drop any
    /// hover overlay, and are left out of [`Self::visible_handles`].
    pub fn set_hidden<B: RenderBackend>(&mut self, id: PartId, hidden: bool, backend: &mut B) {
        let Some(record) = self.parts.get_mut(id) else {
            debug!(?id, "visibility change ignored: unknown part");
            return;
        };
        if record.hidden == hidden {
            return;
        }
        record.hidden = hidden;

        if hidden && self.hovered() == Some(id) && self.remove_hover(backend) {
            self.events.push(InventoryEvent::HoverChanged(None));
        }
        self.capture_original(id, backend);
        self.apply_appearance(id, backend);
        self.events.push(InventoryEvent::VisibilityChanged { part: id, hidden });
    }

    // --- Keep ---

    /// Flips the kept state of a part.
    pub fn toggle_kept<B: RenderBackend>(&mut self, id: PartId, backend: &mut B) {
        if let Some(kept) = self.parts.get(id).map(|r| r.kept) {
            self.set_kept(id, !kept, backend);
        }
    }

    /// Marks or unmarks a part for export.
    pub fn set_kept<B: RenderBackend>(&mut self, id: PartId, kept: bool, backend: &mut B) {
        let Some(record) = self.parts.get_mut(id) else {
            debug!(?id, "keep change ignored: unknown part");
            return;
        };
        if record.kept == kept {
            return;
        }
        record.kept = kept;

        self.capture_original(id, backend);
        self.apply_appearance(id, backend);
        let eligible = self.eligible_count();
        self.events.push(InventoryEvent::KeptChanged {
            part: id,
            kept,
            eligible,
        });
    }

    // --- Hover ---

    /// Shows the wireframe box for `id`, replacing any other hover box.
    ///
    /// The box comes from the engine's live world bounds, so it follows the
    /// part wherever it has been moved. The current box is removed first, so
    /// hovering a hidden or unknown part leaves no box at all.
    pub fn show_hover_overlay<B: RenderBackend>(&mut self, id: PartId, backend: &mut B) {
        if self.hovered() == Some(id) {
            return;
        }
        let had_hover = self.remove_hover(backend);

        let bounds = self
            .parts
            .get(id)
            .filter(|r| !r.hidden)
            .and_then(|r| backend.world_bounds(r.handle));
        if let Some(bounds) = bounds {
            let style = &self.config.style;
            let overlay = backend.add_overlay(&BoxOverlay::around(
                &bounds,
                style.hover_color,
                style.hover_opacity,
            ));
            self.hovered = Some(Hover { part: id, overlay });
            self.events.push(InventoryEvent::HoverChanged(Some(id)));
        } else {
            debug!(?id, "no hover box: unknown or hidden part");
            if had_hover {
                self.events.push(InventoryEvent::HoverChanged(None));
            }
        }
    }

    /// Removes the hover box if it belongs to `id`.
    pub fn hide_hover_overlay<B: RenderBackend>(&mut self, id: PartId, backend: &mut B) {
        if self.hovered() == Some(id) {
            self.remove_hover(backend);
            self.events.push(InventoryEvent::HoverChanged(None));
        }
    }

    fn remove_hover<B: RenderBackend>(&mut self, backend: &mut B) -> bool {
        match self.hovered.take() {
            Some(hover) => {
                backend.remove_overlay(hover.overlay);
                true
            }
            None => false,
        }
    }

    // --- Export ---

    /// Number of kept parts.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.iter().filter(|r| r.kept).count()
    }

    /// Worksheet rows for the kept parts, in inventory order, numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NothingToExport`] if no part is kept.
    pub fn export_rows(&self) -> Result<Vec<ExportRow>> {
        let rows: Vec<_> = self
            .iter()
            .filter(|r| r.kept)
            .enumerate()
            .map(|(i, r)| ExportRow::from_record(i + 1, r))
            .collect();
        if rows.is_empty() {
            return Err(ExportError::NothingToExport.into());
        }
        info!(rows = rows.len(), "prepared export rows");
        Ok(rows)
    }

    // --- Appearance ---

    fn capture_original<B: RenderBackend>(&mut self, id: PartId, backend: &B) {
        if let Some(record) = self.parts.get_mut(id) {
            if record.original.is_none() {
                record.original = Some(backend.appearance(record.handle).unwrap_or_default());
            }
        }
    }

    /// Pushes the composed appearance of `id` to the engine.
    ///
    /// Parts that never had an override are left alone.
    fn apply_appearance<B: RenderBackend>(&self, id: PartId, backend: &mut B) {
        let Some(record) = self.parts.get(id) else {
            return;
        };
        let Some(original) = record.original.as_ref() else {
            return;
        };
        let appearance = self.config.style.compose(
            original,
            record.kept,
            self.selected == Some(id),
            record.hidden,
        );
        backend.set_appearance(record.handle, &appearance);
    }
}
