use crate::annotation::Viewport;
use crate::math::Point2;
use crate::scene::MeshHandle;

use super::backend::RenderBackend;
use super::record::PartId;
use super::PartInventory;

/// Pointer travel, in pixels, beyond which a press counts as a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Tells clicks apart from camera drags.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    start: Option<Point2>,
    dragging: bool,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, at: Point2) {
        self.start = Some(at);
        self.dragging = false;
    }

    pub fn pointer_move(&mut self, at: Point2) {
        if let Some(start) = self.start {
            if nalgebra::distance(&start, &at) > DRAG_THRESHOLD_PX {
                self.dragging = true;
            }
        }
    }

    /// `true` if the gesture since the last press was a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Converts a pointer position to normalized device coordinates.
///
/// Returns `None` for an empty viewport.
#[must_use]
pub fn pointer_to_ndc(pointer: Point2, viewport: &Viewport) -> Option<Point2> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    Some(Point2::new(
        (pointer.x - viewport.left) / viewport.width * 2.0 - 1.0,
        -((pointer.y - viewport.top) / viewport.height) * 2.0 + 1.0,
    ))
}

impl PartInventory {
    /// First part in `hits` that is known and not hidden.
    ///
    /// `hits` is the engine's ray-intersection result, nearest first.
    pub fn pick<I>(&self, hits: I) -> Option<PartId>
    where
        I: IntoIterator<Item = MeshHandle>,
    {
        hits.into_iter()
            .filter_map(|handle| self.find_by_handle(handle))
            .find(|record| !record.is_hidden())
            .map(|record| record.id())
    }

    /// Applies a click on the 3D view and returns the resulting selection.
    ///
    /// Hitting a part selects it (or deselects it if it was already
    /// selected). Hitting nothing pickable clears the selection.
    pub fn handle_click<I, B>(&mut self, hits: I, backend: &mut B) -> Option<PartId>
    where
        I: IntoIterator<Item = MeshHandle>,
        B: RenderBackend,
    {
        match self.pick(hits) {
            Some(id) => self.select_part(id, backend),
            None => self.deselect_current(backend),
        }
        self.selected()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn small_wobble_is_still_a_click() {
        let mut tracker = DragTracker::new();
        tracker.pointer_down(Point2::new(100.0, 100.0));
        tracker.pointer_move(Point2::new(103.0, 104.0));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn long_move_is_a_drag_until_next_press() {
        let mut tracker = DragTracker::new();
        tracker.pointer_down(Point2::new(0.0, 0.0));
        tracker.pointer_move(Point2::new(6.0, 0.0));
        assert!(tracker.is_dragging());

        tracker.pointer_down(Point2::new(6.0, 0.0));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn ndc_corners() {
        let viewport = Viewport::new(10.0, 20.0, 200.0, 100.0);
        let top_left = pointer_to_ndc(Point2::new(10.0, 20.0), &viewport).unwrap();
        assert_relative_eq!(top_left, Point2::new(-1.0, 1.0));
        let center = pointer_to_ndc(Point2::new(110.0, 70.0), &viewport).unwrap();
        assert_relative_eq!(center, Point2::new(0.0, 0.0));
    }

    #[test]
    fn empty_viewport_has_no_ndc() {
        let viewport = Viewport::new(0.0, 0.0, 0.0, 100.0);
        assert!(pointer_to_ndc(Point2::origin(), &viewport).is_none());
    }
}
