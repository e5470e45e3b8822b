use crate::inventory::{PartId, PartInventory, RenderBackend};
use crate::math::{Matrix4, Point2, Point3, Vector4, TOLERANCE};

use super::camera::Viewport;

/// Segment from the projected part center to the info panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLine {
    pub start: Point2,
    pub end: Point2,
    pub length: f64,
    /// Rotation from the +x screen axis, in degrees (y down).
    pub angle_degrees: f64,
}

impl IndicatorLine {
    #[must_use]
    pub fn between(start: Point2, end: Point2) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            length: delta.norm(),
            angle_degrees: delta.y.atan2(delta.x).to_degrees(),
        }
    }
}

/// Screen placement of the annotation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    /// Projected part center in viewport pixels.
    pub anchor: Point2,
    /// Normalized device depth of the anchor, `-1..=1` inside the frustum.
    pub depth: f64,
    pub line: IndicatorLine,
}

/// Result of a position refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Visible(Annotation),
    /// The caller should hide the panel for this frame.
    NotDisplayable,
}

/// Text shown in the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub dimensions: String,
    pub vertices: String,
    pub material: String,
}

/// Projects a world point into viewport pixels.
///
/// Returns the pixel position and NDC depth, or `None` when the point is
/// behind the camera, past the far plane, or the transform is degenerate.
#[must_use]
pub fn project_point(
    world: &Point3,
    view_projection: &Matrix4,
    viewport: &Viewport,
) -> Option<(Point2, f64)> {
    viewport.aspect()?;
    let clip = view_projection * Vector4::new(world.x, world.y, world.z, 1.0);
    if !clip.iter().all(|c| c.is_finite()) || clip.w <= TOLERANCE {
        return None;
    }
    let ndc = clip.xyz() / clip.w;
    if ndc.z > 1.0 {
        return None;
    }
    let x = (ndc.x * 0.5 + 0.5) * viewport.width + viewport.left;
    let y = (-ndc.y * 0.5 + 0.5) * viewport.height + viewport.top;
    Some((Point2::new(x, y), ndc.z))
}

/// Keeps the info panel of the selected part attached to it on screen.
///
/// Holds only the target and the panel corner; every refresh recomputes the
/// part center from its live bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationProjector {
    target: Option<PartId>,
    panel_anchor: Point2,
}

impl AnnotationProjector {
    /// `panel_anchor` is the panel corner the indicator line ends at.
    #[must_use]
    pub fn new(panel_anchor: Point2) -> Self {
        Self {
            target: None,
            panel_anchor,
        }
    }

    /// Attaches the panel to `part`.
    pub fn show(&mut self, part: PartId) {
        self.target = Some(part);
    }

    /// Detaches the panel.
    pub fn hide(&mut self) {
        self.target = None;
    }

    /// The part the panel is attached to, if any.
    #[must_use]
    pub fn target(&self) -> Option<PartId> {
        self.target
    }

    /// Moves the panel corner, e.g. after a window resize.
    pub fn set_panel_anchor(&mut self, panel_anchor: Point2) {
        self.panel_anchor = panel_anchor;
    }

    /// Computes this frame's anchor and indicator line.
    ///
    /// Reads state only; call it once per rendered frame while a panel is
    /// shown.
    #[must_use]
    pub fn refresh<B: RenderBackend>(
        &self,
        inventory: &PartInventory,
        backend: &B,
        view_projection: &Matrix4,
        viewport: &Viewport,
    ) -> Projection {
        let center = self
            .target
            .and_then(|id| inventory.find_by_id(id))
            .and_then(|record| backend.world_bounds(record.handle()))
            .map(|bounds| bounds.center());

        match center.and_then(|c| project_point(&c, view_projection, viewport)) {
            Some((anchor, depth)) => Projection::Visible(Annotation {
                anchor,
                depth,
                line: IndicatorLine::between(anchor, self.panel_anchor),
            }),
            None => Projection::NotDisplayable,
        }
    }

    /// Panel text for the current target.
    #[must_use]
    pub fn panel_content(&self, inventory: &PartInventory) -> Option<PanelContent> {
        let record = inventory.find_by_id(self.target?)?;
        Some(PanelContent {
            title: record.name().to_owned(),
            dimensions: record.dimensions_text(),
            vertices: format_count(record.vertex_count()),
            material: record.material_name().to_owned(),
        })
    }
}

/// Formats a count with `,` thousands separators.
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
