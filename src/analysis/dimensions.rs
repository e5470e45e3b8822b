//! Per-part bounding dimensions.
//!
//! Dimensions come from the significant vertices only, so vertices shared by
//! every part of the asset never stretch a part's box.

use std::fmt;

use crate::math::{Aabb, Vector3};

use super::vertex_index::Vertex;

/// Display name used when a mesh has none.
pub const UNNAMED: &str = "Unnamed";

/// Measured extents of one part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Extent in source units (`max - min` per axis).
    pub units: Vector3,
    /// Extent in millimeters.
    pub mm: Vector3,
}

impl Extents {
    /// Width along X in millimeters, rounded to two decimals.
    #[must_use]
    pub fn width_mm(&self) -> f64 {
        round_to(self.mm.x, 2)
    }

    /// Height along Y in millimeters, rounded to two decimals.
    #[must_use]
    pub fn height_mm(&self) -> f64 {
        round_to(self.mm.y, 2)
    }

    /// Depth along Z in millimeters, rounded to two decimals.
    #[must_use]
    pub fn depth_mm(&self) -> f64 {
        round_to(self.mm.z, 2)
    }

    /// Source-unit extents formatted to three decimals per axis.
    #[must_use]
    pub fn units_text(&self) -> [String; 3] {
        [self.units.x, self.units.y, self.units.z].map(|v| format!("{:.3}", round_to(v, 3)))
    }

    /// Millimeter extents formatted to two decimals per axis.
    ///
    /// Formats the same rounded values [`Self::width_mm`] and friends return.
    #[must_use]
    pub fn mm_text(&self) -> [String; 3] {
        [self.width_mm(), self.height_mm(), self.depth_mm()].map(|v| format!("{v:.2}"))
    }
}

/// `W × H × D mm`, two decimals per axis.
impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w, h, d] = self.mm_text();
        write!(f, "{w} × {h} × {d} mm")
    }
}

/// Result of measuring one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartDimensions {
    /// Display name, [`UNNAMED`] if the mesh had none.
    pub name: String,
    /// Box around the significant vertices.
    pub bounds: Aabb,
    /// Extents derived from `bounds`.
    pub extents: Extents,
    /// Vertex count of the raw position stream.
    pub vertex_count: usize,
    /// Number of significant vertices used for `bounds`.
    pub filtered_vertex_count: usize,
}

/// Measures a part from its significant vertices.
///
/// Returns `None` when there are no significant vertices: the part has no
/// measurable geometry and callers skip it.
pub fn extract_dimensions<'a, I>(
    significant: I,
    name: &str,
    vertex_count: usize,
    mm_per_unit: f64,
) -> Option<PartDimensions>
where
    I: IntoIterator<Item = &'a Vertex>,
{
    let mut filtered_vertex_count = 0usize;
    let bounds = Aabb::from_points(significant.into_iter().map(|v| {
        filtered_vertex_count += 1;
        v.position
    }))?;

    let units = bounds.size();
    let name = if name.is_empty() { UNNAMED } else { name };
    Some(PartDimensions {
        name: name.to_owned(),
        bounds,
        extents: Extents {
            units,
            mm: units * mm_per_unit,
        },
        vertex_count: vertex_count.max(filtered_vertex_count),
        filtered_vertex_count,
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
