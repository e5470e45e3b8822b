use std::collections::HashSet;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// Largest supported rounding precision, in fractional digits.
///
/// Keys are stored as scaled `i64`s. Coordinates whose scaled value does not
/// fit are rejected by [`VertexIndex::unique_vertices`].
pub const MAX_PRECISION: u32 = 12;

/// Equality key of a rounded vertex.
///
/// Each coordinate is stored as an integer count of `10^-precision` steps,
/// which makes `-0.0` and `0.0` the same key and keeps hashing exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey([i64; 3]);

impl VertexKey {
    /// Returns the scaled integer coordinates.
    #[must_use]
    pub fn steps(&self) -> [i64; 3] {
        self.0
    }
}

/// A deduplicated vertex: rounded position plus its equality key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Rounded position.
    pub position: Point3,
    /// Key derived from the rounded coordinates.
    pub key: VertexKey,
}

/// Deduplicates raw vertex positions of a single mesh.
#[derive(Debug, Clone, Copy)]
pub struct VertexIndex {
    precision: u32,
    scale: f64,
}

impl VertexIndex {
    /// Creates an index rounding to `precision` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` exceeds [`MAX_PRECISION`].
    pub fn new(precision: u32) -> Result<Self> {
        if precision > MAX_PRECISION {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "precision",
                value: f64::from(precision),
                min: 0.0,
                max: f64::from(MAX_PRECISION),
            }
            .into());
        }
        Ok(Self {
            precision,
            scale: 10f64.powi(i32::try_from(precision).unwrap_or(0)),
        })
    }

    /// Returns the rounding precision in fractional digits.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Largest coordinate magnitude this index can key.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coordinate_limit(&self) -> f64 {
        i64::MAX as f64 / self.scale
    }

    /// Rounds a single position into a [`Vertex`].
    ///
    /// Returns `None` if a coordinate is not finite or its scaled value does
    /// not fit an `i64` step count.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn vertex(&self, x: f64, y: f64, z: f64) -> Option<Vertex> {
        let limit = i64::MAX as f64;
        let mut steps = [0i64; 3];
        for (step, c) in steps.iter_mut().zip([x, y, z]) {
            let scaled = (c * self.scale).round();
            // `i64::MAX as f64` is 2^63, one past the largest step.
            if scaled.is_nan() || scaled.abs() >= limit {
                return None;
            }
            *step = scaled as i64;
        }
        let [rx, ry, rz] = steps.map(|s| s as f64 / self.scale);
        Some(Vertex {
            position: Point3::new(rx, ry, rz),
            key: VertexKey(steps),
        })
    }

    /// Collapses a flat `xyz` position stream into its distinct vertices.
    ///
    /// First-occurrence order is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream length is not a multiple of three, a
    /// coordinate is NaN or infinite, or a coordinate exceeds
    /// [`Self::coordinate_limit`].
    pub fn unique_vertices(&self, positions: &[f32]) -> Result<Vec<Vertex>> {
        if positions.len() % 3 != 0 {
            return Err(GeometryError::MalformedPositions {
                len: positions.len(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(positions.len() / 3);
        let mut unique = Vec::new();
        for (index, xyz) in positions.chunks_exact(3).enumerate() {
            if xyz.iter().any(|c| !c.is_finite()) {
                return Err(GeometryError::NonFiniteCoordinate { index }.into());
            }
            let vertex = self
                .vertex(f64::from(xyz[0]), f64::from(xyz[1]), f64::from(xyz[2]))
                .ok_or(GeometryError::CoordinateOutOfRange {
                    index,
                    limit: self.coordinate_limit(),
                })?;
            if seen.insert(vertex.key) {
                unique.push(vertex);
            }
        }
        Ok(unique)
    }
}

impl Default for VertexIndex {
    fn default() -> Self {
        Self {
            precision: 6,
            scale: 1e6,
        }
    }
}
