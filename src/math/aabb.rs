use super::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a bounding box from two corners, ordering each axis.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Computes the tightest box around `points`.
    ///
    /// Returns `None` for an empty iterator rather than an inverted box.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = min.inf(&p);
            max = max.sup(&p);
        }
        Some(Self { min, max })
    }

    /// Extent along each axis (`max - min`).
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_points_have_no_box() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn from_points_tracks_each_axis() {
        let aabb = Aabb::from_points([
            Point3::new(1.0, -2.0, 0.5),
            Point3::new(-1.0, 4.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn size_and_center() {
        let aabb = Aabb::new(Point3::new(2.0, 2.0, 2.0), Point3::origin());
        assert_relative_eq!(aabb.size(), Vector3::new(2.0, 2.0, 2.0));
        assert_relative_eq!(aabb.center(), Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn single_point_box_is_flat() {
        let aabb = Aabb::from_points([Point3::new(1.0, 1.0, 1.0)]).unwrap();
        assert_relative_eq!(aabb.size(), Vector3::zeros());
    }
}
