//! Which side of a plane a point or point cloud lies on.

/// Position of a point relative to an oriented hyperplane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointWhichSide {
    /// The point is on the hyperplane.
    On,
    /// The point is on the side opposite the normal vector.
    Inside,
    /// The point is on the side the normal vector points toward.
    Outside,
}

/// Location of a set of points relative to an oriented hyperplane.
///
/// A point cannot be `Split`, so instead we use [`PointWhichSide`] for that.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WhichSide {
    /// *Every* point is on the hyperplane.
    Flush,
    /// No point is outside, and at least one is inside.
    Inside,
    /// No point is inside, and at least one is outside.
    Outside,
    /// Some points are inside and some are outside.
    Split,
}
impl WhichSide {
    /// Constructs a [`WhichSide`] from the locations of several points.
    ///
    /// Stops consuming the iterator as soon as the result is known to be
    /// [`WhichSide::Split`].
    pub fn from_points(points: impl IntoIterator<Item = PointWhichSide>) -> Self {
        let mut is_any_inside = false;
        let mut is_any_outside = false;
        for which_side in points {
            match which_side {
                PointWhichSide::On => (),
                PointWhichSide::Inside => is_any_inside = true,
                PointWhichSide::Outside => is_any_outside = true,
            }
            if is_any_inside && is_any_outside {
                return WhichSide::Split;
            }
        }
        match (is_any_inside, is_any_outside) {
            (true, true) => WhichSide::Split,
            (true, false) => WhichSide::Inside,
            (false, true) => WhichSide::Outside,
            (false, false) => WhichSide::Flush,
        }
    }
}
