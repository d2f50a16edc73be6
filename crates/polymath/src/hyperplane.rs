//! Hyperplanes in Euclidean space.

use approx_collections::{ApproxEq, ApproxHash, Precision};

use crate::{Float, PointWhichSide, Vector, VectorRef, WhichSide};

/// Hyperplane in Euclidean space, which is also used to represent a half-space.
///
/// Points `p` with `normal · p < distance` are inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperplane {
    /// Normalized normal vector.
    normal: Vector,
    /// Distance from the plane to the origin, perpendicular to the normal
    /// vector.
    distance: Float,
}

impl ApproxEq for Hyperplane {
    fn approx_eq(&self, other: &Self, prec: Precision) -> bool {
        prec.eq(&self.normal, &other.normal) && prec.eq(self.distance, other.distance)
    }
}
impl ApproxHash for Hyperplane {
    fn intern_floats<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        self.normal.intern_floats(f);
        f(&mut self.distance);
    }

    fn interned_eq(&self, other: &Self) -> bool {
        self.normal.interned_eq(&other.normal) && self.distance.interned_eq(&other.distance)
    }

    fn interned_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normal.interned_hash(state);
        self.distance.interned_hash(state);
    }
}

impl Hyperplane {
    /// Constructs a new hyperplane from a normal vector and a point that it
    /// passes through. Returns `None` if `normal` is approximately zero.
    pub fn through_point(normal: impl VectorRef, point: impl VectorRef) -> Option<Self> {
        let normal = normal.normalize()?;
        let distance = normal.dot(point);
        Some(Self { normal, distance })
    }

    /// Returns the (normalized) normal vector of the hyperplane.
    pub fn normal(&self) -> &Vector {
        &self.normal
    }
    /// Returns the distance from the plane to the origin, perpendicular to the
    /// normal vector.
    pub fn distance(&self) -> Float {
        self.distance
    }

    /// Returns the signed perpendicular distance of a point from the plane.
    pub fn signed_distance_to_point(&self, p: impl VectorRef) -> Float {
        self.normal.dot(p) - self.distance
    }

    /// Returns a hyperplane in the same location but with the opposite
    /// orientation.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            normal: -&self.normal,
            distance: -self.distance,
        }
    }

    /// Returns the location of a point relative to the hyperplane. For positive
    /// distance, the inside of the hyperplane contains the origin.
    pub fn location_of_point(&self, p: impl VectorRef, prec: Precision) -> PointWhichSide {
        match prec.cmp_zero(self.signed_distance_to_point(p)) {
            std::cmp::Ordering::Less => PointWhichSide::Inside,
            std::cmp::Ordering::Equal => PointWhichSide::On,
            std::cmp::Ordering::Greater => PointWhichSide::Outside,
        }
    }
    /// Returns the location of a set of points relative to the hyperplane.
    pub fn location_of_points<V: VectorRef>(
        &self,
        points: impl IntoIterator<Item = V>,
        prec: Precision,
    ) -> WhichSide {
        WhichSide::from_points(points.into_iter().map(|p| self.location_of_point(p, prec)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{APPROX, ApproxHashMap, vector};

    #[test]
    fn test_hyperplane_through_point() {
        let plane = Hyperplane::through_point([0.0, 0.0, 2.0], [5.0, -3.0, 1.0]).unwrap();
        crate::assert_approx_eq!(plane.normal().clone(), vector![0.0, 0.0, 1.0]);
        crate::assert_approx_eq!(plane.distance(), 1.0);
        assert_eq!(plane.location_of_point([0.0, 0.0, 0.0], APPROX), PointWhichSide::Inside);
        assert_eq!(plane.location_of_point([5.0, 5.0, 1.0], APPROX), PointWhichSide::On);
        assert_eq!(plane.flip().location_of_point([0.0, 0.0, 3.0], APPROX), PointWhichSide::Inside);

        assert_eq!(Hyperplane::through_point([0.0; 3], [1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_location_of_points() {
        let plane = Hyperplane::through_point(vector![3.0], vector![0.0]).unwrap();
        let split = [[-1.0, 0.0], [1.0, 0.0]];
        assert_eq!(plane.location_of_points(split, APPROX), WhichSide::Split);
        let flush = [[0.0, 3.0], [0.0, -2.0]];
        assert_eq!(plane.location_of_points(flush, APPROX), WhichSide::Flush);
        assert_eq!(plane.location_of_points([[2.0, 0.0]], APPROX), WhichSide::Outside);
        assert_eq!(plane.location_of_points([[-2.0, 0.0]], APPROX), WhichSide::Inside);
    }

    #[test]
    fn test_hyperplane_approx_hash() {
        let mut planes = ApproxHashMap::new(APPROX);
        let plane = |normal: [Float; 3], distance: Float| {
            Hyperplane::through_point(normal, normal.to_vector().scale(distance))
        };
        for (i, p) in [
            plane([0.0, 0.0, 1.0], 1.0),
            plane([1e-9, 0.0, 1.0], 1.0 + 1e-9),
            plane([0.0, 0.0, 1.0], 1.001),
            plane([0.0, 0.0, -1.0], 1.0),
            plane([0.0, 0.001, 1.0], 1.0),
        ]
        .into_iter()
        .flatten()
        .enumerate()
        {
            planes.entry(p).or_insert(i);
        }
        assert_eq!(planes.len(), 4);
        assert!(planes.values().all(|&i| i != 1));
    }
}
