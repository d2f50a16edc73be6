//! Running mean of a point cloud.

use crate::{APPROX, Float, Vector, VectorRef};

/// Center of mass of a set of points, each with weight 1.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Centroid {
    /// Sum of points.
    sum: Vector,
    /// Number of points.
    weight: Float,
}

impl<V: VectorRef> FromIterator<V> for Centroid {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut ret = Centroid::ZERO;
        for point in iter {
            ret.push(point);
        }
        ret
    }
}

impl Centroid {
    /// Zero centroid.
    pub const ZERO: Self = Centroid {
        sum: Vector::EMPTY,
        weight: 0.0,
    };

    /// Adds a point.
    pub fn push(&mut self, point: impl VectorRef) {
        self.sum += point;
        self.weight += 1.0;
    }

    /// Returns the centroid point, or the empty vector if nothing has been
    /// added.
    pub fn center(&self) -> Vector {
        if APPROX.is_pos(self.weight) {
            self.sum.scale(1.0 / self.weight)
        } else {
            Vector::EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, vector};

    #[test]
    fn test_centroid_of_points() {
        let c: Centroid = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 3.0, 0.0]]
            .into_iter()
            .collect();
        assert_approx_eq!(c.center(), vector![1.0, 1.0, 0.0]);

        let mut c = Centroid::ZERO;
        assert_eq!(c.center(), Vector::EMPTY);
        c.push(vector![4.0]);
        c.push([2.0, 6.0]);
        assert_approx_eq!(c.center(), vector![3.0, 3.0]);
    }
}
