//! Orthonormal bases and projection of point clouds onto them.
//!
//! Vertex generators often produce points in a hyperplane of `R^n` (such as
//! the zero-sum hyperplane of `R^4`). Projecting onto an orthonormal basis of
//! that hyperplane gives an isometric copy of the cloud in fewer dimensions.

use crate::{Float, Vector, VectorRef};

/// Residual norm below which a candidate basis vector is considered linearly
/// dependent on the vectors already accepted.
pub const RANK_EPSILON: Float = 1e-8;

/// Error produced when a basis has fewer independent vectors than required.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BasisError {
    #[error(
        "numeric rank loss: expected {expected} independent basis vectors but only {actual} survived"
    )]
    NumericRankLoss { expected: usize, actual: usize },
}

/// Result of Gram-Schmidt orthonormalization.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Orthonormalized {
    /// Mutually perpendicular unit vectors, in input order.
    pub basis: Vec<Vector>,
    /// Indices of input vectors that were dropped because they were
    /// (numerically) linearly dependent on earlier ones.
    pub dropped: Vec<usize>,
}

/// Orthonormalizes `vectors` using classical Gram-Schmidt.
///
/// Each candidate has its components along already-accepted basis vectors
/// removed and is then normalized. A candidate whose residual norm is below
/// [`RANK_EPSILON`] is dropped and its index recorded.
pub fn orthonormalize<V: VectorRef>(vectors: impl IntoIterator<Item = V>) -> Orthonormalized {
    let mut ret = Orthonormalized::default();
    for (i, v) in vectors.into_iter().enumerate() {
        let mut residual = v.to_vector();
        for e in &ret.basis {
            residual -= e.scale(v.dot(e));
        }
        let norm = residual.norm();
        if norm < RANK_EPSILON {
            ret.dropped.push(i);
        } else {
            ret.basis.push(residual.iter().map(|x| x / norm).collect());
        }
    }
    ret
}

/// Linear map sending a point to its coordinates along an orthonormal basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    basis: Vec<Vector>,
}

impl Projection {
    /// Constructs a projection onto the span of `generating_vectors`.
    ///
    /// Dependent generating vectors are dropped with a warning, so the output
    /// dimension may be smaller than the number of generating vectors.
    pub fn new<V: VectorRef>(generating_vectors: impl IntoIterator<Item = V>) -> Self {
        let Orthonormalized { basis, dropped } = orthonormalize(generating_vectors);
        if !dropped.is_empty() {
            log::warn!(
                "dropped linearly dependent basis vectors {dropped:?}; \
                 projecting to {} dimensions",
                basis.len(),
            );
        }
        Self { basis }
    }

    /// Constructs a projection onto the span of `generating_vectors`, which
    /// must have exactly `ndim` independent vectors.
    pub fn with_ndim<V: VectorRef>(
        generating_vectors: impl IntoIterator<Item = V>,
        ndim: usize,
    ) -> Result<Self, BasisError> {
        let Orthonormalized { basis, .. } = orthonormalize(generating_vectors);
        if basis.len() != ndim {
            return Err(BasisError::NumericRankLoss {
                expected: ndim,
                actual: basis.len(),
            });
        }
        Ok(Self { basis })
    }

    /// Returns the orthonormal basis.
    pub fn basis(&self) -> &[Vector] {
        &self.basis
    }
    /// Returns the number of dimensions in the output.
    pub fn ndim(&self) -> usize {
        self.basis.len()
    }

    /// Returns the scalar projections of `point` onto each basis vector.
    pub fn apply(&self, point: impl VectorRef) -> Vector {
        self.basis.iter().map(|e| point.dot(e)).collect()
    }
}

/// Projects every point onto the orthonormalized span of
/// `generating_vectors`. The output dimension is the number of surviving
/// basis vectors.
pub fn project<P: VectorRef, V: VectorRef>(
    points: impl IntoIterator<Item = P>,
    generating_vectors: impl IntoIterator<Item = V>,
) -> Vec<Vector> {
    let projection = Projection::new(generating_vectors);
    points.into_iter().map(|p| projection.apply(p)).collect()
}

/// Projects every point to 3D. Fails if the generating vectors do not span
/// exactly three dimensions.
pub fn project_to_3d<P: VectorRef, V: VectorRef>(
    points: impl IntoIterator<Item = P>,
    generating_vectors: impl IntoIterator<Item = V>,
) -> Result<Vec<[Float; 3]>, BasisError> {
    let projection = Projection::with_ndim(generating_vectors, 3)?;
    Ok(points
        .into_iter()
        .map(|p| projection.apply(p).to_array())
        .collect())
}

/// Returns the `ndim - 1` vectors `e_i - e_{ndim-1}`, which span the zero-sum
/// hyperplane of `R^ndim`.
pub fn anchored_differences(ndim: u8) -> Vec<Vector> {
    let last = ndim.saturating_sub(1);
    (0..last)
        .map(|i| Vector::unit(i) - Vector::unit(last))
        .collect()
}

/// Returns the `count` vectors `e_i - e_{i+1}` for `i` in `0..count`.
pub fn consecutive_differences(count: u8) -> Vec<Vector> {
    (0..count)
        .map(|i| Vector::unit(i) - Vector::unit(i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{APPROX, EPSILON, assert_approx_eq, vector};

    fn assert_orthonormal(basis: &[Vector]) {
        for (i, a) in basis.iter().enumerate() {
            assert_approx_eq!(a.norm(), 1.0);
            for b in &basis[i + 1..] {
                assert_approx_eq!(a.dot(b), 0.0);
            }
        }
    }

    #[test]
    fn test_orthonormalize_drops_dependent_vectors() {
        let vectors = [
            vector![1.0, 1.0, 0.0],
            vector![2.0, 2.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 0.0, 5.0],
        ];
        let result = orthonormalize(&vectors);
        assert_eq!(result.dropped, vec![1, 3]);
        assert_eq!(result.basis.len(), 3);
        assert_orthonormal(&result.basis);
        let s = 0.5_f64.sqrt();
        assert_approx_eq!(result.basis[0], vector![s, s, 0.0]);
        assert_approx_eq!(result.basis[1], vector![-s, s, 0.0]);
        assert_approx_eq!(result.basis[2], vector![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_difference_bases() {
        assert_eq!(
            anchored_differences(3),
            vec![vector![1.0, 0.0, -1.0], vector![0.0, 1.0, -1.0]],
        );
        assert_eq!(
            consecutive_differences(2),
            vec![vector![1.0, -1.0], vector![0.0, 1.0, -1.0]],
        );
    }

    #[test]
    fn test_project_to_3d_preserves_distances_in_hyperplane() {
        let points = [[1.0, 2.0, 3.0, 4.0], [2.0, 1.0, 3.0, 4.0], [4.0, 3.0, 2.0, 1.0]];
        let projected = project_to_3d(points, consecutive_differences(3)).unwrap();
        for (i, j) in (0..points.len()).tuple_combinations() {
            let before = points[i].distance_to(points[j]);
            let after = projected[i].distance_to(projected[j]);
            assert_approx_eq!(before, after);
        }
    }

    #[test]
    fn test_project_to_3d_rank_loss() {
        let generating = [vector![1.0, -1.0], vector![-2.0, 2.0], vector![0.0, 1.0, -1.0]];
        let result = project_to_3d([[0.0; 3]], generating);
        assert_eq!(
            result,
            Err(BasisError::NumericRankLoss {
                expected: 3,
                actual: 2,
            }),
        );
    }

    #[test]
    fn test_lenient_projection_reduces_dimension() {
        let generating = [vector![1.0, 0.0], vector![3.0, 0.0]];
        let projected = project([[2.0, 7.0]], generating);
        assert_eq!(projected, vec![vector![2.0]]);
    }

    proptest! {
        #[test]
        fn proptest_orthonormalize_output_is_orthonormal(
            vectors in prop::collection::vec(prop::collection::vec(-10.0..10.0_f64, 4), 1..6),
        ) {
            let vectors = vectors.into_iter().map(Vector::from_iter).collect_vec();
            let result = orthonormalize(&vectors);
            prop_assert_eq!(result.basis.len() + result.dropped.len(), vectors.len());
            prop_assert!(result.basis.len() <= 4);
            for (i, a) in result.basis.iter().enumerate() {
                prop_assert!(APPROX.eq(a.norm(), 1.0));
                for b in &result.basis[i + 1..] {
                    prop_assert!(a.dot(b).abs() < EPSILON);
                }
            }
        }
    }
}
