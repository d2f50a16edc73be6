//! Orbits of a point under coordinate permutations and sign changes.

use itertools::Itertools;
use polymath::prelude::*;
use polymath::{basis, permutations};
use polyshape::Point3;

/// Returns every distinct ordering of the coordinates of `point`.
///
/// The number of points is the multinomial coefficient of the coordinate
/// multiplicities: 24 for `[1, 2, 3, 4]` but only 12 for `[1, 2, 2, 3]`.
pub fn permutation_orbit(point: &[Float]) -> Vec<Vector> {
    permutations::distinct_permutations(point)
        .into_iter()
        .map(Vector::from_iter)
        .collect()
}

/// Returns every combination of signs for the nonzero coordinates of
/// `point`. Zero coordinates are left alone, so no duplicates are produced.
pub fn sign_variants(point: &[Float]) -> Vec<Vector> {
    let nonzero = point.iter().positions(|&x| x != 0.0).collect_vec();
    permutations::sign_assignments(nonzero.len())
        .map(|signs| {
            let mut ret = point.to_vector();
            for (&i, s) in std::iter::zip(&nonzero, signs) {
                ret[i as u8] *= s;
            }
            ret
        })
        .collect()
}

/// Returns the orbit of `point` under the hyperoctahedral group: every
/// distinct permutation of its coordinates combined with every sign change.
pub fn signed_permutation_orbit(point: &[Float]) -> Vec<Vector> {
    permutation_orbit(point)
        .iter()
        .flat_map(|p| sign_variants(&p.0))
        .collect()
}

/// Returns the permutation orbit of a 4D point, projected from the zero-sum
/// hyperplane of `R^4` into 3D.
pub fn orbit_polytope(point: &[Float]) -> Result<Vec<Point3>, BasisError> {
    let ndim = u8::try_from(point.len()).unwrap_or(u8::MAX);
    basis::project_to_3d(permutation_orbit(point), basis::anchored_differences(ndim))
}

/// Returns the vertices of the permutahedron: the orbit of `[1, 2, 3, 4]`,
/// projected into 3D.
pub fn permutahedron() -> Result<Vec<Point3>, BasisError> {
    let orbit = permutation_orbit(&[1.0, 2.0, 3.0, 4.0]);
    basis::project_to_3d(orbit, basis::consecutive_differences(3))
}

/// Returns the vertices of the type-B permutahedron: the signed permutation
/// orbit of `[1, 2, 3]`, centered at the origin.
pub fn permutahedron_b3() -> Vec<Point3> {
    let orbit = signed_permutation_orbit(&[1.0, 2.0, 3.0]);
    let center = orbit.iter().collect::<Centroid>().center();
    orbit.iter().map(|p| (p - &center).to_array()).collect()
}

#[cfg(test)]
mod tests {
    use polymath::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_permutation_orbit() {
        assert_eq!(permutation_orbit(&[1.0, 2.0, 3.0, 4.0]).len(), 24);
        assert_eq!(permutation_orbit(&[1.0, 2.0, 2.0, 3.0]).len(), 12);
        assert_eq!(permutation_orbit(&[5.0; 4]), vec![vector![5.0; 4]]);

        let orbit = permutation_orbit(&[2.0, 1.0, 1.0]);
        assert_eq!(
            orbit,
            vec![
                vector![1.0, 1.0, 2.0],
                vector![1.0, 2.0, 1.0],
                vector![2.0, 1.0, 1.0],
            ],
        );
    }

    #[test]
    fn test_sign_variants() {
        assert_eq!(
            sign_variants(&[0.0, 1.0, 2.0]),
            vec![
                vector![0.0, -1.0, -2.0],
                vector![0.0, -1.0, 2.0],
                vector![0.0, 1.0, -2.0],
                vector![0.0, 1.0, 2.0],
            ],
        );
        assert_eq!(sign_variants(&[0.0, 0.0]), vec![vector![0.0, 0.0]]);
    }

    #[test]
    fn test_signed_permutation_orbit() {
        assert_eq!(signed_permutation_orbit(&[1.0, 2.0, 3.0]).len(), 48);
        // Cuboctahedron
        assert_eq!(signed_permutation_orbit(&[0.0, 1.0, 1.0]).len(), 12);
        // Octahedron
        assert_eq!(signed_permutation_orbit(&[0.0, 0.0, 1.0]).len(), 6);
    }

    #[test]
    fn test_orbit_polytope_preserves_distances() {
        let point = [1.0, 2.0, 2.0, 3.0];
        let orbit = permutation_orbit(&point);
        let projected = orbit_polytope(&point).unwrap();
        assert_eq!(projected.len(), 12);
        // Every orbit point lies in a hyperplane parallel to the zero-sum
        // hyperplane, so projection is an isometry.
        for ((i, a), (j, b)) in orbit.iter().enumerate().tuple_combinations() {
            assert_approx_eq!(a.distance_to(b), projected[i].distance_to(projected[j]));
        }
    }

    #[test]
    fn test_permutahedron_b3_is_centered() {
        let points = permutahedron_b3();
        assert_eq!(points.len(), 48);
        let sum: Vector = points.iter().sum();
        assert!(sum.norm() < 1e-9);
    }
}
