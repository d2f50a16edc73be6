//! Root systems of rank 3.

use itertools::Itertools;
use polymath::prelude::*;
use polymath::basis;
use polyshape::Point3;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::solids;

/// Root system of rank 3, whose roots are the vertices of a root polytope.
#[derive(Debug, Display, EnumString, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RootSystem {
    /// Roots `±(e_i - e_j)` in `R^4`, projected into 3D. The root polytope is
    /// a cuboctahedron.
    A3,
    /// Short roots `±e_i` and long roots `±e_i ± e_j`.
    B3,
    /// Long roots `±2e_i`, short roots `±e_i ± e_j`, along with `±e_i`.
    C3,
    /// Roots `±e_i ± e_j`.
    D3,
    /// Midpoints of the edges of an icosahedron. The root polytope is an
    /// icosidodecahedron.
    H3,
}

impl RootSystem {
    /// Returns the roots as 3D points.
    pub fn roots(self) -> Result<Vec<Point3>, BasisError> {
        Ok(match self {
            RootSystem::A3 => {
                let roots = (0..4_u8)
                    .tuple_combinations()
                    .flat_map(|(i, j)| {
                        let (ei, ej) = (Vector::unit(i), Vector::unit(j));
                        [&ei - &ej, &ej - &ei]
                    })
                    .map(|v| v.pad(4));
                return basis::project_to_3d(roots, basis::consecutive_differences(3));
            }
            RootSystem::B3 => [signed_axes(1.0), signed_pairs()].concat(),
            RootSystem::C3 => [signed_axes(2.0), signed_pairs(), signed_axes(1.0)].concat(),
            RootSystem::D3 => signed_pairs(),
            RootSystem::H3 => edge_midpoints(&solids::icosahedron()),
        })
    }
}

/// Returns `±scale * e_i` for each axis.
fn signed_axes(scale: Float) -> Vec<Point3> {
    (0..3)
        .flat_map(|i| {
            [scale, -scale].map(|x| {
                let mut v = [0.0; 3];
                v[i] = x;
                v
            })
        })
        .collect()
}

/// Returns `±e_i ± e_j` for each pair of axes `i < j`.
fn signed_pairs() -> Vec<Point3> {
    let signs = [-1.0, 1.0];
    (0..3)
        .tuple_combinations()
        .flat_map(|(i, j)| {
            itertools::iproduct!(signs, signs).map(move |(si, sj)| {
                let mut v = [0.0; 3];
                v[i] = si;
                v[j] = sj;
                v
            })
        })
        .collect()
}

/// Returns the midpoints of the shortest segments between points, which for
/// a regular polytope are its edges.
///
/// Distances approximately zero are ignored, and every pair approximately at
/// the shortest distance counts.
fn edge_midpoints(points: &[Point3]) -> Vec<Point3> {
    let edge_length = points
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.distance_to(b))
        .filter(|&d| APPROX.is_pos(d))
        .fold(Float::INFINITY, Float::min);
    points
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| APPROX.eq(a.distance_to(b), edge_length))
        .map(|(a, b)| std::array::from_fn(|i| (a[i] + b[i]) / 2.0))
        .collect()
}
