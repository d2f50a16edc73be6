//! Polyhedra given by closed-form or fixed coordinate lists.

use polymath::permutations;
use polymath::prelude::*;
use polyshape::Point3;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::orbit::sign_variants;

/// Golden ratio.
pub const PHI: Float = 1.618_033_988_749_895;

/// Platonic solid.
#[derive(Debug, Display, EnumString, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlatonicSolid {
    /// Regular tetrahedron.
    Tetrahedron,
    /// Cube.
    #[strum(to_string = "cube", serialize = "hexahedron")]
    Cube,
    /// Regular octahedron.
    Octahedron,
    /// Regular dodecahedron.
    Dodecahedron,
    /// Regular icosahedron.
    Icosahedron,
}

impl PlatonicSolid {
    /// Returns the vertices of the solid.
    pub fn vertices(self) -> Vec<Point3> {
        match self {
            PlatonicSolid::Tetrahedron => tetrahedron(),
            PlatonicSolid::Cube => cube(),
            PlatonicSolid::Octahedron => octahedron(),
            PlatonicSolid::Dodecahedron => dodecahedron(),
            PlatonicSolid::Icosahedron => icosahedron(),
        }
    }
}

/// Returns every sign variant of every cyclic shift of `point`.
fn cyclic_sign_variants(point: [Float; 3]) -> Vec<Point3> {
    permutations::even_permutations(&point)
        .iter()
        .flat_map(|p| sign_variants(p))
        .map(|v| v.to_array())
        .collect()
}

/// Returns the vertices of a regular tetrahedron inscribed in the unit cube.
pub fn tetrahedron() -> Vec<Point3> {
    vec![
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ]
}

/// Returns the vertices `(±1, ±1, ±1)` of a cube.
pub fn cube() -> Vec<Point3> {
    sign_variants(&[1.0; 3])
        .into_iter()
        .map(|v| v.to_array())
        .collect()
}

/// Returns the unit vectors along each axis in both directions.
pub fn octahedron() -> Vec<Point3> {
    vec![
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]
}

/// Returns the vertices of a regular dodecahedron: the cube `(±1, ±1, ±1)`
/// along with cyclic shifts of `(0, ±1/φ, ±φ)`.
pub fn dodecahedron() -> Vec<Point3> {
    let mut ret = cube();
    ret.extend(cyclic_sign_variants([0.0, 1.0 / PHI, PHI]));
    ret
}

/// Returns the vertices of a regular icosahedron: cyclic shifts of
/// `(0, ±1, ±φ)`.
pub fn icosahedron() -> Vec<Point3> {
    cyclic_sign_variants([0.0, 1.0, PHI])
}

/// Returns the points whose convex hull is the 3D multiplihedron.
///
/// Not every point is a vertex.
pub fn multiplihedron() -> Vec<Point3> {
    vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
        [2.0, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [0.0, 0.0, 2.0],
        [2.0, 2.0, 0.0],
        [2.0, 0.0, 2.0],
        [0.0, 2.0, 2.0],
        [3.0, 1.0, 1.0],
        [1.0, 3.0, 1.0],
        [1.0, 1.0, 3.0],
        [2.0, 2.0, 2.0],
    ]
}
