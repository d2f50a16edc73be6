//! Vertex generators.
//!
//! Each generator deterministically returns a point cloud. Points need not
//! all be vertices of their convex hull; the ones that are not are discarded
//! when a [`Polytope`](polyshape::Polytope) is constructed from them.
//! Generators that work in more than three dimensions project their output
//! into 3D and fail with [`BasisError`](polymath::BasisError) if the
//! projection basis is degenerate.

mod associahedron;
mod cyclohedron;
mod minkowski;
mod orbit;
mod roots;
mod solids;

pub use associahedron::{POLYGON_SIDES, Triangle, associahedron, triangulations};
pub use cyclohedron::{TUBING_COORDINATES, cyclohedron};
pub use minkowski::{minkowski_sum, stellahedron, uniform_matroid_points};
pub use orbit::{
    orbit_polytope, permutahedron, permutahedron_b3, permutation_orbit, sign_variants,
    signed_permutation_orbit,
};
pub use roots::RootSystem;
pub use solids::{
    PHI, PlatonicSolid, cube, dodecahedron, icosahedron, multiplihedron, octahedron, tetrahedron,
};
