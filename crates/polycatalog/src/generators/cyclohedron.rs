//! Cyclohedron from tubings of a cycle graph.

use polymath::basis;
use polymath::prelude::*;
use polyshape::Point3;

/// Coordinates in `R^4` of the vertices of the 3D cyclohedron, one for each
/// maximal tubing of the cycle graph on 4 nodes.
pub const TUBING_COORDINATES: [[Float; 4]; 20] = [
    [0.0, 1.0, 2.0, 3.0],
    [0.0, 1.0, 3.0, 2.0],
    [0.0, 2.0, 1.0, 2.0],
    [0.0, 2.0, 3.0, 1.0],
    [0.0, 3.0, 2.0, 1.0],
    [1.0, 0.0, 2.0, 3.0],
    [1.0, 0.0, 3.0, 2.0],
    [1.0, 2.0, 0.0, 2.0],
    [1.0, 2.0, 3.0, 0.0],
    [1.0, 3.0, 2.0, 0.0],
    [2.0, 0.0, 1.0, 3.0],
    [2.0, 0.0, 2.0, 1.0],
    [2.0, 1.0, 0.0, 3.0],
    [2.0, 1.0, 2.0, 0.0],
    [2.0, 3.0, 0.0, 1.0],
    [2.0, 3.0, 1.0, 0.0],
    [3.0, 0.0, 1.0, 2.0],
    [3.0, 1.0, 0.0, 2.0],
    [3.0, 2.0, 0.0, 1.0],
    [3.0, 2.0, 1.0, 0.0],
];

/// Returns the vertices of the 3D cyclohedron.
///
/// Each tuple is shifted so that its coordinates sum to zero and then
/// projected into 3D.
pub fn cyclohedron() -> Result<Vec<Point3>, BasisError> {
    let centered = TUBING_COORDINATES.iter().map(|tuple| {
        let mean = tuple.iter().sum::<Float>() / tuple.len() as Float;
        tuple.map(|x| x - mean)
    });
    basis::project_to_3d(centered, basis::consecutive_differences(3))
}
