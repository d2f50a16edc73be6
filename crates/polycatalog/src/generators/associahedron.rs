//! Associahedron from triangulations of a convex polygon.

use std::f64::consts::TAU;

use polymath::basis;
use polymath::prelude::*;
use polyshape::Point3;

/// Number of sides of the polygon whose triangulations index the vertices of
/// the 3D associahedron.
pub const POLYGON_SIDES: u8 = 6;

/// Triangle in a polygon triangulation, as polygon vertex indices `[i, k, j]`
/// with `i < k < j`.
pub type Triangle = [usize; 3];

/// Returns every triangulation of the convex polygon with vertices
/// `i..=j`.
///
/// Each triangulation uses some triangle `[i, k, j]` for `i < k < j`, splitting
/// the rest of the polygon into `i..=k` and `k..=j`. The number of
/// triangulations of an `n`-gon is the Catalan number `C(n - 2)`.
pub fn triangulations(i: usize, j: usize) -> Vec<Vec<Triangle>> {
    if j <= i + 1 {
        return vec![vec![]];
    }
    let mut ret = vec![];
    for k in i + 1..j {
        let right = triangulations(k, j);
        for left in triangulations(i, k) {
            for r in &right {
                let mut t = left.clone();
                t.extend_from_slice(r);
                t.push([i, k, j]);
                ret.push(t);
            }
        }
    }
    ret
}

/// Returns the vertices of the 3D associahedron.
///
/// Each triangulation of a hexagon inscribed in the unit circle gives a
/// weight vector in `R^6`, whose `i`th component is the total area of the
/// triangles touching polygon vertex `i`. The weight vectors are centered on
/// their centroid and then projected into 3D.
pub fn associahedron() -> Result<Vec<Point3>, BasisError> {
    let n = POLYGON_SIDES as usize;
    let polygon: Vec<[Float; 2]> = (0..n)
        .map(|i| {
            let angle = TAU * i as Float / n as Float;
            [angle.cos(), angle.sin()]
        })
        .collect();

    let weights: Vec<Vector> = triangulations(0, n - 1)
        .iter()
        .map(|triangulation| {
            let mut w = Vector::zero(POLYGON_SIDES);
            for &[i, k, j] in triangulation {
                let area = triangle_area(polygon[i], polygon[k], polygon[j]);
                for v in [i, k, j] {
                    w[v as u8] += area;
                }
            }
            w
        })
        .collect();

    let center = weights.iter().collect::<Centroid>().center();
    let centered = weights.iter().map(|w| w - &center);
    basis::project_to_3d(centered, basis::consecutive_differences(POLYGON_SIDES - 3))
}

fn triangle_area(a: [Float; 2], b: [Float; 2], c: [Float; 2]) -> Float {
    ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
}
