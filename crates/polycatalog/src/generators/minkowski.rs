//! Minkowski sums of point sets.

use polymath::prelude::*;
use polyshape::Point3;

/// Returns the Minkowski sum `{a + b : a ∈ A, b ∈ B}` of all the operands,
/// folded from left to right.
///
/// Approximately equal points are merged after each step, keeping the first
/// occurrence, so the intermediate sets stay small. The sum of no operands is
/// empty.
pub fn minkowski_sum(operands: &[Vec<Vector>]) -> Vec<Vector> {
    let Some((first, rest)) = operands.split_first() else {
        return vec![];
    };
    rest.iter().fold(dedup(first.iter().cloned()), |acc, operand| {
        dedup(acc.iter().flat_map(|a| operand.iter().map(move |b| a + b)))
    })
}

/// Returns the points in `iter`, skipping any that are approximately equal to
/// an earlier one.
fn dedup(iter: impl IntoIterator<Item = Vector>) -> Vec<Vector> {
    let mut seen = ApproxHashMap::new(APPROX);
    iter.into_iter()
        .filter(|v| seen.insert(v.clone(), ()).is_none())
        .collect()
}

/// Returns the 0/1 vectors in `R^3` with at most `rank` ones, which are the
/// vertices of the independence polytope of the uniform matroid `U(rank, 3)`.
pub fn uniform_matroid_points(rank: usize) -> Vec<Vector> {
    (0..8_u8)
        .filter(|bits| bits.count_ones() as usize <= rank)
        .map(|bits| (0..3).map(|i| Float::from((bits >> i) & 1)).collect())
        .collect()
}

/// Returns the points whose convex hull is the 3D stellahedron: the Minkowski
/// sum of the independence polytopes of `U(1, 3)`, `U(2, 3)`, and `U(3, 3)`.
pub fn stellahedron() -> Vec<Point3> {
    let operands = (1..=3).map(uniform_matroid_points).collect::<Vec<_>>();
    minkowski_sum(&operands)
        .into_iter()
        .map(|v| v.to_array())
        .collect()
}
