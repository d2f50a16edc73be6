//! Convex hull facet enumeration for 3D point clouds.

use float_ord::FloatOrd;
use itertools::Itertools;
use polymath::approx_collections::hash_map::Entry;
use polymath::prelude::*;

use crate::Point3;

/// Error produced when a point cloud has no well-defined 3D convex hull.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum HullError {
    #[error("convex hull requires at least 4 distinct points; got {count}")]
    TooFewPoints { count: usize },
    #[error("all points are coplanar")]
    Coplanar,
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Computes the maximal facets of the convex hull of a 3D point cloud.
pub trait HullOracle {
    /// Returns the facets of the convex hull of `points`. Each facet is a
    /// cyclic sequence of indices into `points`, counterclockwise when seen
    /// from outside the hull. Facets are not triangulated.
    fn facets(&self, points: &[Point3]) -> Result<Vec<Vec<usize>>, HullError>;
}

/// Hull oracle that finds every supporting plane through three points of the
/// cloud.
///
/// Facets contain only their corners: points strictly inside a facet or on
/// one of its edges are omitted. When several input points coincide, only the
/// first is used.
///
/// Points are compared after translating and scaling the cloud to unit size,
/// so the result is the same regardless of the units of the input.
///
/// This takes `O(n^4)` time, which is fine for polytopes with up to a few
/// hundred vertices.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SupportingPlanes;

impl HullOracle for SupportingPlanes {
    fn facets(&self, points: &[Point3]) -> Result<Vec<Vec<usize>>, HullError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(HullError::NonFinite { index });
        }

        let unit = to_unit_scale(points);

        let mut seen = ApproxHashMap::new(APPROX);
        let mut distinct = vec![];
        for (i, &p) in unit.iter().enumerate() {
            if let Entry::Vacant(e) = seen.entry(p) {
                e.insert(());
                distinct.push(i);
            }
        }
        if distinct.len() < 4 {
            return Err(HullError::TooFewPoints {
                count: distinct.len(),
            });
        }

        let cloud = || distinct.iter().map(|&i| unit[i]);

        let mut seen_planes = ApproxHashMap::new(APPROX);
        let mut planes = vec![];
        for (&a, &b, &c) in distinct.iter().tuple_combinations() {
            let normal =
                (unit[b].to_vector() - unit[a]).cross_product_3d(unit[c].to_vector() - unit[a]);
            let Some(plane) = Hyperplane::through_point(normal, unit[a]) else {
                continue; // collinear
            };
            let plane = match plane.location_of_points(cloud(), APPROX) {
                WhichSide::Flush => return Err(HullError::Coplanar),
                WhichSide::Split => continue,
                WhichSide::Inside => plane,
                WhichSide::Outside => plane.flip(),
            };
            if let Entry::Vacant(e) = seen_planes.entry(plane.clone()) {
                e.insert(());
                planes.push(plane);
            }
        }
        if planes.is_empty() {
            // Every triple was collinear.
            return Err(HullError::Coplanar);
        }

        let facets = planes
            .iter()
            .map(|plane| {
                let on_plane = distinct
                    .iter()
                    .copied()
                    .filter(|&i| plane.location_of_point(unit[i], APPROX) == PointWhichSide::On)
                    .collect_vec();
                facet_boundary(&unit, &on_plane, plane.normal())
            })
            .collect_vec();
        log::trace!(
            "found {} facets on hull of {} points ({} distinct)",
            facets.len(),
            points.len(),
            distinct.len(),
        );
        Ok(facets)
    }
}

/// Translates and scales `points` so that their centroid is at the origin and
/// every coordinate is within `[-1, 1]`. Comparisons made on the result do not
/// depend on the size or position of the original cloud.
fn to_unit_scale(points: &[Point3]) -> Vec<Point3> {
    let center: Point3 = points.iter().collect::<Centroid>().center().to_array();
    let centered: Vec<Point3> = points
        .iter()
        .map(|p| std::array::from_fn(|i| p[i] - center[i]))
        .collect();
    let extent = centered
        .iter()
        .flatten()
        .fold(0.0, |a: Float, x| a.max(x.abs()));
    if extent == 0.0 {
        return centered;
    }
    centered
        .into_iter()
        .map(|p| p.map(|x| x / extent))
        .collect()
}

/// Returns the corners of the convex polygon formed by `indices`, which all
/// lie in a plane with the given normal, ordered counterclockwise as seen from
/// the side the normal points toward.
///
/// The polygon's corners are found using Andrew's monotone chain algorithm.
fn facet_boundary(points: &[Point3], indices: &[usize], normal: &Vector) -> Vec<usize> {
    // Pick the axis least aligned with the normal to build an in-plane basis
    // `(u, v)` such that `u × v = normal`.
    let axis = (0..3)
        .min_by_key(|&i| FloatOrd(normal.get(i).abs()))
        .unwrap_or(0);
    let Some(u) = normal.cross_product_3d(Vector::unit(axis)).normalize() else {
        return indices.to_vec();
    };
    let v = normal.cross_product_3d(&u);

    let mut planar: Vec<Planar> = indices
        .iter()
        .map(|&i| (i, points[i].dot(&u), points[i].dot(&v)))
        .collect();
    planar.sort_by_key(|&(_, x, y)| (FloatOrd(x), FloatOrd(y)));

    let lower = half_hull(planar.iter().copied());
    let upper = half_hull(planar.iter().rev().copied());
    lower
        .into_iter()
        .chain(upper)
        .map(|(i, _, _)| i)
        .collect()
}

/// Point index along with its coordinates in a plane.
type Planar = (usize, Float, Float);

/// Returns one half of a planar convex hull, given points sorted along a
/// sweep direction. Collinear points are dropped. The last point is omitted
/// because it begins the other half.
fn half_hull(sorted: impl Iterator<Item = Planar>) -> Vec<Planar> {
    // Positive when `o -> a -> b` turns counterclockwise.
    let turn = |o: Planar, a: Planar, b: Planar| {
        (a.1 - o.1) * (b.2 - o.2) - (a.2 - o.2) * (b.1 - o.1)
    };

    let mut ret: Vec<Planar> = vec![];
    for p in sorted {
        while let [.., o, a] = ret[..] {
            if APPROX.is_pos(turn(o, a, p)) {
                break;
            }
            ret.pop();
        }
        ret.push(p);
    }
    ret.pop();
    ret
}
