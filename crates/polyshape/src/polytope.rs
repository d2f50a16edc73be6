//! Boundary representation of a convex 3D polytope.

use indexmap::IndexSet;
use itertools::Itertools;
use polymath::prelude::*;
use serde::Serialize;

use crate::{HullError, HullOracle, ParamSchema, Params, Point3, SupportingPlanes};

/// Convex 3D polytope: vertices, facets, edges, and centroid, along with the
/// name and parameters of the builder that produced it.
///
/// Every vertex is a corner of the convex hull; points passed to the
/// constructor that are not corners are discarded. Faces are cyclic sequences
/// of vertex indices, counterclockwise when seen from outside. Edges are
/// derived from faces and stored as `[min, max]` pairs in the order they are
/// first encountered.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Polytope {
    name: String,
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
    edges: Vec<[usize; 2]>,
    center: Point3,
    parameters: Params,
    parameter_schema: ParamSchema,
}

impl Polytope {
    /// Constructs the convex hull of `points` using [`SupportingPlanes`].
    pub fn new(
        name: impl Into<String>,
        points: &[Point3],
        parameters: Params,
        parameter_schema: ParamSchema,
    ) -> Result<Self, HullError> {
        Self::with_oracle(&SupportingPlanes, name, points, parameters, parameter_schema)
    }

    /// Constructs the convex hull of `points` using a custom hull oracle.
    pub fn with_oracle(
        oracle: &impl HullOracle,
        name: impl Into<String>,
        points: &[Point3],
        parameters: Params,
        parameter_schema: ParamSchema,
    ) -> Result<Self, HullError> {
        let name = name.into();
        let hull_faces = oracle.facets(points)?;

        // Keep only points used by some face, in input order.
        let mut used = vec![false; points.len()];
        for &i in hull_faces.iter().flatten() {
            if let Some(u) = used.get_mut(i) {
                *u = true;
            }
        }
        let mut vertices = vec![];
        let mut new_index = vec![None; points.len()];
        for (i, &p) in points.iter().enumerate() {
            if used[i] {
                new_index[i] = Some(vertices.len());
                vertices.push(p);
            }
        }
        let faces: Vec<Vec<usize>> = hull_faces
            .iter()
            .map(|face| {
                face.iter()
                    .filter_map(|&i| new_index.get(i).copied().flatten())
                    .collect()
            })
            .collect();
        if vertices.len() < points.len() {
            log::debug!(
                "{name}: discarded {} of {} points that are not hull vertices",
                points.len() - vertices.len(),
                points.len(),
            );
        }

        let mut edges = IndexSet::new();
        for face in &faces {
            for (&a, &b) in face.iter().circular_tuple_windows() {
                edges.insert([a.min(b), a.max(b)]);
            }
        }

        let center = vertices.iter().collect::<Centroid>().center().to_array();

        Ok(Self {
            name,
            vertices,
            faces,
            edges: edges.into_iter().collect(),
            center,
            parameters,
            parameter_schema,
        })
    }

    /// Returns the name of the builder that produced the polytope.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the vertices of the polytope.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }
    /// Returns the faces of the polytope, each a cyclic sequence of vertex
    /// indices.
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }
    /// Returns the edges of the polytope, each as `[min, max]`.
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }
    /// Returns the arithmetic mean of the vertices.
    pub fn center(&self) -> Point3 {
        self.center
    }
    /// Returns the validated parameters the polytope was built with.
    pub fn parameters(&self) -> &Params {
        &self.parameters
    }
    /// Returns the parameter schema of the builder that produced the
    /// polytope.
    pub fn parameter_schema(&self) -> &ParamSchema {
        &self.parameter_schema
    }

    /// Returns `V - E + F`, which is 2 for every convex polyhedron.
    pub fn euler_characteristic(&self) -> isize {
        self.vertices.len() as isize - self.edges.len() as isize + self.faces.len() as isize
    }

    /// Fan-triangulates every face around its first vertex. A face with `n`
    /// vertices yields `n - 2` triangles; faces with fewer than 3 vertices
    /// yield none.
    pub fn triangulate(&self) -> Vec<[usize; 3]> {
        self.faces
            .iter()
            .filter_map(|face| face.split_first())
            .flat_map(|(&pivot, rest)| rest.windows(2).map(move |w| [pivot, w[0], w[1]]))
            .collect()
    }
}
