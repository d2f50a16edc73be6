//! Convex hull facets, polytope boundary representation, and the parameter
//! schemas that polytope builders declare.

mod hull;
pub mod params;
mod polytope;

pub use hull::{HullError, HullOracle, SupportingPlanes};
pub use params::{ParamError, ParamSchema, ParamSpec, ParamValue, Params, RawParams};
pub use polytope::Polytope;

/// Re-export of `polymath`.
pub use polymath;

/// Point in 3D space, as stored in a [`Polytope`].
pub type Point3 = [polymath::Float; 3];
