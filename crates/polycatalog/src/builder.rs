use std::fmt;

use polyshape::{ParamSchema, Params, Point3, Polytope, RawParams};

use crate::BuildResult;

/// Function that constructs the point cloud for a polytope from validated
/// parameters.
pub type ConstructFn = Box<dyn Send + Sync + Fn(&Params) -> BuildResult<Vec<Point3>>>;

/// Polytope builder: a named construction along with the parameters it
/// accepts.
pub struct PolytopeBuilder {
    /// Internal ID.
    pub id: String,
    /// Human-friendly name, which is also the name of every polytope built.
    pub name: String,
    /// Parameter types and defaults.
    pub schema: ParamSchema,
    /// Function to construct the point cloud.
    pub construct: ConstructFn,
}
impl fmt::Debug for PolytopeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolytopeBuilder")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish()
    }
}

impl PolytopeBuilder {
    /// Constructs a builder.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        schema: ParamSchema,
        construct: impl 'static + Send + Sync + Fn(&Params) -> BuildResult<Vec<Point3>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            schema,
            construct: Box::new(construct),
        }
    }

    /// Constructs a builder with no parameters.
    pub fn fixed(
        id: impl Into<String>,
        name: impl Into<String>,
        construct: impl 'static + Send + Sync + Fn() -> BuildResult<Vec<Point3>>,
    ) -> Self {
        Self::new(id, name, ParamSchema::new(), move |_| construct())
    }

    /// Validates JSON parameters and builds a polytope.
    pub fn build(&self, raw: Option<&RawParams>) -> BuildResult<Polytope> {
        let params = self.schema.validate(raw)?;
        self.build_with(params)
    }

    /// Builds a polytope from parameters that have already been validated
    /// against the schema.
    pub fn build_with(&self, params: Params) -> BuildResult<Polytope> {
        let points = (self.construct)(&params)?;
        log::debug!("building {} from {} points", self.canonical_id(&params), points.len());
        Ok(Polytope::new(&self.name, &points, params, self.schema.clone())?)
    }

    /// Returns the ID of the polytope built with `params`: the builder ID,
    /// followed by the parameters as arguments if there are any.
    pub fn canonical_id(&self, params: &Params) -> String {
        if params.is_empty() {
            self.id.clone()
        } else {
            crate::generated_id(&self.id, params.to_args())
        }
    }
}
