use polymath::BasisError;
use polyshape::{HullError, ParamError};

/// Result of building a polytope.
pub type BuildResult<T> = Result<T, BuildError>;

/// Error produced while building a polytope.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Parameters do not match the builder's schema, or a generated ID has
    /// malformed arguments.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),
    /// The point cloud has no 3D convex hull.
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] HullError),
    /// A projection basis lost rank, so the point cloud would not be 3D.
    #[error("{0}")]
    NumericRankLoss(#[from] BasisError),
    /// The requested builder does not exist.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Error produced when looking up or registering builders in a
/// [`Catalog`](crate::Catalog).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("no builder with ID {0:?}")]
    UnknownBuilder(String),
    #[error("builder with ID {0:?} already exists")]
    DuplicateBuilder(String),
    #[error(
        "invalid ID {0:?}; ID must be nonempty and \
         contain only alphanumeric characters and '_'"
    )]
    InvalidId(String),
}
