//! N-dimensional vectors, tolerant float comparison, orthonormal bases, and
//! permutation enumeration used to generate polytope vertex clouds.

pub use {approx, approx_collections, smallvec};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for geometric comparisons.
pub const EPSILON: Float = 0.000001;

/// Default precision for approximate comparison and hashing, which considers
/// values equal if they agree to about 20 binary digits. Near zero this is
/// about [`EPSILON`].
pub const APPROX: Precision = Precision::new_simple(20);

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod vector;

pub mod basis;
pub mod centroid;
pub mod hyperplane;
pub mod permutations;
pub mod which_side;

/// Structs, traits, and constants.
pub mod prelude {
    pub use approx_collections::{ApproxEq, ApproxEqZero, ApproxHash, ApproxHashMap, Precision};

    pub use crate::basis::{BasisError, Orthonormalized, Projection};
    pub use crate::centroid::Centroid;
    pub use crate::hyperplane::Hyperplane;
    pub use crate::permutations;
    pub use crate::vector::*;
    pub use crate::which_side::*;
    pub use crate::{APPROX, EPSILON, Float, vector};
}
pub use prelude::*;
