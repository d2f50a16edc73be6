//! Catalog of convex polytope builders: Platonic solids, permutahedra, root
//! polytopes, and a few polytopes from combinatorics.
//!
//! # Example
//!
//! ```rust
//! let cube = polycatalog::build_cube().unwrap();
//! assert_eq!(8, cube.vertices().len());
//!
//! let h3 = polycatalog::catalog().build_generated("root_polytope:H3").unwrap();
//! assert_eq!("Root Polytope", h3.name());
//! assert_eq!(30, h3.vertices().len());
//! ```

#[macro_use]
extern crate lazy_static;

use std::sync::Arc;

use parking_lot::Mutex;

mod builder;
mod builtins;
mod catalog;
mod error;
pub mod generators;

pub use builder::{ConstructFn, PolytopeBuilder};
pub use builtins::*;
pub use catalog::Catalog;
pub use error::{BuildError, BuildResult, CatalogError};
/// Re-export of `polyshape`.
pub use polyshape;
pub use polyshape::{ParamError, ParamSchema, ParamSpec, Params, Polytope, RawParams};

lazy_static! {
    /// Global catalog.
    ///
    /// Even though [`Catalog`] already contains an `Arc<Mutex<T>>` internally,
    /// we use another layer of `Arc<Mutex<Catalog>>` here so that we can reset
    /// the catalog without interfering with old references to it.
    static ref CATALOG: Arc<Mutex<Catalog>> = Arc::new(Mutex::new(new_builtin_catalog()));
}

/// Returns the global catalog, which contains every built-in builder.
///
/// Polytopes built through the global catalog are cached until
/// [`Catalog::clear_cache()`] or [`load_global_catalog()`] is called; nothing
/// evicts them automatically.
pub fn catalog() -> Catalog {
    CATALOG.lock().clone()
}

/// Reloads the built-in builders into the global catalog and clears the
/// cache.
pub fn load_global_catalog() {
    *CATALOG.lock() = new_builtin_catalog();
}

fn new_builtin_catalog() -> Catalog {
    let catalog = Catalog::new();
    load_builtins(&catalog);
    catalog
}

/// Parses a generated ID into its components: the builder ID and the
/// arguments. Returns `None` if the ID has no arguments.
pub fn parse_generated_id(id: &str) -> Option<(&str, Vec<&str>)> {
    let (builder_id, args) = id.split_once(':')?;
    Some((builder_id, args.split(',').collect()))
}

/// Returns the generated ID for a builder with the given arguments.
pub fn generated_id(builder_id: &str, args: impl IntoIterator<Item = impl ToString>) -> String {
    let mut ret = builder_id.to_owned();
    let mut is_first = true;
    for arg in args {
        ret += if is_first { ":" } else { "," };
        is_first = false;
        ret += &arg.to_string();
    }
    ret
}

/// Validates a builder ID.
pub fn validate_id(s: &str) -> Result<(), CatalogError> {
    if !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(CatalogError::InvalidId(s.to_owned()))
    }
}

#[cfg(test)]
mod tests;
