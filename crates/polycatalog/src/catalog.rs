//! Catalog of polytope builders, along with a cache of built polytopes.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use polyshape::{Params, Polytope, RawParams};

use crate::{BuildResult, CatalogError, PolytopeBuilder};

/// Catalog of polytope builders.
///
/// The database is stored inside an `Arc<Mutex<T>>` so cloning this is cheap.
///
/// Every distinct set of parameters that is built successfully stays in the
/// cache until [`Catalog::clear_cache()`] is called, so the cache grows
/// without bound when building many different parameter sets. Long-running
/// callers should clear it periodically.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    db: Arc<Mutex<Db>>,
}

#[derive(Debug, Default)]
struct Db {
    /// Builders, sorted by ID.
    builders: BTreeMap<String, Arc<PolytopeBuilder>>,
    /// Built polytopes, indexed by canonical ID.
    polytopes: HashMap<String, Arc<Polytope>>,
}

impl Catalog {
    /// Constructs a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a builder to the catalog.
    pub fn add_builder(&self, builder: PolytopeBuilder) -> Result<(), CatalogError> {
        crate::validate_id(&builder.id)?;
        let mut db = self.db.lock();
        if db.builders.contains_key(&builder.id) {
            return Err(CatalogError::DuplicateBuilder(builder.id));
        }
        db.builders.insert(builder.id.clone(), Arc::new(builder));
        Ok(())
    }

    /// Returns the builder with the given ID, if it exists.
    pub fn get_builder(&self, id: &str) -> Option<Arc<PolytopeBuilder>> {
        self.db.lock().builders.get(id).map(Arc::clone)
    }

    /// Returns all builders, sorted by ID.
    pub fn builders(&self) -> Vec<Arc<PolytopeBuilder>> {
        self.db.lock().builders.values().map(Arc::clone).collect()
    }

    /// Builds a polytope using JSON parameters, or returns it from the cache
    /// if it has already been built with the same parameters. Omitted
    /// parameters take their default values.
    pub fn build(&self, id: &str, params: Option<&RawParams>) -> BuildResult<Arc<Polytope>> {
        let builder = self.builder_or_err(id)?;
        let params = builder.schema.validate(params)?;
        self.build_cached(&builder, params)
    }

    /// Builds a polytope from an ID such as `cube` or `root_polytope:H3`, or
    /// returns it from the cache if it has already been built.
    ///
    /// An ID without arguments uses the builder's default parameters.
    pub fn build_generated(&self, id: &str) -> BuildResult<Arc<Polytope>> {
        let (builder_id, args) = crate::parse_generated_id(id).unwrap_or((id, vec![]));
        let builder = self.builder_or_err(builder_id)?;
        let params = if args.is_empty() {
            builder.schema.defaults()
        } else {
            builder.schema.parse_args(&args)?
        };
        self.build_cached(&builder, params)
    }

    /// Removes all built polytopes from the cache.
    pub fn clear_cache(&self) {
        self.db.lock().polytopes.clear();
    }

    fn builder_or_err(&self, id: &str) -> Result<Arc<PolytopeBuilder>, CatalogError> {
        self.get_builder(id)
            .ok_or_else(|| CatalogError::UnknownBuilder(id.to_owned()))
    }

    fn build_cached(
        &self,
        builder: &PolytopeBuilder,
        params: Params,
    ) -> BuildResult<Arc<Polytope>> {
        let id = builder.canonical_id(&params);
        log::trace!("requesting polytope {id:?}");
        if let Some(polytope) = self.db.lock().polytopes.get(&id) {
            return Ok(Arc::clone(polytope));
        }

        // Do not hold the lock while building.
        log::trace!("building polytope {id:?}");
        let polytope = Arc::new(builder.build_with(params)?);

        log::trace!("storing polytope {id:?}");
        let mut db = self.db.lock();
        Ok(Arc::clone(db.polytopes.entry(id).or_insert(polytope)))
    }
}
