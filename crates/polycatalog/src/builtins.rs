//! Built-in polytope builders.

use std::sync::Arc;

use polymath::Float;
use polyshape::{ParamSchema, ParamSpec, Polytope, RawParams};
use strum::IntoEnumIterator;

use crate::generators::{self, PlatonicSolid, RootSystem};
use crate::{BuildResult, Catalog, PolytopeBuilder};

/// Default point for [`build_orbit_polytope()`].
pub const DEFAULT_ORBIT_POINT: [Float; 4] = [1.0, 2.0, 2.0, 3.0];

/// Adds every built-in builder to a catalog.
pub fn load_builtins(catalog: &Catalog) {
    for builder in builtin_builders() {
        if let Err(e) = catalog.add_builder(builder) {
            log::error!("error loading built-in polytope builder: {e}");
        }
    }
}

/// Returns every built-in builder.
pub fn builtin_builders() -> Vec<PolytopeBuilder> {
    vec![
        PolytopeBuilder::fixed("tetrahedron", "Tetrahedron", || Ok(generators::tetrahedron())),
        PolytopeBuilder::fixed("cube", "Cube", || Ok(generators::cube())),
        PolytopeBuilder::fixed("octahedron", "Octahedron", || Ok(generators::octahedron())),
        PolytopeBuilder::fixed("dodecahedron", "Dodecahedron", || {
            Ok(generators::dodecahedron())
        }),
        PolytopeBuilder::fixed("icosahedron", "Icosahedron", || {
            Ok(generators::icosahedron())
        }),
        PolytopeBuilder::new(
            "platonic_solid",
            "Platonic Solids",
            platonic_solid_schema(),
            |params| Ok(params.parse_choice::<PlatonicSolid>("type")?.vertices()),
        ),
        PolytopeBuilder::fixed("permutahedron", "Permutahedron", || {
            Ok(generators::permutahedron()?)
        }),
        PolytopeBuilder::fixed("permutahedron_b3", "Type B Permutahedron", || {
            Ok(generators::permutahedron_b3())
        }),
        PolytopeBuilder::new(
            "orbit_polytope",
            "Orbit Polytope",
            orbit_polytope_schema(),
            |params| Ok(generators::orbit_polytope(params.vector("point")?)?),
        ),
        PolytopeBuilder::new(
            "root_polytope",
            "Root Polytope",
            root_polytope_schema(),
            |params| Ok(params.parse_choice::<RootSystem>("type")?.roots()?),
        ),
        PolytopeBuilder::fixed("associahedron", "Associahedron", || {
            Ok(generators::associahedron()?)
        }),
        PolytopeBuilder::fixed("cyclohedron", "Cyclohedron", || {
            Ok(generators::cyclohedron()?)
        }),
        PolytopeBuilder::fixed("stellahedron", "Stellahedron", || {
            Ok(generators::stellahedron())
        }),
        PolytopeBuilder::fixed("multiplihedron", "Multiplihedron", || {
            Ok(generators::multiplihedron())
        }),
    ]
}

fn platonic_solid_schema() -> ParamSchema {
    ParamSchema::new().with(
        "type",
        ParamSpec::dropdown(
            "Platonic Type",
            "Choose which of the five Platonic solids to build",
            PlatonicSolid::iter(),
            PlatonicSolid::Cube.to_string(),
        )
        .with_alias("hexahedron", PlatonicSolid::Cube),
    )
}

fn orbit_polytope_schema() -> ParamSchema {
    ParamSchema::new().with(
        "point",
        ParamSpec::vector(
            "Orbit Point",
            "Initial vector whose orbit under Sₙ defines the polytope, then projected to 3D",
            DEFAULT_ORBIT_POINT,
        ),
    )
}

fn root_polytope_schema() -> ParamSchema {
    ParamSchema::new().with(
        "type",
        ParamSpec::dropdown(
            "Root System",
            "Select a 3D root system",
            RootSystem::iter(),
            RootSystem::A3.to_string(),
        ),
    )
}

/// Builds a regular tetrahedron using the global catalog.
pub fn build_tetrahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("tetrahedron", None)
}
/// Builds the cube `(±1, ±1, ±1)` using the global catalog.
pub fn build_cube() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("cube", None)
}
/// Builds a regular octahedron with unit vertices using the global catalog.
pub fn build_octahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("octahedron", None)
}
/// Builds a regular dodecahedron using the global catalog.
pub fn build_dodecahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("dodecahedron", None)
}
/// Builds a regular icosahedron using the global catalog.
pub fn build_icosahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("icosahedron", None)
}
/// Builds a Platonic solid chosen by the `type` parameter using the global
/// catalog.
pub fn build_platonic_solid(params: Option<&RawParams>) -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("platonic_solid", params)
}
/// Builds the permutahedron using the global catalog.
pub fn build_permutahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("permutahedron", None)
}
/// Builds the type-B permutahedron using the global catalog.
pub fn build_permutahedron_b3() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("permutahedron_b3", None)
}
/// Builds the orbit polytope of the 4D `point` parameter using the global
/// catalog.
pub fn build_orbit_polytope(params: Option<&RawParams>) -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("orbit_polytope", params)
}
/// Builds the root polytope of the root system chosen by the `type`
/// parameter using the global catalog.
pub fn build_root_polytope(params: Option<&RawParams>) -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("root_polytope", params)
}
/// Builds the 3D associahedron using the global catalog.
pub fn build_associahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("associahedron", None)
}
/// Builds the 3D cyclohedron using the global catalog.
pub fn build_cyclohedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("cyclohedron", None)
}
/// Builds the 3D stellahedron using the global catalog.
pub fn build_stellahedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("stellahedron", None)
}
/// Builds the 3D multiplihedron using the global catalog.
pub fn build_multiplihedron() -> BuildResult<Arc<Polytope>> {
    crate::catalog().build("multiplihedron", None)
}
