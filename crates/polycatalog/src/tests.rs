use std::sync::Arc;

use itertools::Itertools;
use polymath::assert_approx_eq;
use polymath::prelude::*;
use polyshape::{HullError, ParamError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

use super::*;

fn load_new_catalog() -> Catalog {
    let catalog = Catalog::new();
    load_builtins(&catalog);
    catalog
}

fn raw(value: serde_json::Value) -> RawParams {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected JSON object"),
    }
}

/// Returns `(V, E, F)`.
fn counts(p: &Polytope) -> (usize, usize, usize) {
    (p.vertices().len(), p.edges().len(), p.faces().len())
}

fn assert_well_formed(p: &Polytope) {
    let n = p.vertices().len();
    assert_eq!(p.euler_characteristic(), 2, "Euler characteristic of {}", p.name());
    assert!(p.faces().iter().all(|f| f.len() >= 3));
    assert!(p.faces().iter().flatten().all(|&i| i < n));
    assert!(p.edges().iter().flatten().all(|&i| i < n));
    assert!(p.edges().iter().all(|&[a, b]| a < b));
    assert!(p.edges().iter().all_unique());

    let center = p.center();
    let residual: Vector = p.vertices().iter().map(|v| v.to_vector() - center).sum();
    assert!(residual.norm() < 1e-9, "{} is not centered", p.name());

    let triangles = p.triangulate();
    let expected: usize = p.faces().iter().map(|f| f.len() - 2).sum();
    assert_eq!(triangles.len(), expected);
}

#[test]
fn test_builtin_polytope_counts() {
    let catalog = load_new_catalog();
    let expected = [
        ("associahedron", (14, 21, 9)),
        ("cube", (8, 12, 6)),
        ("cyclohedron", (20, 38, 20)),
        ("dodecahedron", (20, 30, 12)),
        ("icosahedron", (12, 30, 20)),
        ("multiplihedron", (11, 21, 12)),
        ("octahedron", (6, 12, 8)),
        ("orbit_polytope", (12, 24, 14)),
        ("permutahedron", (24, 36, 14)),
        ("permutahedron_b3", (48, 72, 26)),
        ("platonic_solid", (8, 12, 6)),
        ("root_polytope", (12, 24, 14)),
        ("stellahedron", (16, 24, 10)),
        ("tetrahedron", (4, 6, 4)),
    ];

    let ids = catalog.builders().iter().map(|b| b.id.clone()).collect_vec();
    assert_eq!(ids, expected.map(|(id, _)| id.to_owned()));

    for (id, expected_counts) in expected {
        let p = catalog.build(id, None).unwrap();
        assert_well_formed(&p);
        assert_eq!(counts(&p), expected_counts, "{id}");
    }
}

#[test]
fn test_root_polytopes() {
    let catalog = load_new_catalog();
    for (ty, expected_counts) in [
        ("A3", (12, 24, 14)),
        ("B3", (12, 24, 14)),
        ("C3", (6, 12, 8)),
        ("D3", (12, 24, 14)),
        ("H3", (30, 60, 32)),
    ] {
        let p = catalog
            .build("root_polytope", Some(&raw(json!({ "type": ty }))))
            .unwrap();
        assert_well_formed(&p);
        assert_eq!(counts(&p), expected_counts, "{ty}");
        assert_eq!(p.name(), "Root Polytope");
        assert_eq!(p.parameters().choice("type"), Ok(ty));
    }
}

#[test]
fn test_platonic_solids() {
    let catalog = load_new_catalog();
    for (ty, id) in [
        ("tetrahedron", "tetrahedron"),
        ("cube", "cube"),
        ("octahedron", "octahedron"),
        ("dodecahedron", "dodecahedron"),
        ("icosahedron", "icosahedron"),
    ] {
        let p = catalog
            .build("platonic_solid", Some(&raw(json!({ "type": ty }))))
            .unwrap();
        let standalone = catalog.build(id, None).unwrap();
        assert_eq!(p.vertices(), standalone.vertices());
        assert_eq!(p.faces(), standalone.faces());
        assert_eq!(p.name(), "Platonic Solids");
    }

    // Types are matched ignoring case, and "hexahedron" means cube.
    for ty in ["Cube", "HEXAHEDRON", "hexahedron"] {
        let p = catalog
            .build("platonic_solid", Some(&raw(json!({ "type": ty }))))
            .unwrap();
        assert_eq!(p.parameters().choice("type"), Ok("cube"));
        assert_eq!(counts(&p), (8, 12, 6));
    }
}

#[test]
fn test_convenience_builders() {
    let cube = build_cube().unwrap();
    assert_eq!(cube.name(), "Cube");
    assert_eq!(counts(&cube), (8, 12, 6));
    for v in cube.vertices() {
        assert!(v.iter().all(|x| x.abs() == 1.0));
    }
    assert_approx_eq!(cube.center().to_vector(), Vector::zero(3));

    let octahedron = build_octahedron().unwrap();
    assert_eq!(counts(&octahedron), (6, 12, 8));
    for v in octahedron.vertices() {
        assert_eq!(v.iter().filter(|x| x.abs() == 1.0).count(), 1);
        assert_eq!(v.iter().filter(|x| x.abs() == 0.0).count(), 2);
    }

    assert_eq!(counts(&build_permutahedron().unwrap()), (24, 36, 14));

    let a3 = build_root_polytope(Some(&raw(json!({ "type": "A3" })))).unwrap();
    assert_eq!(counts(&a3), (12, 24, 14));

    assert_eq!(counts(&build_tetrahedron().unwrap()), (4, 6, 4));
    assert_eq!(counts(&build_dodecahedron().unwrap()), (20, 30, 12));
    assert_eq!(counts(&build_icosahedron().unwrap()), (12, 30, 20));
    assert_eq!(counts(&build_permutahedron_b3().unwrap()), (48, 72, 26));
    assert_eq!(counts(&build_associahedron().unwrap()), (14, 21, 9));
    assert_eq!(counts(&build_cyclohedron().unwrap()), (20, 38, 20));
    assert_eq!(counts(&build_stellahedron().unwrap()), (16, 24, 10));
    assert_eq!(counts(&build_multiplihedron().unwrap()), (11, 21, 12));
    assert_eq!(counts(&build_platonic_solid(None).unwrap()), (8, 12, 6));
    assert_eq!(counts(&build_orbit_polytope(None).unwrap()), (12, 24, 14));
}

#[test]
fn test_invalid_parameters() {
    let unknown_type = raw(json!({ "type": "unknown" }));
    for result in [
        build_platonic_solid(Some(&unknown_type)),
        build_root_polytope(Some(&unknown_type)),
    ] {
        assert!(
            matches!(
                result,
                Err(BuildError::InvalidParameter(ParamError::UnsupportedOption { .. })),
            ),
            "{result:?}",
        );
    }

    let catalog = load_new_catalog();
    assert_eq!(
        catalog.build("orbit_polytope", Some(&raw(json!({ "point": [1, 2, 3] })))),
        Err(BuildError::InvalidParameter(ParamError::WrongDimension {
            key: "point".to_owned(),
            expected: 4,
            actual: 3,
        })),
    );
    assert_eq!(
        catalog.build("cube", Some(&raw(json!({ "size": 2 })))),
        Err(BuildError::InvalidParameter(ParamError::UnknownKey {
            key: "size".to_owned(),
        })),
    );
    assert!(matches!(
        catalog.build("root_polytope", Some(&raw(json!({ "type": 3 })))),
        Err(BuildError::InvalidParameter(ParamError::WrongType { .. })),
    ));
}

#[test]
fn test_degenerate_input() {
    let catalog = load_new_catalog();
    assert_eq!(
        catalog.build("orbit_polytope", Some(&raw(json!({ "point": [1, 1, 1, 1] })))),
        Err(BuildError::DegenerateInput(HullError::TooFewPoints { count: 1 })),
    );
    // The orbit of (0, 0, 1, 1) is an octahedron.
    let octahedron = catalog
        .build("orbit_polytope", Some(&raw(json!({ "point": [0, 0, 1, 1] }))))
        .unwrap();
    assert_eq!(counts(&octahedron), (6, 12, 8));
}

#[test]
fn test_orbit_polytope_at_any_scale() {
    let catalog = load_new_catalog();
    for scale in [1e-7, 1e-5, 1e6, 1e9] {
        let point = [1.0, 2.0, 2.0, 3.0].map(|x| x * scale);
        let p = catalog
            .build("orbit_polytope", Some(&raw(json!({ "point": point }))))
            .unwrap_or_else(|e| panic!("scale {scale}: {e}"));
        assert_eq!(counts(&p), (12, 24, 14), "scale {scale}");
        assert_eq!(p.euler_characteristic(), 2);
        assert!(p.faces().iter().all(|f| f.len() >= 3));
    }
}

#[test]
fn test_determinism() {
    let a = load_new_catalog();
    let b = load_new_catalog();
    for builder in a.builders() {
        let pa = a.build(&builder.id, None).unwrap();
        let pb = b.build(&builder.id, None).unwrap();
        assert_eq!(*pa, *pb);
    }
}

#[test]
fn test_generated_ids() {
    assert_eq!(parse_generated_id("cube"), None);
    assert_eq!(parse_generated_id("root_polytope:H3"), Some(("root_polytope", vec!["H3"])));
    assert_eq!(
        parse_generated_id("orbit_polytope:1,2,2,3"),
        Some(("orbit_polytope", vec!["1", "2", "2", "3"])),
    );
    assert_eq!(generated_id("orbit_polytope", [1, 2, 2, 3]), "orbit_polytope:1,2,2,3");
    assert_eq!(generated_id("cube", Vec::<String>::new()), "cube");

    assert_eq!(validate_id("permutahedron_b3"), Ok(()));
    for bad in ["", "root polytope", "cube:3", "a-b"] {
        assert_eq!(validate_id(bad), Err(CatalogError::InvalidId(bad.to_owned())));
    }
}

#[test]
fn test_build_generated() {
    let catalog = load_new_catalog();

    let h3 = catalog.build_generated("root_polytope:H3").unwrap();
    assert_eq!(counts(&h3), (30, 60, 32));

    let permutahedron = catalog.build_generated("orbit_polytope:1,2,3,4").unwrap();
    assert_eq!(counts(&permutahedron), (24, 36, 14));
    assert_eq!(permutahedron.parameters().vector("point"), Ok(&[1.0, 2.0, 3.0, 4.0][..]));

    assert_eq!(
        catalog.build_generated("nonexistent:1"),
        Err(BuildError::Catalog(CatalogError::UnknownBuilder(
            "nonexistent".to_owned()
        ))),
    );
    assert_eq!(
        catalog.build_generated("cube:1"),
        Err(BuildError::InvalidParameter(ParamError::WrongArgCount {
            expected: 0,
            actual: 1,
        })),
    );
    assert!(matches!(
        catalog.build_generated("orbit_polytope:1,2,x,3"),
        Err(BuildError::InvalidParameter(ParamError::BadArg { .. })),
    ));
    assert!(matches!(
        catalog.build_generated("root_polytope:E8"),
        Err(BuildError::InvalidParameter(ParamError::UnsupportedOption { .. })),
    ));
}

#[test]
fn test_memoization() {
    let catalog = load_new_catalog();

    let a = catalog.build_generated("root_polytope:H3").unwrap();
    let b = catalog
        .build("root_polytope", Some(&raw(json!({ "type": "H3" }))))
        .unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    // Default parameters are filled in before looking up the cache.
    let a = catalog.build_generated("root_polytope").unwrap();
    let b = catalog.build_generated("root_polytope:A3").unwrap();
    let c = catalog.build("root_polytope", None).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &c));

    // Clones share the cache.
    let d = catalog.clone().build("root_polytope", None).unwrap();
    assert!(Arc::ptr_eq(&a, &d));

    catalog.clear_cache();
    let e = catalog.build("root_polytope", None).unwrap();
    assert!(!Arc::ptr_eq(&a, &e));
    assert_eq!(a, e);
}

#[test]
fn test_custom_builder() {
    let catalog = Catalog::new();
    let prism = PolytopeBuilder::new(
        "prism",
        "Prism",
        ParamSchema::new().with("height", ParamSpec::vector("Height", "Prism height", [1.0])),
        |params| {
            let h = params.vector("height")?[0];
            let mut points = vec![];
            for z in [0.0, h] {
                for i in 0..3 {
                    let angle = std::f64::consts::TAU * i as Float / 3.0;
                    points.push([angle.cos(), angle.sin(), z]);
                }
            }
            Ok(points)
        },
    );
    assert!(format!("{prism:?}").contains("\"prism\""));
    catalog.add_builder(prism).unwrap();

    let p = catalog.build_generated("prism:2.5").unwrap();
    assert_eq!(counts(&p), (6, 9, 5));
    assert_eq!(p.name(), "Prism");
    assert_approx_eq!(p.center()[2], 1.25);

    assert_eq!(
        catalog.add_builder(PolytopeBuilder::fixed("prism", "Prism", || Ok(vec![]))),
        Err(CatalogError::DuplicateBuilder("prism".to_owned())),
    );
    assert_eq!(
        catalog.add_builder(PolytopeBuilder::fixed("bad id", "Bad", || Ok(vec![]))),
        Err(CatalogError::InvalidId("bad id".to_owned())),
    );
    assert_eq!(
        catalog.build("empty", None),
        Err(BuildError::Catalog(CatalogError::UnknownBuilder("empty".to_owned()))),
    );
}

#[test]
fn test_global_catalog() {
    let ids = catalog().builders().iter().map(|b| b.id.clone()).collect_vec();
    assert_eq!(ids.len(), 14);
    assert!(ids.contains(&"root_polytope".to_owned()));

    // The cache is shared by every handle to the global catalog until it is
    // cleared.
    let a = catalog().build_generated("platonic_solid:octahedron").unwrap();
    let b = catalog().build_generated("platonic_solid:octahedron").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    catalog().clear_cache();
    let c = catalog().build_generated("platonic_solid:octahedron").unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn proptest_orbit_of_distinct_coordinates_is_permutahedron(
        point in prop::sample::subsequence((0..20).collect::<Vec<i32>>(), 4).prop_shuffle(),
    ) {
        let catalog = load_new_catalog();
        let p = catalog
            .build("orbit_polytope", Some(&raw(json!({ "point": point }))))
            .unwrap();
        assert_well_formed(&p);
        prop_assert_eq!(counts(&p), (24, 36, 14));
    }
}
