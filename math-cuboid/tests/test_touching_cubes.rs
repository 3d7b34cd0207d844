//! End-to-end validation of the Prideaux path
//!
//! Checks the touching-unit-cube force against the published value,
//! the memoization invariant, convergence with quadrature order, and the
//! exact L^4 scaling of the result.

use math_gravity_cuboid::testing::UNIT_CUBE_REFERENCE;
use math_gravity_cuboid::{prideaux_recursion, touching_cube_force};

#[test]
fn test_unit_cubes_match_literature() {
    let result = touching_cube_force(6, 1.0).unwrap();

    println!("\n=== Touching unit cubes, N = 6 ===");
    println!("F   = {:.10} (reference {})", result.force, UNIT_CUBE_REFERENCE);
    println!("S_F = {:.10}", result.s_face);
    println!("S_E = {:.10}", result.s_edge);
    println!("S_V = {:.10}", result.s_vertex);

    let rel = ((result.force - UNIT_CUBE_REFERENCE) / UNIT_CUBE_REFERENCE).abs();
    assert!(
        rel < 1e-6,
        "relative error {:.3e} against the published value",
        rel
    );
    assert_eq!(result.unique_pairs, 54);
}

#[test]
fn test_separated_sums_match_known_values() {
    // S-sums for unit cubes converge to fixed values of their own
    let result = touching_cube_force(5, 1.0).unwrap();
    assert!((result.s_face - 0.46675617).abs() < 1e-6);
    assert!((result.s_edge - 0.28877612).abs() < 1e-6);
    assert!((result.s_vertex - 0.18291832).abs() < 1e-6);
    assert!((result.vertex_force - 0.19511287).abs() < 1e-6);
    assert!((result.edge_force - 0.35790312).abs() < 1e-6);
}

#[test]
fn test_unique_pairs_independent_of_order() {
    for order in [2, 3, 4] {
        let result = touching_cube_force(order, 1.0).unwrap();
        assert_eq!(result.unique_pairs, 54, "order {}", order);
    }
}

#[test]
fn test_unique_pairs_independent_of_size() {
    // Rounded keys scale with the cube, the geometry does not change
    for size in [0.3, 1.0, 2.5] {
        let result = touching_cube_force(2, size).unwrap();
        assert_eq!(result.unique_pairs, 54, "size {}", size);
    }
}

#[test]
fn test_convergence_with_order() {
    let errors: Vec<f64> = (2..=6)
        .map(|order| {
            let f = touching_cube_force(order, 1.0).unwrap().force;
            (f - UNIT_CUBE_REFERENCE).abs()
        })
        .collect();

    println!("errors by order: {:?}", errors);
    // Gauss-Legendre oscillation allows small non-monotonicities; the
    // trend over the full range must be a strong decrease
    assert!(errors[4] < errors[0] * 1e-3);
    assert!(errors[4] < 1e-6);
    assert!(errors[2] < errors[0]);
}

#[test]
fn test_scaling_law_is_exact() {
    // Every kernel term scales as L^4 when nodes scale affinely, so the
    // law holds to float precision, not just asymptotically
    let f_unit = touching_cube_force(4, 1.0).unwrap().force;
    for size in [0.5, 2.0, 4.0] {
        let f = touching_cube_force(4, size).unwrap().force;
        let rel = (f / size.powi(4) - f_unit).abs() / f_unit;
        assert!(rel < 1e-10, "size {}: deviation {:.3e}", size, rel);
    }
}

#[test]
fn test_breakdown_satisfies_recursion_identity() {
    let result = touching_cube_force(4, 1.0).unwrap();
    let (f, v, e) = prideaux_recursion(result.s_face, result.s_edge, result.s_vertex);
    assert_eq!(result.force.to_bits(), f.to_bits());
    assert_eq!(result.vertex_force.to_bits(), v.to_bits());
    assert_eq!(result.edge_force.to_bits(), e.to_bits());
}

#[test]
fn test_repeat_runs_are_bitwise_identical() {
    let a = touching_cube_force(3, 1.0).unwrap();
    let b = touching_cube_force(3, 1.0).unwrap();
    assert_eq!(a.force.to_bits(), b.force.to_bits());
    assert_eq!(a.s_face.to_bits(), b.s_face.to_bits());
    assert_eq!(a.s_edge.to_bits(), b.s_edge.to_bits());
    assert_eq!(a.s_vertex.to_bits(), b.s_vertex.to_bits());
}
