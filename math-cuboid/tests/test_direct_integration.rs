//! Direct-path validation
//!
//! Far-field limits, physical monotonicities, and consistency between
//! quadrature orders for the general (non-touching or unequal) solver.

use math_gravity_cuboid::general_cube_force;

#[test]
fn test_far_field_approaches_point_masses() {
    // Unit cubes at corner gap g have center distance 1 + g; far away
    // they behave as unit point masses
    for (gap, tol) in [(10.0, 1e-4), (100.0, 1e-6)] {
        let force = general_cube_force(4, 1.0, 1.0, gap).unwrap();
        let point_mass = 1.0 / ((1.0 + gap) * (1.0 + gap));
        let rel = ((force - point_mass) / point_mass).abs();
        println!("gap {}: F = {:.6e}, rel = {:.3e}", gap, force, rel);
        assert!(rel < tol, "gap {}: rel {:.3e}", gap, rel);
    }
}

#[test]
fn test_orders_agree_for_smooth_configurations() {
    // With a healthy gap the integrand is smooth and low orders already
    // agree with high orders to many digits
    let coarse = general_cube_force(4, 1.0, 1.0, 2.0).unwrap();
    let fine = general_cube_force(7, 1.0, 1.0, 2.0).unwrap();
    assert!(((coarse - fine) / fine).abs() < 1e-6);
}

#[test]
fn test_swap_symmetry() {
    let ab = general_cube_force(5, 1.0, 2.0, 0.7).unwrap();
    let ba = general_cube_force(5, 2.0, 1.0, 0.7).unwrap();
    assert!(((ab - ba) / ab).abs() < 1e-12);
}

#[test]
fn test_force_monotone_in_gap() {
    let mut previous = f64::INFINITY;
    for gap in [0.5, 1.0, 2.0, 5.0, 10.0] {
        let force = general_cube_force(4, 1.0, 1.0, gap).unwrap();
        assert!(force > 0.0);
        assert!(force < previous, "gap {}: force should keep shrinking", gap);
        previous = force;
    }
}

#[test]
fn test_unequal_touching_cubes_run() {
    // Degraded-accuracy configuration: finite and positive is the contract
    let force = general_cube_force(3, 1.0, 2.0, 0.0).unwrap();
    assert!(force.is_finite());
    assert!(force > 0.0);
}

#[test]
fn test_validation_precedes_quadrature() {
    assert!(general_cube_force(0, 1.0, 1.0, 0.0).is_err());
    assert!(general_cube_force(6, -1.0, 1.0, 0.0).is_err());
    assert!(general_cube_force(6, 1.0, 0.0, 0.0).is_err());
    assert!(general_cube_force(6, 1.0, 1.0, -1e-9).is_err());
}
