//! QA Suite for math-gravity-cuboid
//!
//! Comprehensive validation against known results:
//! 1. Convergence of the Prideaux path to the published unit-cube value
//! 2. The exact L^4 scaling law
//! 3. Direct integration against the far-field point-mass limit
//!
//! Usage:
//!     cargo run --bin qa-suite --release

use directories::ProjectDirs;
use math_gravity_cuboid::testing::{ConvergenceRecord, ConvergenceStudy, UNIT_CUBE_REFERENCE};
use math_gravity_cuboid::{general_cube_force, touching_cube_force};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Starting math-gravity-cuboid QA suite...");
    println!("========================================");
    let mut failures = Vec::new();

    // 1. Unit-cube convergence
    println!("\nRunning unit-cube convergence study...");
    let mut study = ConvergenceStudy::new("Touching unit cubes", 1.0);
    for order in 2..=6 {
        let start = Instant::now();
        let result = touching_cube_force(order, 1.0)?;
        study.push(ConvergenceRecord::new(
            order,
            &result,
            UNIT_CUBE_REFERENCE,
            start.elapsed().as_secs_f64(),
        ));
    }
    study.print_summary();

    let first = &study.records[0];
    let last = &study.records[study.records.len() - 1];
    check(
        &mut failures,
        "convergence reaches the reference",
        last.abs_error < 1e-6,
    );
    check(
        &mut failures,
        "error shrinks with order",
        last.abs_error < first.abs_error,
    );
    check(
        &mut failures,
        "unique pair count is order-independent",
        study.records.iter().all(|r| r.unique_pairs == 54),
    );

    // 2. Scaling law: F(L) = L^4 * F(1) holds to float precision
    println!("\nChecking the L^4 scaling law...");
    let f_unit = touching_cube_force(4, 1.0)?.force;
    for size in [0.5, 2.0, 3.0] {
        let f = touching_cube_force(4, size)?.force;
        let rel = (f / size.powi(4) - f_unit).abs() / f_unit;
        println!("  L = {}: F = {:.10}, F/L^4 deviation = {:.3e}", size, f, rel);
        check(&mut failures, "scaling law", rel < 1e-10);
    }

    // 3. Far-field point-mass limit of the direct path
    println!("\nChecking the far-field point-mass limit...");
    for gap in [10.0, 100.0] {
        let f = general_cube_force(4, 1.0, 1.0, gap)?;
        let point_mass = 1.0 / ((1.0 + gap) * (1.0 + gap));
        let rel = ((f - point_mass) / point_mass).abs();
        println!("  gap = {}: F = {:.6e}, rel vs 1/D^2 = {:.3e}", gap, f, rel);
        check(&mut failures, "far-field limit", rel < 1e-4);
    }

    // Save the study for visualization tooling
    if let Some(dirs) = ProjectDirs::from("org", "mathgravity", "math-cuboid") {
        let out_dir = dirs.cache_dir().join("qa");
        std::fs::create_dir_all(&out_dir)?;
        let path = out_dir.join("unit_cube_convergence.json");
        study.save_json(&path)?;
        println!("\nSaved convergence study to {}", path.display());
    }

    println!("\n========================================");
    if failures.is_empty() {
        println!("All checks passed.");
        Ok(())
    } else {
        for name in &failures {
            println!("FAILED: {}", name);
        }
        anyhow::bail!("{} check(s) failed", failures.len());
    }
}

fn check(failures: &mut Vec<&'static str>, name: &'static str, ok: bool) {
    println!("  [{}] {}", if ok { "PASS" } else { "FAIL" }, name);
    if !ok {
        failures.push(name);
    }
}
