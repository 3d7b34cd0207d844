//! Convergence of the Prideaux path toward the published unit-cube value.
//!
//! Run with: cargo run --release --example convergence_study

use math_gravity_cuboid::testing::UNIT_CUBE_REFERENCE;
use math_gravity_cuboid::touching_cube_force;

fn main() -> anyhow::Result<()> {
    println!(
        "{:>5} {:>16} {:>12} {:>7}",
        "N", "F", "abs err", "pairs"
    );
    for order in 2..=6 {
        let result = touching_cube_force(order, 1.0)?;
        println!(
            "{:>5} {:>16.10} {:>12.3e} {:>7}",
            order,
            result.force,
            (result.force - UNIT_CUBE_REFERENCE).abs(),
            result.unique_pairs
        );
    }
    Ok(())
}
