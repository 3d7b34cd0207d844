//! # Gravitational force between axis-aligned cuboids
//!
//! Numerical engine for the attraction between two axis-aligned cubes
//! (Trefethen's problem no. 5), built on 6D Gauss-Legendre quadrature.
//!
//! ## Features
//!
//! - Prideaux octant recursion for identical touching cubes: the singular
//!   touching-pair integral is reconstructed from separated octant pairs
//!   and a closed-form 3-equation recurrence
//! - Direct 6D integration for arbitrary sizes and gaps
//! - Pair-force memoization keyed by rounded offsets
//! - Parallel execution with Rayon (behind the `native` feature)
//! - JSON reporting for validation tooling
//!
//! ## Example
//!
//! ```
//! use math_gravity_cuboid::touching_cube_force;
//!
//! let result = touching_cube_force(4, 1.0).unwrap();
//! assert!((result.force - 0.9259812606).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)] // Scientific code often has many parameters

pub mod error;
pub mod integration;
pub mod parallel;
pub mod prideaux;
pub mod quadrature;
pub mod testing;
pub mod types;

// Re-exports
pub use error::{ForceError, Result};
pub use integration::{R2_FLOOR, general_cube_force, pair_force};
pub use prideaux::{
    PairClass, PairForceCache, classify, prideaux_recursion, separated_sum, touching_cube_force,
};
pub use quadrature::{QuadratureBasis, gauss_legendre};
pub use types::{KernelSum, Offset3, OffsetKey, TouchingForce};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
