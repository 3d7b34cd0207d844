//! Numerical quadrature rules for the 6D force integral
//!
//! Provides Gauss-Legendre nodes and weights on [-1, 1] and the affinely
//! mapped per-cube bases on [0, L].

mod gauss;

pub use gauss::*;
