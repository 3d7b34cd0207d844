//! Prideaux octant recursion for identical touching cubes
//!
//! The direct force integral between touching cubes is singular on the
//! shared face. Splitting each cube into 8 octants turns the problem into
//! sums over separated octant pairs plus a closed-form 3-equation
//! recurrence that reconstructs the touching-pair contributions from the
//! geometric self-similarity of the decomposition. Only non-singular
//! integrals are ever evaluated.

mod aggregator;
mod cache;
mod classify;
mod recursion;

pub use aggregator::*;
pub use cache::*;
pub use classify::*;
pub use recursion::*;
