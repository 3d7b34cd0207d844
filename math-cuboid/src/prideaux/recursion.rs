//! Closed-form recursion recovering the touching-cube force

use log::debug;

use crate::error::{ForceError, Result};
use crate::integration::R2_FLOOR;
use crate::prideaux::aggregator::separated_sum;
use crate::prideaux::cache::PairForceCache;
use crate::quadrature::QuadratureBasis;
use crate::types::{Offset3, TouchingForce};

/// Solve the octant recurrence for (F, V, E) from the three separated sums.
///
/// ```text
/// V = (16/15) * S_V
/// E = (V + 8 * S_E) / 7
/// F = (2 * E + V + 4 * S_F) / 3
/// ```
///
/// The system comes from the self-similarity of the octant decomposition
/// and is exact for exact S-inputs; quadrature truncation in the S-sums is
/// the only error source. No iteration, no convergence check.
pub fn prideaux_recursion(s_face: f64, s_edge: f64, s_vertex: f64) -> (f64, f64, f64) {
    let vertex_force = 16.0 / 15.0 * s_vertex;
    let edge_force = (vertex_force + 8.0 * s_edge) / 7.0;
    let face_force = (2.0 * edge_force + vertex_force + 4.0 * s_face) / 3.0;
    (face_force, vertex_force, edge_force)
}

/// Force between two identical touching cubes of edge `cube_size`.
///
/// Runs the full instrumented Prideaux path: separated octant sums for
/// the face, edge, and vertex basis directions over a shared pair-force
/// cache, then the closed-form recursion. The singular touching-pair
/// integral itself is never evaluated.
///
/// # Errors
/// `InvalidOrder` or `InvalidLength` before any quadrature work;
/// `NumericDegeneracy` if a pair integral comes back non-finite.
pub fn touching_cube_force(order: usize, cube_size: f64) -> Result<TouchingForce> {
    if order < 2 {
        return Err(ForceError::InvalidOrder { order });
    }
    if cube_size <= 0.0 || !cube_size.is_finite() {
        return Err(ForceError::InvalidLength {
            quantity: "cube size",
            value: cube_size,
        });
    }

    let d = cube_size / 2.0;
    let basis = QuadratureBasis::new(order, d)?;
    let mut cache = PairForceCache::new();

    let l = cube_size;
    let s_face = separated_sum(&Offset3::new(l, 0.0, 0.0), &basis, &mut cache, R2_FLOOR)?;
    let s_edge = separated_sum(&Offset3::new(l, l, 0.0), &basis, &mut cache, R2_FLOOR)?;
    let s_vertex = separated_sum(&Offset3::new(l, l, l), &basis, &mut cache, R2_FLOOR)?;

    debug!(
        "separated sums: S_F={s_face:.8} S_E={s_edge:.8} S_V={s_vertex:.8} \
         ({} unique pairs integrated)",
        cache.len()
    );

    let (force, vertex_force, edge_force) = prideaux_recursion(s_face, s_edge, s_vertex);

    Ok(TouchingForce {
        force,
        s_face,
        s_edge,
        s_vertex,
        vertex_force,
        edge_force,
        unique_pairs: cache.len(),
    })
}
