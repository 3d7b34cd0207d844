//! Pairwise force integrand
//!
//! Evaluates the 6D Gauss-Legendre sum of the Newtonian force kernel
//! between two axis-aligned cubes separated by an offset vector. This is
//! the dominant cost center of the whole engine: O(N^6) kernel terms per
//! call.

use crate::parallel::parallel_map_indexed;
use crate::quadrature::QuadratureBasis;
use crate::types::{KernelSum, Offset3};

/// Default floor under which squared node distances are treated as singular.
///
/// Terms with r^2 <= this floor are skipped, not corrected, and the
/// skipped count is reported in [`KernelSum::floored_terms`]. Skipping
/// biases the result low when the cubes actually touch, so callers that
/// need accurate touching-cube forces must use the octant recursion
/// instead of relying on this floor.
pub const R2_FLOOR: f64 = 1e-12;

/// x-component of the force integral between two cubes.
///
/// Cube 1 spans `basis1`'s interval on each axis; cube 2 spans `basis2`'s
/// interval translated by `offset`. The outermost cube-1 node loop is
/// dispatched through the parallel shims and the partial sums are reduced
/// in index order, so the result is identical across worker counts.
pub fn pair_force(
    basis1: &QuadratureBasis,
    basis2: &QuadratureBasis,
    offset: &Offset3,
    r2_floor: f64,
) -> KernelSum {
    let partials = parallel_map_indexed(basis1.order(), |i| {
        slice_sum(basis1, basis2, offset, r2_floor, i)
    });

    let mut total = KernelSum::default();
    for partial in partials {
        total.value += partial.value;
        total.floored_terms += partial.floored_terms;
    }
    total
}

/// Kernel terms for a fixed outermost cube-1 node index.
fn slice_sum(
    basis1: &QuadratureBasis,
    basis2: &QuadratureBasis,
    offset: &Offset3,
    r2_floor: f64,
    i: usize,
) -> KernelSum {
    let n1 = basis1.order();
    let n2 = basis2.order();
    let x1 = basis1.node(i);
    let wx1 = basis1.weight(i);

    let mut value = 0.0;
    let mut floored = 0usize;

    for j in 0..n1 {
        let y1 = basis1.node(j);
        let wxy1 = wx1 * basis1.weight(j);
        for k in 0..n1 {
            let z1 = basis1.node(k);
            let w1 = wxy1 * basis1.weight(k);
            for p in 0..n2 {
                let dx = offset.x + basis2.node(p) - x1;
                let wx2 = basis2.weight(p);
                for q in 0..n2 {
                    let dy = offset.y + basis2.node(q) - y1;
                    let wxy2 = wx2 * basis2.weight(q);
                    for r in 0..n2 {
                        let dz = offset.z + basis2.node(r) - z1;
                        let r2 = dx * dx + dy * dy + dz * dz;
                        if r2 > r2_floor {
                            value += w1 * wxy2 * basis2.weight(r) * dx / (r2 * r2.sqrt());
                        } else {
                            floored += 1;
                        }
                    }
                }
            }
        }
    }

    KernelSum {
        value,
        floored_terms: floored,
    }
}
