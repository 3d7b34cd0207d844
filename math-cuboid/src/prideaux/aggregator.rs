//! Separated-pair force sums over octant decompositions

use std::collections::HashSet;

use crate::error::{ForceError, Result};
use crate::integration::pair_force;
use crate::parallel::parallel_map;
use crate::prideaux::cache::PairForceCache;
use crate::prideaux::classify::{PairClass, classify};
use crate::quadrature::QuadratureBasis;
use crate::types::Offset3;

/// Sum of pair forces over the separated octant pairs for one canonical
/// basis direction.
///
/// Enumerates the 64 selector combinations (8 octants per cube, offset
/// `direction + (selector2 - selector1) * d` per axis, d the octant edge
/// taken from `basis`), keeps the offsets the classifier labels
/// separated, and accumulates their cached forces in enumeration order.
/// The face, edge, and vertex calls of one computation must share a
/// single cache: many of the 192 raw offsets coincide after rounding.
///
/// Uncached unique offsets are classified and deduplicated up front, so
/// the expensive integrations run in parallel against a single cache
/// writer and the final accumulation order stays fixed.
///
/// # Errors
/// `NumericDegeneracy` if any pair integral comes back non-finite.
pub fn separated_sum(
    direction: &Offset3,
    basis: &QuadratureBasis,
    cache: &mut PairForceCache,
    r2_floor: f64,
) -> Result<f64> {
    let d = basis.length();

    let mut separated = Vec::with_capacity(64);
    for octant1 in 0..8u32 {
        for octant2 in 0..8u32 {
            let offset = Offset3::new(
                direction.x + (axis_bit(octant2, 0) - axis_bit(octant1, 0)) * d,
                direction.y + (axis_bit(octant2, 1) - axis_bit(octant1, 1)) * d,
                direction.z + (axis_bit(octant2, 2) - axis_bit(octant1, 2)) * d,
            );
            if classify(&offset, d) == PairClass::Separated {
                separated.push(offset);
            }
        }
    }

    // First occurrence of each key not yet in the cache
    let mut pending = Vec::new();
    let mut seen = HashSet::new();
    for offset in &separated {
        let key = offset.rounded_key();
        if cache.get(&key).is_none() && seen.insert(key) {
            pending.push(*offset);
        }
    }

    let computed = parallel_map(&pending, |offset| {
        pair_force(basis, basis, offset, r2_floor)
    });
    for (offset, sum) in pending.iter().zip(computed) {
        if !sum.value.is_finite() {
            return Err(ForceError::NumericDegeneracy {
                x: offset.x,
                y: offset.y,
                z: offset.z,
            });
        }
        cache.insert(offset.rounded_key(), sum.value);
    }

    // Every key is warm by now; the closure is a sequential fallback only
    let mut total = 0.0;
    for offset in &separated {
        total += cache.get_or_compute(offset, |o| pair_force(basis, basis, o, r2_floor).value);
    }
    if !total.is_finite() {
        return Err(ForceError::NumericDegeneracy {
            x: direction.x,
            y: direction.y,
            z: direction.z,
        });
    }

    Ok(total)
}

/// Selector bit of `octant` along `axis`, as 0.0 or 1.0.
#[inline]
fn axis_bit(octant: u32, axis: u32) -> f64 {
    ((octant >> axis) & 1) as f64
}
