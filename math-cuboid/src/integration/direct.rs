//! Direct 6D integration between two arbitrary cubes
//!
//! One full quadrature pass with no classification, caching, or
//! recursion. This is the right tool whenever the touching-identical-cube
//! precondition fails: different sizes, a nonzero gap, or both.

use log::{debug, warn};

use crate::error::{ForceError, Result};
use crate::integration::kernel::{R2_FLOOR, pair_force};
use crate::quadrature::QuadratureBasis;
use crate::types::Offset3;

/// Force between two axis-aligned cubes of edge `size1` and `size2`,
/// separated by `gap` along the x axis and corner-aligned on y and z.
///
/// At `gap == 0` the kernel's singularity floor silently drops
/// near-coincident terms instead of correcting for them, so the result
/// carries elevated quadrature error near the shared boundary; a warning
/// is logged for that configuration. Identical touching cubes should go
/// through [`crate::prideaux::touching_cube_force`] instead.
///
/// # Errors
/// `InvalidOrder`, `InvalidLength`, or `InvalidGap` before any quadrature
/// work; `NumericDegeneracy` if the kernel sum comes back non-finite.
pub fn general_cube_force(order: usize, size1: f64, size2: f64, gap: f64) -> Result<f64> {
    if order < 2 {
        return Err(ForceError::InvalidOrder { order });
    }
    if size1 <= 0.0 || !size1.is_finite() {
        return Err(ForceError::InvalidLength {
            quantity: "cube size",
            value: size1,
        });
    }
    if size2 <= 0.0 || !size2.is_finite() {
        return Err(ForceError::InvalidLength {
            quantity: "cube size",
            value: size2,
        });
    }
    if gap < 0.0 || !gap.is_finite() {
        return Err(ForceError::InvalidGap { gap });
    }

    if gap == 0.0 {
        warn!(
            "zero-gap direct integration: singular terms near the shared boundary are \
             floored, expect degraded accuracy"
        );
    }

    let basis1 = QuadratureBasis::new(order, size1)?;
    let basis2 = QuadratureBasis::new(order, size2)?;
    let offset = Offset3::new(size1 + gap, 0.0, 0.0);

    let sum = pair_force(&basis1, &basis2, &offset, R2_FLOOR);
    if sum.floored_terms > 0 {
        debug!(
            "direct integration floored {} of {} kernel terms",
            sum.floored_terms,
            order.pow(6)
        );
    }
    if !sum.value.is_finite() {
        return Err(ForceError::NumericDegeneracy {
            x: offset.x,
            y: offset.y,
            z: offset.z,
        });
    }

    Ok(sum.value)
}
