//! Geometric classification of octant pair offsets

use crate::types::Offset3;

/// Tolerance for magnitude comparisons against the octant size and zero.
///
/// One decade above the cache's 10-decimal key rounding, so classification
/// and caching agree on which offsets are the same.
const MATCH_TOL: f64 = 1e-9;

/// How the boundaries of two equally sized axis-aligned cubes relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairClass {
    /// The cubes share a full face: one axis offset at d, two at zero
    Face,
    /// The cubes share only an edge: two axis offsets at d, one at zero
    Edge,
    /// The cubes share only a corner point: all three axis offsets at d
    Vertex,
    /// No shared boundary
    Separated,
}

/// Classify the boundary relation of two cubes of edge `d` whose origins
/// differ by `offset`.
///
/// Comparisons are tolerance-based: the offsets reaching this function
/// are built by repeated +/- d arithmetic and carry accumulation noise
/// well above one ulp. Checked face, then edge, then vertex, with
/// separated as the fallback.
pub fn classify(offset: &Offset3, d: f64) -> PairClass {
    let magnitudes = [offset.x.abs(), offset.y.abs(), offset.z.abs()];
    let at_d = magnitudes.iter().filter(|&&m| matches_value(m, d)).count();
    let at_zero = magnitudes
        .iter()
        .filter(|&&m| matches_value(m, 0.0))
        .count();

    if at_d == 1 && at_zero == 2 {
        PairClass::Face
    } else if at_d == 2 && at_zero == 1 {
        PairClass::Edge
    } else if at_d == 3 {
        PairClass::Vertex
    } else {
        PairClass::Separated
    }
}

/// Absolute comparison near zero, scaled comparison against larger targets.
#[inline]
fn matches_value(value: f64, target: f64) -> bool {
    (value - target).abs() <= MATCH_TOL * target.abs().max(1.0)
}
