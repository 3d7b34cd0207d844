//! Core type definitions for the cuboid force engine.

use serde::{Deserialize, Serialize};

/// Scale used to round offset components to 10 decimal digits for cache keys.
const KEY_SCALE: f64 = 1e10;

/// Integer key of an offset rounded to 10 decimal digits per axis.
pub type OffsetKey = [i64; 3];

/// Center-to-center displacement between two cubes along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset3 {
    /// Displacement along x
    pub x: f64,
    /// Displacement along y
    pub y: f64,
    /// Displacement along z
    pub z: f64,
}

impl Offset3 {
    /// Create an offset from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cache key for this offset.
    ///
    /// Each component is rounded to 10 decimal digits, collapsing the
    /// floating-point noise accumulated by repeated +/- d arithmetic into
    /// a stable integer triple.
    pub fn rounded_key(&self) -> OffsetKey {
        [
            (self.x * KEY_SCALE).round() as i64,
            (self.y * KEY_SCALE).round() as i64,
            (self.z * KEY_SCALE).round() as i64,
        ]
    }
}

impl std::fmt::Display for Offset3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Result of one N^6 kernel summation.
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelSum {
    /// Accumulated force component
    pub value: f64,
    /// Number of quadrature terms dropped by the singularity floor
    pub floored_terms: usize,
}

/// Instrumented result of the touching-identical-cube computation.
///
/// `force` is the physically meaningful output; the separated sums and the
/// vertex/edge intermediates are reported for diagnostics and have no
/// standalone physical meaning outside the recursion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouchingForce {
    /// Face-touching force between the two full cubes
    pub force: f64,
    /// Separated-pair sum for the face basis direction
    pub s_face: f64,
    /// Separated-pair sum for the edge basis direction
    pub s_edge: f64,
    /// Separated-pair sum for the vertex basis direction
    pub s_vertex: f64,
    /// Reconstructed vertex-touching octant force
    pub vertex_force: f64,
    /// Reconstructed edge-touching octant force
    pub edge_force: f64,
    /// Number of distinct offsets actually integrated
    pub unique_pairs: usize,
}

impl TouchingForce {
    /// Force normalized by the fourth power of the cube edge.
    ///
    /// The force scales exactly as L^4, so this value is directly
    /// comparable with the published unit-cube result (~0.9259812606).
    pub fn normalized(&self, cube_size: f64) -> f64 {
        self.force / cube_size.powi(4)
    }
}
