//! Validation and convergence reporting
//!
//! Record types for comparing computed forces against reference values,
//! with JSON export for external tooling.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::TouchingForce;

/// Published reference force for two unit cubes sharing a face.
pub const UNIT_CUBE_REFERENCE: f64 = 0.9259812606;

/// One row of a convergence study: the computed force at a given order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceRecord {
    /// Quadrature order per dimension
    pub order: usize,
    /// Computed face-touching force
    pub force: f64,
    /// Reference value the force is compared against
    pub reference: f64,
    /// Absolute error against the reference
    pub abs_error: f64,
    /// Distinct offsets integrated for this row
    pub unique_pairs: usize,
    /// Wall-clock time of the computation
    pub seconds: f64,
}

impl ConvergenceRecord {
    /// Build a record from an instrumented touching-cube result.
    pub fn new(order: usize, result: &TouchingForce, reference: f64, seconds: f64) -> Self {
        Self {
            order,
            force: result.force,
            reference,
            abs_error: (result.force - reference).abs(),
            unique_pairs: result.unique_pairs,
            seconds,
        }
    }
}

/// A convergence study over a range of quadrature orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceStudy {
    /// Human-readable study name
    pub test_name: String,
    /// Cube edge length the study was run at
    pub cube_size: f64,
    /// Per-order records, ascending in order
    pub records: Vec<ConvergenceRecord>,
}

impl ConvergenceStudy {
    /// Start an empty study.
    pub fn new(test_name: impl Into<String>, cube_size: f64) -> Self {
        Self {
            test_name: test_name.into(),
            cube_size,
            records: Vec::new(),
        }
    }

    /// Append one record.
    pub fn push(&mut self, record: ConvergenceRecord) {
        self.records.push(record);
    }

    /// Smallest error over all records, if any.
    pub fn best_error(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.abs_error)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Save the study as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Print a fixed-width summary table.
    pub fn print_summary(&self) {
        println!("\n=== {} (L = {}) ===", self.test_name, self.cube_size);
        println!(
            "{:>5} {:>16} {:>12} {:>7} {:>8}",
            "N", "F", "abs err", "pairs", "time"
        );
        for r in &self.records {
            println!(
                "{:>5} {:>16.10} {:>12.3e} {:>7} {:>7.2}s",
                r.order, r.force, r.abs_error, r.unique_pairs, r.seconds
            );
        }
    }
}
