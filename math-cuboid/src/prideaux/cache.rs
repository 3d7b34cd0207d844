//! Memoization of pair forces by rounded offset key

use std::collections::HashMap;

use crate::types::{Offset3, OffsetKey};

/// Session-local memo of pair forces, keyed by offsets rounded to 10
/// decimal digits per axis.
///
/// A fresh cache must be used for every computation: the same nominal
/// offset means a different geometry at a different octant size. The
/// cache treats offsets that round to the same key as physically
/// equivalent, which holds for the symmetric octant enumeration feeding
/// it.
#[derive(Debug, Default)]
pub struct PairForceCache {
    forces: HashMap<OffsetKey, f64>,
}

impl PairForceCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct offsets integrated so far.
    pub fn len(&self) -> usize {
        self.forces.len()
    }

    /// True if nothing has been integrated yet.
    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Look up a previously computed force.
    pub fn get(&self, key: &OffsetKey) -> Option<f64> {
        self.forces.get(key).copied()
    }

    /// Store a computed force under `key`. The first write wins; a later
    /// insert for the same key is ignored.
    pub fn insert(&mut self, key: OffsetKey, force: f64) {
        self.forces.entry(key).or_insert(force);
    }

    /// Return the cached force for `offset`, computing and storing it on
    /// first sight of its rounded key.
    pub fn get_or_compute<F>(&mut self, offset: &Offset3, compute: F) -> f64
    where
        F: FnOnce(&Offset3) -> f64,
    {
        let key = offset.rounded_key();
        if let Some(force) = self.forces.get(&key) {
            return *force;
        }
        let force = compute(offset);
        self.forces.insert(key, force);
        force
    }
}
