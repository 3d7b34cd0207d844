//! Portable parallel iteration abstractions
//!
//! Numeric modules never talk to rayon directly; they go through these
//! shims, which use rayon when the `native` feature is enabled and fall
//! back to sequential iteration otherwise. Every shim returns results in
//! input order, so reductions built on top of them are deterministic
//! regardless of worker count.

/// Check if parallel processing is available
#[inline]
pub fn is_parallel_available() -> bool {
    cfg!(feature = "native")
}

/// Parallel map over a slice
///
/// When the `native` feature is enabled, uses rayon's parallel iterator.
/// Otherwise, falls back to sequential iteration.
#[cfg(feature = "native")]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter().map(f).collect()
}

#[cfg(not(feature = "native"))]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    data.iter().map(f).collect()
}

/// Parallel map over a range of indices
///
/// When the `native` feature is enabled, uses rayon's parallel iterator.
/// Otherwise, falls back to sequential iteration.
#[cfg(feature = "native")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "native"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map() {
        let data = vec![1, 2, 3, 4, 5];
        let result = parallel_map(&data, |x| x * 2);
        assert_eq!(result, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_parallel_map_indexed() {
        let result = parallel_map_indexed(5, |i| i * 2);
        assert_eq!(result, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_parallel_map_preserves_order() {
        let data: Vec<usize> = (0..100).collect();
        let result = parallel_map(&data, |x| x + 1);
        let expected: Vec<usize> = (1..101).collect();
        assert_eq!(result, expected);
    }
}
