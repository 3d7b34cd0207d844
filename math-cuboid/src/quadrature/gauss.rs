//! Gauss-Legendre quadrature nodes and weights
//!
//! Canonical nodes and weights on [-1, 1] from Newton iteration on the
//! Legendre recurrence, affinely mapped onto [0, L]. The iteration serves
//! arbitrary orders, unlike a fixed table.

use ndarray::Array1;

use crate::error::{ForceError, Result};

/// Gauss-Legendre basis along one cube edge: nodes and weights on [0, length].
///
/// Immutable once constructed. Weights sum to `length`; nodes lie strictly
/// inside the interval.
#[derive(Debug, Clone)]
pub struct QuadratureBasis {
    nodes: Array1<f64>,
    weights: Array1<f64>,
    length: f64,
}

impl QuadratureBasis {
    /// Build an `order`-point basis covering [0, `length`].
    ///
    /// The canonical rule on [-1, 1] is mapped by x -> 0.5 * (x + 1) * L
    /// and w -> 0.5 * w * L.
    ///
    /// # Errors
    /// `InvalidOrder` if `order` < 2, `InvalidLength` if `length` <= 0.
    pub fn new(order: usize, length: f64) -> Result<Self> {
        if order < 2 {
            return Err(ForceError::InvalidOrder { order });
        }
        if length <= 0.0 || !length.is_finite() {
            return Err(ForceError::InvalidLength {
                quantity: "interval length",
                value: length,
            });
        }

        let (x, w) = gauss_legendre(order);
        let nodes = Array1::from_iter(x.iter().map(|&xi| 0.5 * (xi + 1.0) * length));
        let weights = Array1::from_iter(w.iter().map(|&wi| 0.5 * wi * length));

        Ok(Self {
            nodes,
            weights,
            length,
        })
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the covered interval.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Mapped nodes on [0, length], ascending.
    pub fn nodes(&self) -> &Array1<f64> {
        &self.nodes
    }

    /// Mapped weights; they sum to `length`.
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Node at index `i`.
    #[inline]
    pub fn node(&self, i: usize) -> f64 {
        self.nodes[i]
    }

    /// Weight at index `i`.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }
}

/// Canonical N-point Gauss-Legendre nodes and weights on [-1, 1].
///
/// Nodes ascend; weights sum to 2. Roots of P_n are found by Newton
/// iteration from the Chebyshev initial guess, which converges in a
/// handful of steps for every practical order.
pub fn gauss_legendre(order: usize) -> (Vec<f64>, Vec<f64>) {
    let n = order;
    let mut x = vec![0.0; n];
    let mut w = vec![0.0; n];

    if n == 1 {
        x[0] = 0.0;
        w[0] = 2.0;
        return (x, w);
    }

    let m = n.div_ceil(2);
    for i in 0..m {
        let mut z = (std::f64::consts::PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();

        for _ in 0..100 {
            let (p, dp) = legendre_and_derivative(n, z);
            let dz = p / dp;
            z -= dz;
            if dz.abs() < 1e-15 {
                break;
            }
        }

        let (_, dp) = legendre_and_derivative(n, z);
        let weight = 2.0 / ((1.0 - z * z) * dp * dp);

        // The guess walks down from the +1 end; mirror into both halves.
        x[i] = -z;
        x[n - 1 - i] = z;
        w[i] = weight;
        w[n - 1 - i] = weight;
    }

    (x, w)
}

/// Legendre polynomial P_n(x) and its derivative via the three-term recurrence.
fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p = x;
    let mut dp_prev = 0.0;
    let mut dp = 1.0;

    for k in 2..=n {
        let kf = k as f64;
        let p_next = ((2.0 * kf - 1.0) * x * p - (kf - 1.0) * p_prev) / kf;
        let dp_next = ((2.0 * kf - 1.0) * (p + x * dp) - (kf - 1.0) * dp_prev) / kf;
        p_prev = p;
        p = p_next;
        dp_prev = dp;
        dp = dp_next;
    }

    (p, dp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauss_legendre_2() {
        let (x, w) = gauss_legendre(2);
        assert_eq!(x.len(), 2);
        assert!((x[0] + 0.5773502691896257).abs() < 1e-14);
        assert!((x[1] - 0.5773502691896257).abs() < 1e-14);
        assert!((w[0] - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_gauss_legendre_6_matches_tables() {
        let (x, w) = gauss_legendre(6);
        assert!((x[0] + 0.9324695142031521).abs() < 1e-13);
        assert!((x[2] + 0.2386191860831969).abs() < 1e-13);
        assert!((w[0] - 0.1713244923791704).abs() < 1e-13);
        assert!((w[2] - 0.4679139345726910).abs() < 1e-13);
    }

    #[test]
    fn test_gauss_weights_sum() {
        // Sum of weights should be 2 (integral of 1 over [-1,1])
        for n in [2, 3, 5, 8, 16, 33, 64] {
            let (_, w) = gauss_legendre(n);
            let sum: f64 = w.iter().sum();
            assert!((sum - 2.0).abs() < 1e-12, "n={}: sum={}", n, sum);
        }
    }

    #[test]
    fn test_gauss_integrates_polynomials() {
        // N points are exact up to degree 2N-1: integrate x^6 over [-1,1] = 2/7
        let (x, w) = gauss_legendre(4);
        let integral: f64 = x.iter().zip(&w).map(|(xi, wi)| xi.powi(6) * wi).sum();
        assert!((integral - 2.0 / 7.0).abs() < 1e-14);

        // Odd powers vanish
        let integral: f64 = x.iter().zip(&w).map(|(xi, wi)| xi.powi(7) * wi).sum();
        assert!(integral.abs() < 1e-14);
    }

    #[test]
    fn test_basis_weights_sum_to_length() {
        for order in [2, 4, 6, 11] {
            for length in [0.5, 1.0, 3.75] {
                let basis = QuadratureBasis::new(order, length).unwrap();
                let sum: f64 = basis.weights().sum();
                assert!(
                    (sum - length).abs() < 1e-12,
                    "order={} length={}: sum={}",
                    order,
                    length,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_basis_nodes_strictly_inside() {
        let basis = QuadratureBasis::new(8, 2.0).unwrap();
        for &node in basis.nodes() {
            assert!(node > 0.0 && node < 2.0);
        }
    }

    #[test]
    fn test_basis_rejects_bad_inputs() {
        assert!(QuadratureBasis::new(1, 1.0).unwrap_err().is_order_error());
        assert!(QuadratureBasis::new(4, 0.0).unwrap_err().is_length_error());
        assert!(QuadratureBasis::new(4, -1.0).unwrap_err().is_length_error());
    }
}
