//! Ordinary least squares solver.
//!
//! We solve small dense problems of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - SVD rather than normal equations: polynomial design matrices are
//!   notoriously ill-conditioned, and SVD also gives a sensible (minimum-norm)
//!   answer when the design is rank deficient.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Columns are scaled to unit max-magnitude before the decomposition. Powers
//!   of x span many orders of magnitude, and without scaling the singular value
//!   cutoff would discard whole columns for very small or very large x.
//! - The cutoff is relative to the largest singular value.

use nalgebra::{DMatrix, DVector};

/// Relative singular value cutoffs, tried in order.
const TOLERANCES: [f64; 3] = [1e-12, 1e-10, 1e-8];

/// Iteration cap for the SVD; `svd()` would loop forever on a bad matrix.
const MAX_SVD_ITERATIONS: usize = 1_000;

/// A least squares solution plus the numerical rank of the design.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    pub beta: DVector<f64>,
    /// Number of singular values above the cutoff.
    pub rank: usize,
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the dimensions disagree, an entry is not finite, the SVD
/// does not converge, or no finite solution was found.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<LeastSquares> {
    if x.nrows() != y.len() || x.ncols() == 0 {
        return None;
    }
    if !(x.iter().all(|v| v.is_finite()) && y.iter().all(|v| v.is_finite())) {
        return None;
    }

    let scales = column_scales(x);
    let mut scaled = x.clone();
    for (j, &s) in scales.iter().enumerate() {
        for v in scaled.column_mut(j).iter_mut() {
            *v /= s;
        }
    }

    let svd = scaled.try_svd(true, true, f64::EPSILON, MAX_SVD_ITERATIONS)?;
    let s_max = svd.singular_values.max();
    if !(s_max.is_finite() && s_max > 0.0) {
        return None;
    }

    for &tol in &TOLERANCES {
        let eps = tol * s_max;
        if let Ok(mut beta) = svd.solve(y, eps) {
            for (b, &s) in beta.iter_mut().zip(scales.iter()) {
                *b /= s;
            }
            if beta.iter().all(|v| v.is_finite()) {
                return Some(LeastSquares {
                    rank: svd.rank(eps),
                    beta,
                });
            }
        }
    }

    None
}

/// Max-abs of each column; zero columns keep a scale of 1.
fn column_scales(x: &DMatrix<f64>) -> Vec<f64> {
    x.column_iter()
        .map(|col| {
            let m = col.amax();
            if m > 0.0 && m.is_finite() { m } else { 1.0 }
        })
        .collect()
}
